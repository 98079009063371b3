use yew::prelude::*;

use pipeline::request::MAX_HORIZON;
use pipeline::schema::{ParameterSchema, ParameterValue, ParameterValues};

use super::parameters::ParameterForm;
use crate::api_client::models::ForecastModel;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub models: Vec<ForecastModel>,
    pub selected_model: String,
    pub schema: Option<ParameterSchema>,
    pub parameter_values: ParameterValues,
    pub horizon: String,
    pub start_date: String,
    pub end_date: String,
    pub submitting: bool,
    pub on_model_change: Callback<String>,
    pub on_parameter_change: Callback<(String, ParameterValue)>,
    pub on_horizon_change: Callback<String>,
    pub on_start_date_change: Callback<String>,
    pub on_end_date_change: Callback<String>,
    pub on_submit: Callback<()>,
}

fn input_callback(target: &Callback<String>) -> Callback<Event> {
    let target = target.clone();
    Callback::from(move |e: Event| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        target.emit(input.value());
    })
}

/// The forecast control panel: model selector, horizon, data date range,
/// per-model parameters and the run button.
#[function_component(ForecastControls)]
pub fn forecast_controls(props: &Props) -> Html {
    let on_model_change = {
        let on_model_change = props.on_model_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_model_change.emit(select.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    // Keyboard shortcut: Ctrl+Enter runs the forecast.
    let onkeydown = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.ctrl_key() && e.key() == "Enter" {
                on_submit.emit(());
            }
        })
    };

    let description = props
        .models
        .iter()
        .find(|m| m.id == props.selected_model)
        .map(|m| m.description.clone())
        .unwrap_or_default();

    html! {
        <div class="card bg-base-100 shadow" {onkeydown}>
            <div class="card-body">
                <h3 class="card-title text-lg">{"Forecast Settings"}</h3>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Model"}</span></label>
                    <select class="select select-bordered w-full" onchange={on_model_change}>
                        <option value="" selected={props.selected_model.is_empty()}>
                            {"Select a forecast model..."}
                        </option>
                        { for props.models.iter().map(|model| html! {
                            <option value={model.id.clone()} selected={model.id == props.selected_model}>
                                {&model.name}
                            </option>
                        })}
                    </select>
                    { if !description.is_empty() {
                        html! { <span class="label-text-alt text-gray-500 mt-1">{description}</span> }
                    } else {
                        html! {}
                    }}
                </div>

                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{format!("Horizon (1-{MAX_HORIZON} periods)")}</span>
                    </label>
                    <input
                        type="number"
                        class="input input-bordered w-full"
                        min="1"
                        max={MAX_HORIZON.to_string()}
                        value={props.horizon.clone()}
                        onchange={input_callback(&props.on_horizon_change)}
                    />
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Data start"}</span></label>
                        <input
                            type="date"
                            class="input input-bordered w-full"
                            value={props.start_date.clone()}
                            onchange={input_callback(&props.on_start_date_change)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Data end"}</span></label>
                        <input
                            type="date"
                            class="input input-bordered w-full"
                            value={props.end_date.clone()}
                            onchange={input_callback(&props.on_end_date_change)}
                        />
                    </div>
                </div>

                <ParameterForm
                    schema={props.schema.clone()}
                    values={props.parameter_values.clone()}
                    on_change={props.on_parameter_change.clone()}
                />

                <div class="card-actions justify-end mt-4">
                    <button
                        class="btn btn-primary"
                        disabled={props.submitting}
                        onclick={on_submit}
                    >
                        { if props.submitting {
                            html! { <><span class="loading loading-spinner loading-sm"></span>{" Forecasting..."}</> }
                        } else {
                            html! { <><i class="fas fa-play"></i>{" Run Forecast"}</> }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
