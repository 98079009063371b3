use yew::prelude::*;

use pipeline::schema::{NONE_SENTINEL, ParameterSchema, ParameterSpec, ParameterValue, ParameterValues};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Schema of the currently selected model, absent when none is selected.
    pub schema: Option<ParameterSchema>,
    pub values: ParameterValues,
    pub on_change: Callback<(String, ParameterValue)>,
}

/// Renders one control per parameter of the selected model's schema and
/// reports typed values back as the user edits them. Hidden entirely while
/// no schema is loaded.
#[function_component(ParameterForm)]
pub fn parameter_form(props: &Props) -> Html {
    let Some(schema) = &props.schema else {
        return html! {};
    };

    html! {
        <div class="grid grid-cols-2 gap-4 mt-4">
            { for schema.iter().map(|(name, spec)| {
                html! {
                    <div class="form-control" key={name.clone()}>
                        <label class="label" for={format!("param-{name}")}>
                            <span class="label-text">
                                <i class="fas fa-sliders-h"></i>
                                {format!(" {name}")}
                            </span>
                        </label>
                        { parameter_control(name, spec, props.values.get(name), &props.on_change) }
                        { if !spec.description().is_empty() {
                            html! { <span class="label-text-alt text-gray-500">{spec.description()}</span> }
                        } else {
                            html! {}
                        }}
                    </div>
                }
            })}
        </div>
    }
}

fn parameter_control(
    name: &str,
    spec: &ParameterSpec,
    value: Option<&ParameterValue>,
    on_change: &Callback<(String, ParameterValue)>,
) -> Html {
    match spec {
        ParameterSpec::Numeric { min, max, step, .. } => {
            let current = value.map(ParameterValue::numeric_value).unwrap_or_default();
            let onchange = {
                let name = name.to_string();
                let on_change = on_change.clone();
                Callback::from(move |e: Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    on_change.emit((name.clone(), ParameterValue::from_numeric_input(&input.value())));
                })
            };
            html! {
                <input
                    type="number"
                    id={format!("param-{name}")}
                    class="input input-bordered input-sm w-full"
                    value={current}
                    min={min.map(|v| v.to_string())}
                    max={max.map(|v| v.to_string())}
                    step={step.map(|v| v.to_string())}
                    {onchange}
                />
            }
        }
        ParameterSpec::Enumerated { options, .. } => {
            let current = value.map(ParameterValue::select_value).unwrap_or_else(|| NONE_SENTINEL.to_string());
            let onchange = {
                let name = name.to_string();
                let on_change = on_change.clone();
                Callback::from(move |e: Event| {
                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                    on_change.emit((name.clone(), ParameterValue::from_select(&select.value())));
                })
            };
            html! {
                <select
                    id={format!("param-{name}")}
                    class="select select-bordered select-sm w-full"
                    {onchange}
                >
                    { for options.iter().map(|option| {
                        // A null option is the logical "no value" choice.
                        let option_value = option.clone().unwrap_or_else(|| NONE_SENTINEL.to_string());
                        let selected = option_value == current;
                        html! {
                            <option value={option_value.clone()} {selected}>{option_value}</option>
                        }
                    })}
                </select>
            }
        }
    }
}
