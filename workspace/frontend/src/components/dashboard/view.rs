use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use pipeline::chart::{ChartConfig, build_chart_config};
use pipeline::decode::{ForecastResponse, Metrics, RawSeries};
use pipeline::normalize::normalize_response;
use pipeline::request::ForecastRequest;
use pipeline::schema::{ParameterSchema, ParameterValues, default_values};
use pipeline::submission::SubmissionPhase;

use super::chart::ForecastChart;
use super::controls::ForecastControls;
use super::data_info::DataInfoCard;
use super::metrics::MetricsPanel;
use super::preview::PreviewTable;
use super::upload::UploadCard;
use crate::api_client::data::{DateRange, PreviewPoint};
use crate::api_client::{forecast, models};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::loading::LoadingOverlay;
use crate::common::toast::ToastContext;

/// The forecasting dashboard.
///
/// Owns the long-lived pieces of state: the chart configuration, the
/// selected model and its parameter values, and the submission phase that
/// doubles as the in-flight guard. The guard lives in a `use_mut_ref` so
/// the check at the top of a submission is synchronous; a second click
/// while a request is outstanding never reaches the network.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let (models_state, _refetch_models) =
        use_fetch_with_refetch("forecast models", models::list_models);

    let selected_model = use_state(String::new);
    let schema = use_state(|| None::<ParameterSchema>);
    let params = use_state(ParameterValues::new);
    let horizon = use_state(|| "30".to_string());
    let start_date = use_state(|| {
        let last_year = chrono::Local::now().date_naive() - chrono::Duration::days(365);
        last_year.format("%Y-%m-%d").to_string()
    });
    let end_date = use_state(|| chrono::Local::now().date_naive().format("%Y-%m-%d").to_string());

    let chart = use_state(|| None::<ChartConfig>);
    let metrics_state = use_state(|| None::<Metrics>);
    let phase = use_mut_ref(SubmissionPhase::default);
    let busy = use_state(|| false);

    // Selecting a model loads its parameter schema; deselecting, or a
    // schema fetch failure, hides the parameter form again.
    let on_model_change = {
        let selected_model = selected_model.clone();
        let schema = schema.clone();
        let params = params.clone();

        Callback::from(move |model_id: String| {
            selected_model.set(model_id.clone());

            if model_id.is_empty() {
                schema.set(None);
                params.set(ParameterValues::new());
                return;
            }

            let schema = schema.clone();
            let params = params.clone();
            spawn_local(async move {
                match models::get_model_parameters(&model_id).await {
                    Ok(loaded) => {
                        params.set(default_values(&loaded));
                        schema.set(Some(loaded));
                    }
                    Err(e) => {
                        log::warn!("Parameter schema unavailable for {}: {}", model_id, e);
                        schema.set(None);
                        params.set(ParameterValues::new());
                    }
                }
            });
        })
    };

    let on_parameter_change = {
        let params = params.clone();
        Callback::from(move |(name, value)| {
            let mut updated = (*params).clone();
            updated.insert(name, value);
            params.set(updated);
        })
    };

    let on_horizon_change = {
        let horizon = horizon.clone();
        Callback::from(move |value| horizon.set(value))
    };
    let on_start_date_change = {
        let start_date = start_date.clone();
        Callback::from(move |value| start_date.set(value))
    };
    let on_end_date_change = {
        let end_date = end_date.clone();
        Callback::from(move |value| end_date.set(value))
    };

    // Seed the date fields from the loaded data's range, date part only.
    let on_date_range = {
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        Callback::from(move |range: DateRange| {
            if let Some(date) = range.start.split_whitespace().next() {
                start_date.set(date.to_string());
            }
            if let Some(date) = range.end.split_whitespace().next() {
                end_date.set(date.to_string());
            }
        })
    };

    let run_forecast = {
        let phase = phase.clone();
        let busy = busy.clone();
        let chart = chart.clone();
        let metrics_state = metrics_state.clone();
        let toast_ctx = toast_ctx.clone();
        let selected_model = selected_model.clone();
        let horizon = horizon.clone();
        let params = params.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();

        Callback::from(move |_: ()| {
            let current = *phase.borrow();
            let Some(validating) = current.begin() else {
                toast_ctx.show_warning("A forecast is already running, please wait...".to_string());
                return;
            };

            let request = match ForecastRequest::build(
                &selected_model,
                &horizon,
                (*params).clone(),
                &start_date,
                &end_date,
            ) {
                Ok(request) => request,
                Err(e) => {
                    // Validation failures never set the guard.
                    *phase.borrow_mut() = validating.finish();
                    toast_ctx.show_warning(e.to_string());
                    return;
                }
            };

            *phase.borrow_mut() = validating.submit();
            busy.set(true);

            let phase = phase.clone();
            let busy = busy.clone();
            let chart = chart.clone();
            let metrics_state = metrics_state.clone();
            let toast_ctx = toast_ctx.clone();

            spawn_local(async move {
                let outcome = forecast::run_forecast(&request).await;

                let result = match outcome {
                    Ok(response) => {
                        let rendering = phase.borrow().render();
                        *phase.borrow_mut() = rendering;

                        let normalized = normalize_response(&response);
                        metrics_state.set(normalized.metrics);
                        build_chart_config(&normalized)
                            .map(|config| chart.set(Some(config)))
                            .map_err(|e| e.to_string())
                    }
                    Err(message) => Err(message),
                };

                // Guaranteed release: this runs on every exit path, so no
                // failure can leave the dashboard stuck mid-submission.
                let finished = phase.borrow().finish();
                *phase.borrow_mut() = finished;
                busy.set(false);

                match result {
                    Ok(()) => toast_ctx.show_success("Forecast complete".to_string()),
                    Err(message) => toast_ctx.show_error(format!("Forecast failed: {}", message)),
                }
            });
        })
    };

    // Re-plot freshly uploaded data as a historical-only chart.
    let on_preview = {
        let chart = chart.clone();
        let metrics_state = metrics_state.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |points: Vec<PreviewPoint>| {
            let historical = RawSeries {
                dates: points.iter().map(|p| p.time.clone()).collect(),
                values: points.iter().map(|p| p.value).collect(),
                forecast: None,
            };
            let response = ForecastResponse {
                historical: Some(historical),
                ..ForecastResponse::default()
            };

            match build_chart_config(&normalize_response(&response)) {
                Ok(config) => {
                    metrics_state.set(None);
                    chart.set(Some(config));
                }
                Err(e) => toast_ctx.show_error(format!("Failed to plot uploaded data: {}", e)),
            }
        })
    };

    let models = models_state.data().cloned().unwrap_or_default();

    html! {
        <>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-1 space-y-6">
                    <ForecastControls
                        {models}
                        selected_model={(*selected_model).clone()}
                        schema={(*schema).clone()}
                        parameter_values={(*params).clone()}
                        horizon={(*horizon).clone()}
                        start_date={(*start_date).clone()}
                        end_date={(*end_date).clone()}
                        submitting={*busy}
                        {on_model_change}
                        {on_parameter_change}
                        {on_horizon_change}
                        {on_start_date_change}
                        {on_end_date_change}
                        on_submit={run_forecast}
                    />
                    <UploadCard {on_preview} />
                    <DataInfoCard {on_date_range} />
                </div>
                <div class="lg:col-span-2 space-y-6">
                    <ForecastChart config={(*chart).clone()} />
                    <MetricsPanel metrics={*metrics_state} />
                    <PreviewTable />
                </div>
            </div>
            <LoadingOverlay text="Running forecast analysis..." visible={*busy} />
        </>
    }
}
