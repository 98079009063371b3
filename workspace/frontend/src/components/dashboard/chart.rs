use yew::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use pipeline::chart::ChartConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

const CHART_DIV_ID: &str = "forecast-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Current configuration; `None` before the first forecast.
    pub config: Option<ChartConfig>,
}

/// The persistent chart instance. Every render hands a complete trace and
/// layout set to `Plotly.newPlot`, which replaces the previous plot
/// wholesale so no stale series survive a re-render.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();
    let config = props.config.clone();

    use_effect_with((chart_ref.clone(), config), move |(chart_ref, config)| {
        if let (Some(element), Some(config)) = (chart_ref.cast::<HtmlElement>(), config.as_ref()) {
            element.set_id(CHART_DIV_ID);
            apply_config(config);
        }
        || ()
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                { if props.config.is_some() {
                    html! { <div ref={chart_ref} style="width:100%; height:440px;"></div> }
                } else {
                    html! {
                        <div style="height: 440px; border: 1px dashed #ccc; display: flex; flex-direction: column; align-items: center; justify-content: center;">
                            <i class="fas fa-chart-area text-4xl mb-4 opacity-50"></i>
                            <span class="text-gray-500">{"Run a forecast to see the chart"}</span>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}

/// Serialize through JSON text so Plotly receives plain JS objects.
fn apply_config(config: &ChartConfig) {
    let traces_json = match serde_json::to_string(&config.traces) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize chart traces: {}", e);
            return;
        }
    };
    let layout_json = match serde_json::to_string(&config.layout) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize chart layout: {}", e);
            return;
        }
    };

    let (Ok(traces_js), Ok(layout_js)) = (
        js_sys::JSON::parse(&traces_json),
        js_sys::JSON::parse(&layout_json),
    ) else {
        log::error!("Failed to convert chart configuration to JS values");
        return;
    };

    let plot_options = js_sys::Object::new();
    if js_sys::Reflect::set(&plot_options, &"responsive".into(), &true.into()).is_err()
        || js_sys::Reflect::set(&plot_options, &"displaylogo".into(), &false.into()).is_err()
    {
        log::warn!("Failed to set plot options, rendering with defaults");
    }

    newPlot(CHART_DIV_ID, traces_js, layout_js, plot_options.into());
    log::debug!("Chart configuration applied ({} traces)", config.traces.len());
}
