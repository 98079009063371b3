use yew::prelude::*;

use pipeline::decode::Metrics;
use pipeline::metrics::{MetricLevel, assess_direction_accuracy, assess_mape};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metrics: Option<Metrics>,
}

struct MetricCard {
    icon: &'static str,
    title: &'static str,
    value: String,
    subtitle: &'static str,
    assessment: Option<(MetricLevel, &'static str)>,
}

/// Accuracy metric cards for the latest forecast. Shows a placeholder when
/// the backend could not score the run (validation data too short).
#[function_component(MetricsPanel)]
pub fn metrics_panel(props: &Props) -> Html {
    let metrics = match &props.metrics {
        Some(metrics) if !metrics.is_empty() => metrics,
        _ => {
            return html! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center text-gray-500">
                        <i class="fas fa-info-circle text-2xl"></i>
                        <p class="text-sm">{"Metrics unavailable (not enough validation data)"}</p>
                    </div>
                </div>
            };
        }
    };

    let mut cards = Vec::new();
    if let Some(mape) = metrics.mape {
        cards.push(MetricCard {
            icon: "fas fa-percentage",
            title: "MAPE",
            value: format!("{mape:.2}%"),
            subtitle: "mean absolute percentage error",
            assessment: Some(assess_mape(mape)),
        });
    }
    if let Some(rmse) = metrics.rmse {
        cards.push(MetricCard {
            icon: "fas fa-square-root-alt",
            title: "RMSE",
            value: format!("{rmse:.2}"),
            subtitle: "root mean squared error",
            assessment: None,
        });
    }
    if let Some(mae) = metrics.mae {
        cards.push(MetricCard {
            icon: "fas fa-ruler",
            title: "MAE",
            value: format!("{mae:.2}"),
            subtitle: "mean absolute error",
            assessment: None,
        });
    }
    if let Some(direction) = metrics.direction_accuracy {
        cards.push(MetricCard {
            icon: "fas fa-arrow-trend-up",
            title: "Direction",
            value: format!("{:.1}%", direction * 100.0),
            subtitle: "trend direction accuracy",
            assessment: Some(assess_direction_accuracy(direction)),
        });
    }

    html! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            { for cards.into_iter().map(|card| {
                let border = card
                    .assessment
                    .map(|(level, _)| level.css_class())
                    .unwrap_or("border-base-300");
                html! {
                    <div class={classes!("card", "bg-base-100", "shadow", "border-l-4", border)}>
                        <div class="card-body p-4">
                            <div class="flex items-center gap-2">
                                <i class={card.icon}></i>
                                <h4 class="font-semibold">{card.title}</h4>
                            </div>
                            <div class="text-2xl font-bold">{card.value}</div>
                            <div class="text-xs text-gray-500">{card.subtitle}</div>
                            { if let Some((_, description)) = card.assessment {
                                html! { <div class="text-xs mt-1">{description}</div> }
                            } else {
                                html! {}
                            }}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
