//! Chart configuration construction.
//!
//! Builds the Plotly trace and layout objects for a normalized forecast.
//! The output is plain JSON; the frontend hands it to `Plotly.newPlot`,
//! which replaces the previous configuration wholesale so no stale series
//! linger between renders.

use serde_json::{Value, json};
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::normalize::{NormalizedForecast, Series};

/// Tooltip marker for a point without a value.
pub const MISSING_VALUE_MARKER: &str = "n/a";

pub const HISTORICAL_SERIES: &str = "Historical";
pub const VALIDATION_SERIES: &str = "Validation";
pub const VALIDATION_FORECAST_SERIES: &str = "Validation forecast";
pub const FORECAST_SERIES: &str = "Forecast";

/// Full-replacement chart configuration: one trace per populated series
/// plus the layout. Applying it never merges with the previous state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub traces: Vec<Value>,
    pub layout: Value,
}

struct TraceStyle {
    name: &'static str,
    color: &'static str,
    dash: Option<&'static str>,
    fill: bool,
    width: f64,
}

fn hover_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => MISSING_VALUE_MARKER.to_string(),
    }
}

fn line_trace(series: &Series, style: &TraceStyle) -> Value {
    let x: Vec<String> = series
        .iter()
        .map(|p| p.timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
        .collect();
    let y: Vec<Option<f64>> = series.iter().map(|p| p.value).collect();
    let text: Vec<String> = series.iter().map(|p| hover_value(p.value)).collect();

    let mut trace = json!({
        "x": x,
        "y": y,
        "text": text,
        "type": "scatter",
        "mode": "lines",
        "name": style.name,
        "hovertemplate": "%{text}<extra>%{fullData.name}</extra>",
        "line": {"color": style.color, "width": style.width},
    });
    if let Some(dash) = style.dash {
        trace["line"]["dash"] = json!(dash);
    }
    if style.fill {
        trace["fill"] = json!("tozeroy");
        trace["fillcolor"] = json!("rgba(84, 112, 198, 0.15)");
    }
    trace
}

fn chart_title(data: &NormalizedForecast) -> String {
    let heading = match &data.model {
        Some(model) if !model.model_type.is_empty() => {
            format!("{} forecast", model.model_type.to_uppercase())
        }
        _ => "Time series forecast".to_string(),
    };
    format!(
        "{heading}<br><sub>historical: {}, validation: {}, forecast: {} points</sub>",
        data.historical.len(),
        data.validation.len(),
        data.forecast.len(),
    )
}

/// Builds the chart configuration for a normalized forecast.
///
/// Only non-empty series get a trace, so the legend lists exactly the
/// populated series. Errs when there is nothing at all to plot.
pub fn build_chart_config(data: &NormalizedForecast) -> Result<ChartConfig> {
    let styles = [
        (&data.historical, TraceStyle {
            name: HISTORICAL_SERIES,
            color: "#5470C6",
            dash: None,
            fill: true,
            width: 2.0,
        }),
        (&data.validation, TraceStyle {
            name: VALIDATION_SERIES,
            color: "#91CC75",
            dash: None,
            fill: false,
            width: 2.0,
        }),
        (&data.validation_forecast, TraceStyle {
            name: VALIDATION_FORECAST_SERIES,
            color: "#91CC75",
            dash: Some("dash"),
            fill: false,
            width: 2.0,
        }),
        (&data.forecast, TraceStyle {
            name: FORECAST_SERIES,
            color: "#FAC858",
            dash: Some("dash"),
            fill: false,
            width: 3.0,
        }),
    ];

    let traces: Vec<Value> = styles
        .iter()
        .filter(|(series, _)| !series.is_empty())
        .map(|(series, style)| line_trace(series, style))
        .collect();
    if traces.is_empty() {
        return Err(PipelineError::Chart("no data points to plot".to_string()));
    }

    let mut layout = json!({
        "title": {"text": chart_title(data)},
        "hovermode": "x unified",
        "showlegend": true,
        "legend": {"orientation": "h", "yanchor": "bottom", "y": 1.0, "x": 0.0},
        "xaxis": {
            "type": "date",
            "hoverformat": "%Y-%m-%d<br>%H:%M:%S",
            "showgrid": false,
        },
        "yaxis": {"gridcolor": "#f0f0f0", "zeroline": false},
        "margin": {"t": 70, "r": 20, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
    });

    // Pad the y range 10% beyond the data; autorange when no value is known.
    let values: Vec<f64> = styles
        .iter()
        .flat_map(|(series, _)| series.iter().filter_map(|p| p.value))
        .collect();
    if let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) {
        let padding = (max - min) * 0.1;
        layout["yaxis"]["range"] = json!([min - padding, max + padding]);
    }

    debug!(traces = traces.len(), "built chart configuration");
    Ok(ChartConfig { traces, layout })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ModelSummary;
    use crate::normalize::{SeriesPoint, parse_point_date};

    fn series(n: usize) -> Series {
        (0..n)
            .map(|i| SeriesPoint {
                timestamp: parse_point_date(&format!("2024-01-{:02}", i + 1)).unwrap(),
                value: Some(10.0 + i as f64),
            })
            .collect()
    }

    fn trace_names(config: &ChartConfig) -> Vec<String> {
        config
            .traces
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn historical_only_input_yields_a_single_trace() {
        let data = NormalizedForecast { historical: series(1), ..NormalizedForecast::default() };

        let config = build_chart_config(&data).unwrap();

        assert_eq!(trace_names(&config), vec![HISTORICAL_SERIES]);
        assert_eq!(config.traces[0]["x"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn populated_series_get_matching_point_counts() {
        let data = NormalizedForecast {
            historical: series(5),
            forecast: series(3),
            ..NormalizedForecast::default()
        };

        let config = build_chart_config(&data).unwrap();

        assert_eq!(config.traces.len(), 2);
        assert_eq!(config.traces[0]["y"].as_array().unwrap().len(), 5);
        assert_eq!(config.traces[1]["y"].as_array().unwrap().len(), 3);
        assert_eq!(trace_names(&config), vec![HISTORICAL_SERIES, FORECAST_SERIES]);
    }

    #[test]
    fn missing_values_render_the_fixed_marker() {
        let mut historical = series(2);
        historical[1].value = None;
        let data = NormalizedForecast { historical, ..NormalizedForecast::default() };

        let config = build_chart_config(&data).unwrap();
        let text = config.traces[0]["text"].as_array().unwrap();

        assert_eq!(text[0], "10.00");
        assert_eq!(text[1], MISSING_VALUE_MARKER);
        // The gap is a JSON null, so the line breaks instead of plotting 0.
        assert!(config.traces[0]["y"][1].is_null());
    }

    #[test]
    fn title_incorporates_the_model_type() {
        let data = NormalizedForecast {
            historical: series(2),
            model: Some(ModelSummary { model_type: "arima".to_string(), ..ModelSummary::default() }),
            ..NormalizedForecast::default()
        };

        let config = build_chart_config(&data).unwrap();
        let title = config.layout["title"]["text"].as_str().unwrap();

        assert!(title.starts_with("ARIMA forecast"));
        assert!(title.contains("historical: 2"));
    }

    #[test]
    fn falls_back_to_generic_title_without_model_info() {
        let config =
            build_chart_config(&NormalizedForecast { historical: series(1), ..NormalizedForecast::default() })
                .unwrap();

        assert!(config.layout["title"]["text"].as_str().unwrap().starts_with("Time series forecast"));

        // A summary decoded without a model type reads the same way.
        let data = NormalizedForecast {
            historical: series(1),
            model: Some(ModelSummary::default()),
            ..NormalizedForecast::default()
        };
        let config = build_chart_config(&data).unwrap();
        assert!(config.layout["title"]["text"].as_str().unwrap().starts_with("Time series forecast"));
    }

    #[test]
    fn y_range_pads_ten_percent_beyond_the_data() {
        let data = NormalizedForecast {
            historical: series(5), // values 10..14
            ..NormalizedForecast::default()
        };

        let config = build_chart_config(&data).unwrap();
        let range = config.layout["yaxis"]["range"].as_array().unwrap();

        assert!((range[0].as_f64().unwrap() - 9.6).abs() < 1e-9);
        assert!((range[1].as_f64().unwrap() - 14.4).abs() < 1e-9);
    }

    #[test]
    fn empty_input_is_a_chart_error() {
        assert!(matches!(
            build_chart_config(&NormalizedForecast::default()),
            Err(PipelineError::Chart(_))
        ));
    }
}
