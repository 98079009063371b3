//! Series normalization: turns raw date/value arrays into aligned point
//! lists the chart builder can trust.
//!
//! This is the correctness-critical step of the pipeline. A single
//! malformed date must not shift the rest of the series, so the policy is
//! to drop the offending point and keep pairing by original index.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::decode::{ForecastResponse, Metrics, ModelSummary, RawSeries};

/// One plotted point. A missing value keeps its slot so tooltips can show
/// the gap instead of silently skipping the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub timestamp: NaiveDateTime,
    pub value: Option<f64>,
}

/// Ordered sequence of points, ascending by timestamp as sent.
pub type Series = Vec<SeriesPoint>;

/// Timestamp formats the backend has been seen to emit, tried in order
/// after RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a point's date string, or `None` when it is not a valid point
/// in time. Date-only strings resolve to midnight.
pub fn parse_point_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn pair_series(dates: &[String], values: &[Option<f64>]) -> Series {
    dates
        .iter()
        .enumerate()
        .filter_map(|(index, date)| match parse_point_date(date) {
            Some(timestamp) => Some(SeriesPoint {
                timestamp,
                value: values.get(index).copied().flatten(),
            }),
            None => {
                warn!(date = %date, index, "dropping series point with unparseable date");
                None
            }
        })
        .collect()
}

/// Normalizes one optional raw series; absent becomes empty, never an error.
pub fn normalize_series(raw: Option<&RawSeries>) -> Series {
    match raw {
        Some(series) => pair_series(&series.dates, &series.values),
        None => Series::new(),
    }
}

/// A fully normalized `/forecast` response, ready for the chart builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedForecast {
    pub historical: Series,
    pub validation: Series,
    /// Model predictions over the validation range, when the backend
    /// attached them to the validation block.
    pub validation_forecast: Series,
    pub forecast: Series,
    pub metrics: Option<Metrics>,
    pub model: Option<ModelSummary>,
}

impl NormalizedForecast {
    pub fn is_empty(&self) -> bool {
        self.historical.is_empty()
            && self.validation.is_empty()
            && self.validation_forecast.is_empty()
            && self.forecast.is_empty()
    }
}

/// Normalizes every series of a decoded response. Missing series come out
/// empty; metrics and model info pass through untouched.
pub fn normalize_response(response: &ForecastResponse) -> NormalizedForecast {
    let validation_forecast = response
        .validation
        .as_ref()
        .and_then(|validation| {
            validation
                .forecast
                .as_ref()
                .map(|predictions| pair_series(&validation.dates, predictions))
        })
        .unwrap_or_default();

    NormalizedForecast {
        historical: normalize_series(response.historical.as_ref()),
        validation: normalize_series(response.validation.as_ref()),
        validation_forecast,
        forecast: normalize_series(response.forecast.as_ref()),
        metrics: response.metrics,
        model: response.model_info.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(dates: &[&str], values: &[f64]) -> RawSeries {
        RawSeries {
            dates: dates.iter().map(|d| d.to_string()).collect(),
            values: values.iter().copied().map(Some).collect(),
            forecast: None,
        }
    }

    fn ts(raw: &str) -> NaiveDateTime {
        parse_point_date(raw).unwrap()
    }

    #[test]
    fn parses_backend_date_formats() {
        assert!(parse_point_date("2024-01-01 12:30:00").is_some());
        assert!(parse_point_date("2024-01-01T12:30:00").is_some());
        assert!(parse_point_date("2024-01-01T12:30:00.500").is_some());
        assert!(parse_point_date("2024-01-01T12:30:00+08:00").is_some());
        assert_eq!(parse_point_date("2024-01-01"), Some(ts("2024-01-01 00:00:00")));
    }

    #[test]
    fn rejects_invalid_dates() {
        assert_eq!(parse_point_date(""), None);
        assert_eq!(parse_point_date("not a date"), None);
        assert_eq!(parse_point_date("2024-13-40"), None);
        assert_eq!(parse_point_date("1704067200"), None);
    }

    #[test]
    fn drops_exactly_the_invalid_entries_preserving_order() {
        let series = raw(
            &["2024-01-01", "garbage", "2024-01-03", "", "2024-01-05"],
            &[1.0, 2.0, 3.0, 4.0, 5.0],
        );

        let points = normalize_series(Some(&series));

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], SeriesPoint { timestamp: ts("2024-01-01"), value: Some(1.0) });
        assert_eq!(points[1], SeriesPoint { timestamp: ts("2024-01-03"), value: Some(3.0) });
        assert_eq!(points[2], SeriesPoint { timestamp: ts("2024-01-05"), value: Some(5.0) });
    }

    #[test]
    fn keeps_alignment_when_values_are_shorter_than_dates() {
        let series = RawSeries {
            dates: vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
            values: vec![Some(1.0)],
            forecast: None,
        };

        let points = normalize_series(Some(&series));

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].value, Some(1.0));
        // Second date survives with no value rather than stealing one.
        assert_eq!(points[1].value, None);
    }

    #[test]
    fn normalizing_clean_input_is_identity() {
        let series = raw(&["2024-01-01", "2024-01-02"], &[1.0, 2.0]);

        let once = normalize_series(Some(&series));
        let back = RawSeries {
            dates: once.iter().map(|p| p.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()).collect(),
            values: once.iter().map(|p| p.value).collect(),
            forecast: None,
        };
        let twice = normalize_series(Some(&back));

        assert_eq!(once, twice);
    }

    #[test]
    fn absent_series_become_empty_without_error() {
        assert!(normalize_series(None).is_empty());

        let normalized = normalize_response(&ForecastResponse::default());
        assert!(normalized.is_empty());
        assert!(normalized.metrics.is_none());
    }

    #[test]
    fn validation_forecast_pairs_with_validation_dates() {
        let response = ForecastResponse {
            validation: Some(RawSeries {
                dates: vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
                values: vec![Some(10.0), Some(11.0)],
                forecast: Some(vec![Some(9.5), Some(11.5)]),
            }),
            ..ForecastResponse::default()
        };

        let normalized = normalize_response(&response);

        assert_eq!(normalized.validation.len(), 2);
        assert_eq!(normalized.validation_forecast.len(), 2);
        assert_eq!(normalized.validation_forecast[1].value, Some(11.5));
    }
}
