//! Typed decoding of the `/forecast` response body.
//!
//! The backend serializes this endpoint by hand, so the body is sometimes a
//! JSON object and sometimes that same object JSON-encoded once more as a
//! string. [`RawBody`] makes the two shapes explicit and normalizes them in
//! one place, before anything downstream sees the data.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::{PipelineError, Result};

/// Shape of the `/forecast` body before normalization. Every member is
/// optional; consumers must tolerate absent or empty series.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub historical: Option<RawSeries>,
    #[serde(default)]
    pub forecast: Option<RawSeries>,
    #[serde(default)]
    pub validation: Option<RawSeries>,
    #[serde(default)]
    pub metrics: Option<Metrics>,
    #[serde(default)]
    pub model_info: Option<ModelSummary>,
}

/// Paired date/value arrays as sent by the backend. Lengths are not
/// guaranteed to match; the normalizer restores alignment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawSeries {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub values: Vec<Option<f64>>,
    /// Validation blocks additionally carry the model's predictions over
    /// the held-out range, indexed by the same dates.
    #[serde(default)]
    pub forecast: Option<Vec<Option<f64>>>,
}

/// Accuracy metrics computed server-side against the validation series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Metrics {
    #[serde(default)]
    pub mape: Option<f64>,
    #[serde(default)]
    pub rmse: Option<f64>,
    #[serde(default)]
    pub mae: Option<f64>,
    #[serde(default)]
    pub mse: Option<f64>,
    #[serde(default)]
    pub direction_accuracy: Option<f64>,
}

impl Metrics {
    /// True when nothing displayable was computed (validation too short).
    pub fn is_empty(&self) -> bool {
        self.mape.is_none()
            && self.rmse.is_none()
            && self.mae.is_none()
            && self.direction_accuracy.is_none()
    }
}

/// Descriptive block about the model run, used for the chart title.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ModelSummary {
    /// Absent or empty falls back to the generic chart title.
    #[serde(rename = "type", default)]
    pub model_type: String,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub train_size: Option<u64>,
    #[serde(default)]
    pub val_size: Option<u64>,
    #[serde(default)]
    pub forecast_periods: Option<u64>,
    #[serde(default)]
    pub data_frequency: Option<String>,
}

/// A `/forecast` body: either a plain JSON object or the object
/// double-encoded as a JSON string.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    Object(Value),
    JsonEncodedString(String),
}

impl RawBody {
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| PipelineError::Decode(e.to_string()))?;
        match value {
            Value::String(inner) => {
                trace!("forecast body was double-encoded, parsing again");
                Ok(Self::JsonEncodedString(inner))
            }
            value => Ok(Self::Object(value)),
        }
    }

    fn into_value(self) -> Result<Value> {
        match self {
            Self::Object(value) => Ok(value),
            Self::JsonEncodedString(inner) => {
                serde_json::from_str(&inner).map_err(|e| PipelineError::Decode(e.to_string()))
            }
        }
    }
}

/// Decodes a `/forecast` body, tolerating double JSON encoding.
pub fn decode_forecast_response(body: &str) -> Result<ForecastResponse> {
    let value = RawBody::parse(body)?.into_value()?;
    serde_json::from_value(value).map_err(|e| PipelineError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = r#"{
        "historical": {"dates": ["2024-01-01 00:00:00"], "values": [10.5]},
        "forecast": {"dates": [], "values": []},
        "metrics": {"mape": 4.2, "rmse": 1.1, "mae": 0.9, "mse": 1.2},
        "model_info": {"type": "arima", "train_size": 800, "val_size": 200}
    }"#;

    #[test]
    fn decodes_plain_object_body() {
        let response = decode_forecast_response(PLAIN).unwrap();

        let historical = response.historical.unwrap();
        assert_eq!(historical.dates.len(), 1);
        assert_eq!(historical.values, vec![Some(10.5)]);
        assert_eq!(response.metrics.unwrap().mape, Some(4.2));
        assert_eq!(response.model_info.unwrap().model_type, "arima");
        assert!(response.validation.is_none());
    }

    #[test]
    fn decodes_double_encoded_body() {
        let wrapped = serde_json::to_string(PLAIN).unwrap();
        assert!(matches!(
            RawBody::parse(&wrapped).unwrap(),
            RawBody::JsonEncodedString(_)
        ));

        let response = decode_forecast_response(&wrapped).unwrap();
        assert!(response.historical.is_some());
        assert_eq!(response.metrics.unwrap().rmse, Some(1.1));
    }

    #[test]
    fn tolerates_absent_members_and_null_values() {
        let response = decode_forecast_response("{}").unwrap();
        assert_eq!(response, ForecastResponse::default());

        let response = decode_forecast_response(
            r#"{"validation": {"dates": ["2024-01-01"], "values": [null], "forecast": [3.0]}}"#,
        )
        .unwrap();
        let validation = response.validation.unwrap();
        assert_eq!(validation.values, vec![None]);
        assert_eq!(validation.forecast, Some(vec![Some(3.0)]));
    }

    #[test]
    fn model_info_without_type_does_not_poison_the_response() {
        let response = decode_forecast_response(
            r#"{
                "historical": {"dates": ["2024-01-01"], "values": [1.0]},
                "model_info": {"train_size": 800, "val_size": 200}
            }"#,
        )
        .unwrap();

        // The series survive; the summary just has no model type.
        assert!(response.historical.is_some());
        let summary = response.model_info.unwrap();
        assert_eq!(summary.model_type, "");
        assert_eq!(summary.train_size, Some(800));
    }

    #[test]
    fn rejects_bodies_that_are_not_json() {
        assert!(matches!(
            decode_forecast_response("<html>502</html>"),
            Err(PipelineError::Decode(_))
        ));
        // A string body that does not itself contain JSON fails on the
        // second parse, not the first.
        assert!(matches!(
            decode_forecast_response(r#""plain text, not json""#),
            Err(PipelineError::Decode(_))
        ));
    }

    #[test]
    fn empty_metrics_report_empty() {
        assert!(Metrics::default().is_empty());
        let metrics = Metrics { mape: Some(3.0), ..Metrics::default() };
        assert!(!metrics.is_empty());
        // mse alone does not make the panel worth showing.
        let metrics = Metrics { mse: Some(3.0), ..Metrics::default() };
        assert!(metrics.is_empty());
    }
}
