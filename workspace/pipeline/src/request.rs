//! Forecast request assembly and validation.

use serde::Serialize;
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::schema::{ParameterValue, ParameterValues};

/// Upper bound on the forecast horizon, in periods.
pub const MAX_HORIZON: i64 = 365;

/// Body of `POST /forecast`. Model parameters are flattened next to the
/// `model` and `periods` members, which is the shape the backend expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRequest {
    pub model: String,
    pub periods: u32,
    #[serde(flatten)]
    pub parameters: ParameterValues,
}

impl ForecastRequest {
    /// Validates the raw control values and assembles the request body.
    ///
    /// Validation order: model first, then horizon, so the user fixes one
    /// thing at a time. Anything beyond that is the backend's job.
    pub fn build(
        model_id: &str,
        horizon_text: &str,
        mut parameters: ParameterValues,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self> {
        if model_id.trim().is_empty() {
            return Err(PipelineError::ModelNotSelected);
        }

        let periods = horizon_text
            .trim()
            .parse::<i64>()
            .map_err(|_| PipelineError::InvalidHorizon)?;
        if !(1..=MAX_HORIZON).contains(&periods) {
            return Err(PipelineError::InvalidHorizon);
        }

        if !start_date.trim().is_empty() {
            parameters.insert(
                "data_start_date".to_string(),
                ParameterValue::Text(start_date.trim().to_string()),
            );
        }
        if !end_date.trim().is_empty() {
            parameters.insert(
                "data_end_date".to_string(),
                ParameterValue::Text(end_date.trim().to_string()),
            );
        }

        debug!(model = model_id, periods, "built forecast request");
        Ok(Self {
            model: model_id.to_string(),
            periods: periods as u32,
            parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ParameterValues;

    fn build(model: &str, horizon: &str) -> Result<ForecastRequest> {
        ForecastRequest::build(model, horizon, ParameterValues::new(), "", "")
    }

    #[test]
    fn accepts_horizon_bounds_inclusive() {
        assert_eq!(build("arima", "1").unwrap().periods, 1);
        assert_eq!(build("arima", "365").unwrap().periods, 365);
        assert_eq!(build("arima", " 30 ").unwrap().periods, 30);
    }

    #[test]
    fn rejects_horizon_outside_bounds() {
        assert_eq!(build("arima", "0"), Err(PipelineError::InvalidHorizon));
        assert_eq!(build("arima", "366"), Err(PipelineError::InvalidHorizon));
        assert_eq!(build("arima", "-5"), Err(PipelineError::InvalidHorizon));
    }

    #[test]
    fn rejects_non_integral_horizon() {
        assert_eq!(build("arima", "1.5"), Err(PipelineError::InvalidHorizon));
        assert_eq!(build("arima", ""), Err(PipelineError::InvalidHorizon));
        assert_eq!(build("arima", "thirty"), Err(PipelineError::InvalidHorizon));
    }

    #[test]
    fn rejects_missing_model_before_horizon() {
        // Model check runs first even when the horizon is also bad.
        assert_eq!(build("", "not a number"), Err(PipelineError::ModelNotSelected));
        assert_eq!(build("  ", "30"), Err(PipelineError::ModelNotSelected));
    }

    #[test]
    fn merges_date_range_into_parameters() {
        let request = ForecastRequest::build(
            "prophet",
            "14",
            ParameterValues::new(),
            "2024-01-01",
            "2024-06-30",
        )
        .unwrap();

        assert_eq!(
            request.parameters["data_start_date"],
            ParameterValue::Text("2024-01-01".to_string())
        );
        assert_eq!(
            request.parameters["data_end_date"],
            ParameterValue::Text("2024-06-30".to_string())
        );
    }

    #[test]
    fn empty_date_fields_are_not_merged() {
        let request = build("prophet", "14").unwrap();
        assert!(!request.parameters.contains_key("data_start_date"));
        assert!(!request.parameters.contains_key("data_end_date"));
    }

    #[test]
    fn serializes_with_flattened_parameters() {
        let mut parameters = ParameterValues::new();
        parameters.insert("p".to_string(), ParameterValue::Number(2.0));
        parameters.insert("trend".to_string(), ParameterValue::Null);

        let request = ForecastRequest::build("arima", "24", parameters, "", "").unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "arima");
        assert_eq!(json["periods"], 24);
        assert_eq!(json["p"], 2.0);
        assert!(json["trend"].is_null());
    }
}
