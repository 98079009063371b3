use pipeline::decode::{self, ForecastResponse};
use pipeline::request::ForecastRequest;

use crate::api_client;

/// Runs a forecast.
///
/// The body is read as text and decoded leniently because the backend
/// sometimes JSON-encodes this endpoint's payload twice. Non-2xx statuses
/// come back as the backend's `error` string when it sent one.
pub async fn run_forecast(request: &ForecastRequest) -> Result<ForecastResponse, String> {
    log::debug!(
        "Submitting forecast request: model={}, periods={}",
        request.model,
        request.periods
    );

    let body = api_client::post_text("/forecast", request).await?;

    let result = decode::decode_forecast_response(&body).map_err(|e| e.to_string());

    match &result {
        Ok(_) => log::info!("Forecast response decoded for model: {}", request.model),
        Err(e) => log::error!("Forecast response rejected: {}", e),
    }

    result
}
