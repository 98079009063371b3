pub mod data;
pub mod forecast;
pub mod models;

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Turns a non-OK response into a user-facing error string, preferring the
/// backend-provided detail over the bare status code.
async fn error_message(method: &str, endpoint: &str, response: Response) -> String {
    let status = response.status();
    log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);

    match response.json::<ErrorResponse>().await {
        Ok(err) => {
            log::error!("{} {} - API error: {}", method, endpoint, err.error);
            err.error
        }
        Err(_) => {
            let error_msg = format!("HTTP error: {}", status);
            log::error!("{} {} - {}", method, endpoint, error_msg);
            error_msg
        }
    }
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        return Err(error_message("GET", endpoint, response).await);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let parsed: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(parsed)
}

/// Common POST request handler returning the raw response body.
///
/// `/forecast` needs the body as text so the lenient decode step can deal
/// with double JSON encoding; typed parsing happens at the call site.
pub async fn post_text<B>(endpoint: &str, body: &B) -> Result<String, String>
where
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        return Err(error_message("POST", endpoint, response).await);
    }

    let body = response.text().await.map_err(|e| {
        let error_msg = format!("Failed to read response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(body)
}

/// Multipart form POST handler, used for the CSV upload
pub async fn post_form<T>(endpoint: &str, form: &web_sys::FormData) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let response = Request::post(&url)
        .body(form.clone())
        .map_err(|e| {
            let error_msg = format!("Failed to build request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        return Err(error_message("POST", endpoint, response).await);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let parsed: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(parsed)
}
