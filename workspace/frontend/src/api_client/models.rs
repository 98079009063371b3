use serde::{Deserialize, Serialize};

use pipeline::schema::ParameterSchema;

use crate::api_client;

/// One entry of `GET /models`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ForecastModel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct ModelParametersResponse {
    parameters: ParameterSchema,
}

pub async fn list_models() -> Result<Vec<ForecastModel>, String> {
    log::trace!("Fetching available forecast models");

    let result = api_client::get::<Vec<ForecastModel>>("/models").await;

    match &result {
        Ok(models) => log::info!("Loaded {} forecast models", models.len()),
        Err(e) => log::error!("Failed to fetch model list: {}", e),
    }

    result
}

pub async fn get_model_parameters(model_id: &str) -> Result<ParameterSchema, String> {
    log::trace!("Fetching parameter schema for model: {}", model_id);

    let url = format!("/model/{}/parameters", model_id);
    let result = api_client::get::<ModelParametersResponse>(&url).await;

    match result {
        Ok(response) => {
            log::info!(
                "Loaded {} parameters for model: {}",
                response.parameters.len(),
                model_id
            );
            Ok(response.parameters)
        }
        Err(e) => {
            log::error!("Failed to fetch parameters for model {}: {}", model_id, e);
            Err(e)
        }
    }
}
