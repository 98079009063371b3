use serde::{Deserialize, Serialize};

use crate::api_client;

/// `{status, message?, data}` envelope the data endpoints wrap their
/// payloads in. Anything but `status == "success"` is an error.
#[derive(Debug, Deserialize)]
struct StatusEnvelope<T> {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

impl<T> StatusEnvelope<T> {
    fn into_data(self, endpoint: &str) -> Result<T, String> {
        if self.status == "success" {
            self.data
                .ok_or_else(|| format!("{}: response carried no data", endpoint))
        } else {
            Err(self
                .message
                .unwrap_or_else(|| format!("{}: backend reported status '{}'", endpoint, self.status)))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DataStatistics {
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub std: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub median: Option<f64>,
}

/// Payload of `GET /data/info`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DataInfo {
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub total_points: Option<u64>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub statistics: Option<DataStatistics>,
}

pub async fn get_data_info() -> Result<DataInfo, String> {
    log::trace!("Fetching data info");

    let envelope = api_client::get::<StatusEnvelope<DataInfo>>("/data/info").await?;
    let result = envelope.into_data("/data/info");

    if let Err(ref e) = result {
        log::error!("Failed to fetch data info: {}", e);
    }

    result
}

/// One row of the `GET /data/preview2` monitoring-record preview
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PreviewRecord {
    #[serde(default)]
    pub data_start_time: Option<String>,
    #[serde(default)]
    pub data_end_time: Option<String>,
    #[serde(default)]
    pub ci_id: Option<String>,
    #[serde(default)]
    pub ci_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub normal_count: Option<i64>,
    #[serde(default)]
    pub abnormal_count: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct PreviewRecords {
    #[serde(default)]
    records: Vec<PreviewRecord>,
}

pub async fn get_preview_records() -> Result<Vec<PreviewRecord>, String> {
    log::trace!("Fetching data preview records");

    let envelope = api_client::get::<StatusEnvelope<PreviewRecords>>("/data/preview2").await?;
    envelope.into_data("/data/preview2").map(|p| p.records)
}

/// One point of the `GET /data/preview` uploaded-series preview
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PreviewPoint {
    pub time: String,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct PreviewSeries {
    #[serde(default)]
    data: Vec<PreviewPoint>,
}

pub async fn get_uploaded_preview() -> Result<Vec<PreviewPoint>, String> {
    log::trace!("Fetching uploaded data preview");

    let envelope = api_client::get::<StatusEnvelope<PreviewSeries>>("/data/preview").await?;
    envelope.into_data("/data/preview").map(|p| p.data)
}

/// Payload of `POST /upload`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadResult {
    #[serde(default)]
    pub rows: Option<u64>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

pub async fn upload_csv(form: &web_sys::FormData) -> Result<UploadResult, String> {
    log::debug!("Uploading CSV data file");

    let result = api_client::post_form::<UploadResult>("/upload", form).await;

    match &result {
        Ok(upload) => log::info!("Upload accepted: {:?} rows", upload.rows),
        Err(e) => log::error!("Upload failed: {}", e),
    }

    result
}
