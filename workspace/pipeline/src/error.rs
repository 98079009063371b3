use thiserror::Error;

/// Error types for the forecast pipeline.
///
/// The `Display` text of the validation variants is shown to the user
/// verbatim, so it is phrased as an instruction rather than a diagnostic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// No model was selected before submitting a forecast.
    #[error("Please select a forecast model")]
    ModelNotSelected,

    /// The horizon field did not hold a whole number of periods in range.
    #[error("Forecast horizon must be a whole number between 1 and 365 days")]
    InvalidHorizon,

    /// The `/forecast` body could not be decoded into a response object.
    #[error("Failed to decode forecast response: {0}")]
    Decode(String),

    /// Chart configuration could not be constructed from the response.
    #[error("Chart error: {0}")]
    Chart(String),
}

/// Type alias for Result with PipelineError.
pub type Result<T> = std::result::Result<T, PipelineError>;
