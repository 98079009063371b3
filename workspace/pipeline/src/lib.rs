//! Forecast request/response rendering pipeline.
//!
//! Everything between the dashboard controls and the chart that does not
//! need a browser lives here: parameter schemas, request validation,
//! lenient response decoding, series normalization, chart configuration
//! and metric assessment. The frontend crate drives these functions; this
//! crate performs no network or DOM access and is tested natively.

pub mod chart;
pub mod decode;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod request;
pub mod schema;
pub mod submission;

pub use error::{PipelineError, Result};
