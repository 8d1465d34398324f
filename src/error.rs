use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Error object embedded in service responses, both in non-2xx bodies and in
/// `status: failed` polling results.
#[derive(Deserialize, Debug, Clone)]
pub struct ServiceError {
    pub code: String,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ErrorResponse {
    pub error: ServiceError,
}

/// Errors surfaced by the analysis client. Service-reported failures keep
/// their error code distinguishable so callers can react to specific kinds
/// (invalid request, invalid image) before propagating.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid image: {0}")]
    InvalidImage(String),
    #[error("service error {code}: {message}")]
    Service { code: String, message: String },
    #[error("response missing 'operation-location' header")]
    MissingOperationLocation,
    #[error("analysis succeeded but returned no result")]
    EmptyResult,
    #[error("document analysis failed")]
    AnalysisFailed,
    #[error("unknown operation status '{0}'")]
    UnknownStatus(String),
    #[error("failed to read {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed analysis result")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("analysis task panicked: {0}")]
    Task(String),
}

impl AnalysisError {
    /// Lift a service error body into the matching variant, keeping the
    /// well-known codes inspectable.
    pub(crate) fn from_service(err: ServiceError) -> Self {
        match err.code.as_str() {
            "InvalidRequest" => AnalysisError::InvalidRequest(err.message),
            "InvalidImage" => AnalysisError::InvalidImage(err.message),
            _ => AnalysisError::Service {
                code: err.code,
                message: err.message,
            },
        }
    }
}
