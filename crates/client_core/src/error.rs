use reqwest::StatusCode;
use thiserror::Error;

/// Why a single HTTP exchange with the prediction service failed.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("service returned status {status}{}", detail_suffix(.detail))]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to load reference data: {0}")]
    ReferenceLoadFailed(#[source] RequestError),
    #[error("failed to load model info: {0}")]
    ModelInfoFailed(#[source] RequestError),
    #[error("service status unavailable: {0}")]
    StatusUnavailable(#[source] RequestError),
    #[error("prediction request failed: {0}")]
    PredictionRequestFailed(#[source] RequestError),
    #[error("invalid api base url `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ClientError {
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            ClientError::ReferenceLoadFailed(err)
            | ClientError::ModelInfoFailed(err)
            | ClientError::StatusUnavailable(err)
            | ClientError::PredictionRequestFailed(err) => Some(err),
            ClientError::InvalidBaseUrl { .. } => None,
        }
    }
}
