use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    error::ServiceFailure,
    protocol::{ModelInfo, PredictionResult, ReferenceData, ScenarioInput, ServiceStatus},
};
use tracing::{debug, info};
use url::Url;

pub mod error;

pub use error::{ClientError, RequestError};

/// Where the prediction service listens unless the operator's config file
/// says otherwise.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

const DISASTER_TYPES_PATH: &str = "/api/disaster-types";
const MODEL_INFO_PATH: &str = "/api/model-info";
const STATUS_PATH: &str = "/api/status";
const PREDICT_PATH: &str = "/api/predict";

/// Operations the operator UI needs from the prediction service.
///
/// Every call is a single attempt: no retry, no timeout, no cancellation.
#[async_trait]
pub trait PredictionApi: Send + Sync {
    async fn reference_data(&self) -> Result<ReferenceData, ClientError>;
    async fn model_info(&self) -> Result<ModelInfo, ClientError>;
    async fn service_status(&self) -> Result<ServiceStatus, ClientError>;
    async fn predict(&self, input: &ScenarioInput) -> Result<PredictionResult, ClientError>;
}

#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let res = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(RequestError::Transport)?;
        decode_response(res).await
    }
}

async fn decode_response<T: DeserializeOwned>(res: Response) -> Result<T, RequestError> {
    let status = res.status();
    if !status.is_success() {
        // The service usually explains itself with a JSON envelope; keep it for the log.
        let detail = res.json::<ServiceFailure>().await.ok().map(|body| body.error);
        return Err(RequestError::Status { status, detail });
    }
    res.json::<T>().await.map_err(RequestError::Decode)
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn reference_data(&self) -> Result<ReferenceData, ClientError> {
        let data: ReferenceData = self
            .get_json(DISASTER_TYPES_PATH)
            .await
            .map_err(ClientError::ReferenceLoadFailed)?;
        debug!(
            disaster_types = data.disaster_types.len(),
            locations = data.locations.len(),
            "loaded reference data"
        );
        Ok(data)
    }

    async fn model_info(&self) -> Result<ModelInfo, ClientError> {
        self.get_json(MODEL_INFO_PATH)
            .await
            .map_err(ClientError::ModelInfoFailed)
    }

    async fn service_status(&self) -> Result<ServiceStatus, ClientError> {
        self.get_json(STATUS_PATH)
            .await
            .map_err(ClientError::StatusUnavailable)
    }

    async fn predict(&self, input: &ScenarioInput) -> Result<PredictionResult, ClientError> {
        info!(
            disaster_type = %input.disaster_type,
            location = %input.location,
            "submitting prediction request"
        );
        // `.json()` sets `Content-Type: application/json`.
        let res = self
            .http
            .post(self.endpoint(PREDICT_PATH))
            .json(input)
            .send()
            .await
            .map_err(|err| ClientError::PredictionRequestFailed(RequestError::Transport(err)))?;
        decode_response(res)
            .await
            .map_err(ClientError::PredictionRequestFailed)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
