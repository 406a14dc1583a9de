//! Backend-to-UI events and operator-facing error modeling.

use shared::protocol::{ModelInfo, PredictionResult, ReferenceData, ServiceStatus};

pub const REFERENCE_LOAD_FAILED_MESSAGE: &str =
    "Failed to load disaster types. Please refresh the page.";
pub const PREDICTION_FAILED_MESSAGE: &str =
    "Failed to generate prediction. Please check your inputs and try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ReferenceDataLoaded(ReferenceData),
    ReferenceDataFailed(UiError),
    ModelInfoLoaded(ModelInfo),
    ServiceStatusLoaded(ServiceStatus),
    PredictionSucceeded(Box<PredictionResult>),
    PredictionFailed(UiError),
    BackendUnavailable(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    ReferenceData,
    Prediction,
}

/// An error the operator has to acknowledge. The message is fixed per
/// context; the technical cause only goes to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn reference_load_failed() -> Self {
        Self::from_message(UiErrorContext::ReferenceData, REFERENCE_LOAD_FAILED_MESSAGE)
    }

    pub fn prediction_failed() -> Self {
        Self::from_message(UiErrorContext::Prediction, PREDICTION_FAILED_MESSAGE)
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
