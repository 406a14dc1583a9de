//! View-state machine and the single place backend events mutate the view.

use shared::protocol::{ModelInfo, PredictionResult, ReferenceData, ScenarioInput, ServiceStatus};
use thiserror::Error;

use crate::{
    controller::events::{UiError, UiEvent},
    view::{format::group_thousands, severity_label, FormState, ResultsView, SeverityLabel},
};

/// What the main area of the window shows. Exactly one of form-only,
/// loading indicator, or results is visible at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Shown(Box<PredictionResult>),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a prediction request is already in flight")]
    AlreadyLoading,
}

#[derive(Debug, Default)]
pub struct ControllerState {
    pub view: ViewState,
    pub form: FormState,
    pub reference: ReferenceData,
    pub model_info: Option<ModelInfo>,
    pub model_info_line: String,
    pub status_line: String,
    pub results: ResultsView,
    /// Blocking error dialog; cleared only by the operator.
    pub alert: Option<UiError>,
    /// Local dispatch problems (queue full, worker gone).
    pub notice: String,
}

impl ControllerState {
    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    pub fn results_visible(&self) -> bool {
        matches!(self.view, ViewState::Shown(_))
    }

    pub fn severity_label(&self) -> SeverityLabel {
        severity_label(self.form.severity_level)
    }

    /// Enters `Loading` and returns the payload to send. Prior results are
    /// hidden by the state change itself.
    pub fn begin_submit(&mut self) -> Result<ScenarioInput, SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::AlreadyLoading);
        }
        self.view = ViewState::Loading;
        Ok(self.form.collect())
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::ReferenceDataLoaded(reference) => {
                self.form.sync_selections(&reference);
                self.reference = reference;
            }
            UiEvent::ReferenceDataFailed(err) | UiEvent::BackendUnavailable(err) => {
                self.alert = Some(err);
            }
            UiEvent::ModelInfoLoaded(info) => {
                self.model_info_line = model_info_line(&info);
                self.model_info = Some(info);
            }
            UiEvent::ServiceStatusLoaded(status) => {
                self.status_line = status_line(&status);
            }
            UiEvent::PredictionSucceeded(result) => {
                if !self.is_loading() {
                    tracing::debug!("dropping prediction result that arrived outside loading state");
                    return;
                }
                self.results.render(&result);
                self.view = ViewState::Shown(result);
            }
            UiEvent::PredictionFailed(err) => {
                if !self.is_loading() {
                    tracing::debug!("dropping prediction failure that arrived outside loading state");
                    return;
                }
                self.view = ViewState::Error(err.clone());
                self.alert = Some(err);
            }
        }
    }
}

pub fn model_info_line(info: &ModelInfo) -> String {
    format!(
        "Trained: {} | Accuracy: {} | Dataset: {} records",
        info.training_date,
        info.model_performance.accuracy,
        group_thousands(info.dataset_size)
    )
}

fn status_line(status: &ServiceStatus) -> String {
    format!("API {} · v{}", status.status, status.version)
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
