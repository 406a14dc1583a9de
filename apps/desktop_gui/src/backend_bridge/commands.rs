//! Backend commands queued from UI to backend worker.

use shared::protocol::ScenarioInput;

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    LoadReferenceData,
    LoadModelInfo,
    CheckServiceStatus,
    Predict { input: ScenarioInput },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadReferenceData => "load_reference_data",
            BackendCommand::LoadModelInfo => "load_model_info",
            BackendCommand::CheckServiceStatus => "check_service_status",
            BackendCommand::Predict { .. } => "predict",
        }
    }
}
