use serde::{Deserialize, Serialize};

/// Body the prediction service returns alongside a non-success status,
/// e.g. `{"success": false, "error": "could not convert string to float"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFailure {
    #[serde(default)]
    pub success: bool,
    pub error: String,
}
