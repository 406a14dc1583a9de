use serde::{Deserialize, Serialize};

use crate::domain::{Priority, ResourceCount};

/// `GET /api/disaster-types`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub disaster_types: Vec<String>,
    pub locations: Vec<String>,
}

/// `GET /api/model-info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub training_date: String,
    pub model_performance: ModelPerformance,
    pub dataset_size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<ModelFeatures>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub accuracy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_r2_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_r2_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelFeatures {
    #[serde(default)]
    pub disaster_prediction: Vec<String>,
    #[serde(default)]
    pub damage_assessment: Vec<String>,
    #[serde(default)]
    pub response_optimization: Vec<String>,
}

/// `GET /api/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_accuracy: Option<String>,
}

/// `POST /api/predict` body.
///
/// Numeric fields are `None` when the operator's text could not be parsed;
/// they go out as JSON `null` and the service decides what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub disaster_type: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub severity_level: Option<i64>,
    pub affected_population: Option<i64>,
    pub economic_loss: Option<f64>,
}

/// `POST /api/predict` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predictions: Predictions,
    pub emergency_response: EmergencyResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<ScenarioInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    pub is_major_disaster: bool,
    /// Percentage in 0..=100.
    pub major_probability: f64,
    pub predicted_damage_index: f64,
    pub predicted_response_time_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyResponse {
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_level: Option<u8>,
    pub alert_level: String,
    pub resources: Resources,
    pub evacuation: Evacuation,
    pub action_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub personnel: ResourceCount,
    pub medical_teams: ResourceCount,
    pub rescue_units: ResourceCount,
    pub temporary_shelters: i64,
    pub equipment: String,
}

/// Counts are null on the wire when no evacuation is recommended. They go
/// negative when the submitted population was negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evacuation {
    pub recommended: bool,
    #[serde(default)]
    pub people_to_evacuate: Option<i64>,
    #[serde(default)]
    pub evacuation_centers: Option<i64>,
    #[serde(default)]
    pub vehicles_needed: Option<i64>,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
