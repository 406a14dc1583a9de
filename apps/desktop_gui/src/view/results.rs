use egui::Color32;
use shared::{domain::PriorityStyle, protocol::PredictionResult};

use crate::view::format::{group_thousands, to_fixed};

pub const WARNING_COLOR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const POSITIVE_COLOR: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);

/// Banner fill for each priority style.
pub fn banner_color(style: PriorityStyle) -> Color32 {
    match style {
        PriorityStyle::Critical => Color32::from_rgb(0xb9, 0x1c, 0x1c),
        PriorityStyle::High => Color32::from_rgb(0xc2, 0x41, 0x0c),
        PriorityStyle::Medium => Color32::from_rgb(0xa1, 0x62, 0x07),
        PriorityStyle::Low => Color32::from_rgb(0x04, 0x78, 0x57),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvacuationView {
    pub people_to_evacuate: String,
    pub evacuation_centers: String,
    pub vehicles_needed: String,
}

/// Display regions of the results panel. Only [`ResultsView::render`]
/// writes to them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsView {
    pub major_label: String,
    pub major_color: Color32,
    pub major_probability: String,
    pub damage_index: String,
    pub response_time: String,
    pub banner_style: Option<PriorityStyle>,
    pub banner_label: String,
    pub alert_level: String,
    pub priority_level: Option<String>,
    pub personnel: String,
    pub medical_teams: String,
    pub rescue_units: String,
    pub shelters: String,
    pub equipment: String,
    /// `None` hides the evacuation block entirely.
    pub evacuation: Option<EvacuationView>,
    pub action_items: Vec<String>,
    scroll_requested: bool,
}

impl ResultsView {
    pub fn render(&mut self, result: &PredictionResult) {
        let predictions = &result.predictions;
        let response = &result.emergency_response;

        if predictions.is_major_disaster {
            self.major_label = "YES ⚠️".to_string();
            self.major_color = WARNING_COLOR;
        } else {
            self.major_label = "NO ✓".to_string();
            self.major_color = POSITIVE_COLOR;
        }
        self.major_probability = format!("{}%", predictions.major_probability);
        self.damage_index = to_fixed(predictions.predicted_damage_index, 3);
        self.response_time = format!("{} hours", predictions.predicted_response_time_hours);

        self.banner_style = Some(response.priority.style());
        self.banner_label = response.priority.banner_label();
        self.alert_level = response.alert_level.clone();
        self.priority_level = response
            .priority_level
            .map(|level| format!("Priority level {level}"));

        let resources = &response.resources;
        self.personnel = resources.personnel.to_string();
        self.medical_teams = resources.medical_teams.to_string();
        self.rescue_units = resources.rescue_units.to_string();
        self.shelters = format!("{} units", group_thousands(resources.temporary_shelters));
        self.equipment = resources.equipment.clone();

        let evacuation = &response.evacuation;
        self.evacuation = evacuation.recommended.then(|| EvacuationView {
            people_to_evacuate: grouped_or_na(evacuation.people_to_evacuate),
            evacuation_centers: verbatim_or_na(evacuation.evacuation_centers),
            vehicles_needed: verbatim_or_na(evacuation.vehicles_needed),
        });

        self.action_items.clear();
        self.action_items.extend(response.action_items.iter().cloned());

        self.scroll_requested = true;
    }

    /// Returns true once after each render so the panel scrolls itself into view.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}

fn grouped_or_na(value: Option<i64>) -> String {
    value.map(group_thousands).unwrap_or_else(|| "N/A".to_string())
}

fn verbatim_or_na(value: Option<i64>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
#[path = "../tests/results_tests.rs"]
mod tests;
