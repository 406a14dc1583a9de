use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{UiErrorContext, UiEvent},
        orchestration::{reload_reference_data, request_startup_data, submit_scenario},
        reducer::{ControllerState, ViewState},
    },
    view::{
        results::{banner_color, WARNING_COLOR},
        severity::{SEVERITY_MAX, SEVERITY_MIN},
        ResultsView,
    },
};

const FORM_LABEL_WIDTH: f32 = 160.0;

pub struct PredictorApp {
    state: ControllerState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl PredictorApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut state = ControllerState::default();
        request_startup_data(&cmd_tx, &mut state);
        Self {
            state,
            cmd_tx,
            ui_rx,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(event);
        }
    }

    fn submit(&mut self) {
        if let Err(err) = submit_scenario(&self.cmd_tx, &mut self.state) {
            tracing::debug!("ignoring submit: {err}");
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Disaster Response Predictor");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Reload reference data").clicked() {
                        reload_reference_data(&self.cmd_tx, &mut self.state);
                    }
                    if !self.state.status_line.is_empty() {
                        ui.label(egui::RichText::new(&self.state.status_line).weak());
                    }
                });
            });
            ui.label(egui::RichText::new(&self.state.model_info_line).small());
            if let Some(info) = &self.state.model_info {
                egui::CollapsingHeader::new("Model details")
                    .id_salt("model_details")
                    .show(ui, |ui| {
                        if let Some(score) = info.model_performance.damage_r2_score {
                            ui.label(format!("Damage R²: {score:.4}"));
                        }
                        if let Some(score) = info.model_performance.response_r2_score {
                            ui.label(format!("Response R²: {score:.4}"));
                        }
                        if let Some(features) = &info.features {
                            for (title, names) in [
                                ("Disaster prediction", &features.disaster_prediction),
                                ("Damage assessment", &features.damage_assessment),
                                ("Response optimization", &features.response_optimization),
                            ] {
                                if !names.is_empty() {
                                    ui.label(format!("{title}: {}", names.join(", ")));
                                }
                            }
                        }
                    });
            }
            if !self.state.notice.is_empty() {
                ui.colored_label(egui::Color32::from_rgb(0xf5, 0x9e, 0x0b), &self.state.notice);
            }
            ui.add_space(4.0);
        });
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let loading = self.state.is_loading();
        let severity = self.state.severity_label();
        let ControllerState {
            form, reference, ..
        } = &mut self.state;

        ui.heading("Scenario");
        egui::Grid::new("scenario_form")
            .num_columns(2)
            .min_col_width(FORM_LABEL_WIDTH)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Disaster type");
                egui::ComboBox::from_id_salt("disaster_type")
                    .selected_text(form.disaster_type.as_str())
                    .show_ui(ui, |ui| {
                        for option in &reference.disaster_types {
                            ui.selectable_value(&mut form.disaster_type, option.clone(), option);
                        }
                    });
                ui.end_row();

                ui.label("Location");
                egui::ComboBox::from_id_salt("location")
                    .selected_text(form.location.as_str())
                    .show_ui(ui, |ui| {
                        for option in &reference.locations {
                            ui.selectable_value(&mut form.location, option.clone(), option);
                        }
                    });
                ui.end_row();

                ui.label("Latitude");
                ui.text_edit_singleline(&mut form.latitude);
                ui.end_row();

                ui.label("Longitude");
                ui.text_edit_singleline(&mut form.longitude);
                ui.end_row();

                ui.label("Severity level");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Slider::new(&mut form.severity_level, SEVERITY_MIN..=SEVERITY_MAX)
                            .show_value(false),
                    );
                    ui.label(
                        egui::RichText::new(&severity.text)
                            .strong()
                            .color(severity.color()),
                    );
                });
                ui.end_row();

                ui.label("Affected population");
                ui.text_edit_singleline(&mut form.affected_population);
                ui.end_row();

                ui.label("Economic loss (USD)");
                ui.text_edit_singleline(&mut form.economic_loss);
                ui.end_row();
            });

        ui.add_space(8.0);
        let submit_clicked = ui
            .add_enabled(!loading, egui::Button::new("Predict"))
            .clicked();
        if submit_clicked {
            self.submit();
        }
    }

    fn show_results(results: &mut ResultsView, ui: &mut egui::Ui) {
        let heading = ui.heading("Prediction Results");
        if results.take_scroll_request() {
            heading.scroll_to_me(Some(egui::Align::TOP));
        }

        egui::Grid::new("prediction_results")
            .num_columns(2)
            .min_col_width(FORM_LABEL_WIDTH)
            .show(ui, |ui| {
                ui.label("Major disaster");
                ui.colored_label(results.major_color, &results.major_label);
                ui.end_row();
                ui.label("Major probability");
                ui.label(&results.major_probability);
                ui.end_row();
                ui.label("Damage index");
                ui.label(&results.damage_index);
                ui.end_row();
                ui.label("Response time");
                ui.label(&results.response_time);
                ui.end_row();
            });

        ui.add_space(8.0);
        if let Some(style) = results.banner_style {
            egui::Frame::NONE
                .fill(banner_color(style))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(&results.banner_label)
                            .strong()
                            .size(18.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(egui::RichText::new(&results.alert_level).color(egui::Color32::WHITE));
                    if let Some(level) = &results.priority_level {
                        ui.label(egui::RichText::new(level).small().color(egui::Color32::WHITE));
                    }
                });
        }

        ui.add_space(8.0);
        ui.label(egui::RichText::new("Resources").strong());
        egui::Grid::new("resources")
            .num_columns(2)
            .min_col_width(FORM_LABEL_WIDTH)
            .show(ui, |ui| {
                for (label, value) in [
                    ("Personnel", &results.personnel),
                    ("Medical teams", &results.medical_teams),
                    ("Rescue units", &results.rescue_units),
                    ("Temporary shelters", &results.shelters),
                    ("Equipment", &results.equipment),
                ] {
                    ui.label(label);
                    ui.label(value);
                    ui.end_row();
                }
            });

        if let Some(evacuation) = &results.evacuation {
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Evacuation recommended").strong());
            egui::Grid::new("evacuation")
                .num_columns(2)
                .min_col_width(FORM_LABEL_WIDTH)
                .show(ui, |ui| {
                    ui.label("People to evacuate");
                    ui.label(&evacuation.people_to_evacuate);
                    ui.end_row();
                    ui.label("Evacuation centers");
                    ui.label(&evacuation.evacuation_centers);
                    ui.end_row();
                    ui.label("Vehicles needed");
                    ui.label(&evacuation.vehicles_needed);
                    ui.end_row();
                });
        }

        ui.add_space(8.0);
        ui.label(egui::RichText::new("Action items").strong());
        for (idx, item) in results.action_items.iter().enumerate() {
            ui.label(format!("{}. {item}", idx + 1));
        }
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = &self.state.alert else {
            return;
        };
        let mut dismissed = false;
        let title = match alert.context() {
            UiErrorContext::BackendStartup => "Startup error",
            UiErrorContext::ReferenceData => "Reference data unavailable",
            UiErrorContext::Prediction => "Prediction failed",
        };
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(alert.message());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.state.dismiss_alert();
        }
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // The alert dialog is modal: keep the form inert underneath it.
                    ui.add_enabled_ui(self.state.alert.is_none(), |ui| {
                        self.show_form(ui);
                    });
                    ui.separator();
                    match &self.state.view {
                        ViewState::Loading => {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label("Generating prediction...");
                            });
                        }
                        ViewState::Shown(result) => {
                            if let Some(input) = &result.input {
                                ui.label(
                                    egui::RichText::new(format!(
                                        "Scenario as received: {} at {}",
                                        input.disaster_type, input.location
                                    ))
                                    .weak(),
                                );
                            }
                            Self::show_results(&mut self.state.results, ui);
                        }
                        ViewState::Error(err) => {
                            ui.colored_label(WARNING_COLOR, err.message());
                        }
                        ViewState::Idle => {}
                    }
                });
        });

        self.show_alert(ctx);
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
