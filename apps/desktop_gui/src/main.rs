use std::sync::Arc;

mod backend_bridge;
mod config;
mod controller;
mod ui;
mod view;

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod fixtures;

use anyhow::{anyhow, Context};
use client_core::PredictionClient;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::{
    backend_bridge::commands::BackendCommand, controller::events::UiEvent, ui::PredictorApp,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = config::load_settings();
    let client = PredictionClient::new(settings.api_base_url.as_str())
        .context("cannot start without a usable prediction service url")?;
    tracing::info!(api_base_url = client.base_url(), "using prediction service");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(Arc::new(client), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Disaster Response Predictor")
            .with_inner_size([900.0, 860.0])
            .with_min_inner_size([640.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Disaster Response Predictor",
        options,
        Box::new(|_cc| Ok(Box::new(PredictorApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("desktop ui exited with an error: {err}"))
}
