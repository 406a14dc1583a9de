//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::PredictionApi;
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info, warn};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{UiError, UiErrorContext, UiEvent},
};

/// Spawns the backend worker thread. Every command becomes its own task on a
/// tokio runtime; results come back to the UI thread as [`UiEvent`]s.
pub fn launch(
    api: Arc<dyn PredictionApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                send_event(
                    &ui_tx,
                    UiEvent::BackendUnavailable(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("Backend worker startup failure: {err}"),
                    )),
                );
                return;
            }
        };

        info!("backend worker started");
        while let Ok(cmd) = cmd_rx.recv() {
            let api = Arc::clone(&api);
            let ui_tx = ui_tx.clone();
            runtime.spawn(async move {
                handle_command(api.as_ref(), cmd, &ui_tx).await;
            });
        }
        info!("ui command queue closed; backend worker stopping");
    })
}

pub async fn handle_command(
    api: &dyn PredictionApi,
    cmd: BackendCommand,
    ui_tx: &Sender<UiEvent>,
) {
    match cmd {
        BackendCommand::LoadReferenceData => match api.reference_data().await {
            Ok(reference) => send_event(ui_tx, UiEvent::ReferenceDataLoaded(reference)),
            Err(err) => {
                error!("error loading disaster types: {err}");
                send_event(
                    ui_tx,
                    UiEvent::ReferenceDataFailed(UiError::reference_load_failed()),
                );
            }
        },
        BackendCommand::LoadModelInfo => match api.model_info().await {
            Ok(info) => send_event(ui_tx, UiEvent::ModelInfoLoaded(info)),
            Err(err) => warn!("error loading model info: {err}"),
        },
        BackendCommand::CheckServiceStatus => match api.service_status().await {
            Ok(status) => send_event(ui_tx, UiEvent::ServiceStatusLoaded(status)),
            Err(err) => warn!("service status probe failed: {err}"),
        },
        BackendCommand::Predict { input } => match api.predict(&input).await {
            Ok(result) => send_event(ui_tx, UiEvent::PredictionSucceeded(Box::new(result))),
            Err(err) => {
                error!("error making prediction: {err}");
                send_event(ui_tx, UiEvent::PredictionFailed(UiError::prediction_failed()));
            }
        },
    }
}

fn send_event(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if let Err(err) = ui_tx.try_send(event) {
        warn!("dropping backend event, ui queue unavailable: {err}");
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
