//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{UiError, UiEvent},
        reducer::{ControllerState, SubmitRejected},
    },
};

/// Queues `cmd` for the backend worker. Returns false and explains why in
/// `status` when the queue cannot take it.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
            false
        }
    }
}

/// Startup fetches. Each is its own command so they run concurrently and
/// report independently.
pub fn request_startup_data(cmd_tx: &Sender<BackendCommand>, state: &mut ControllerState) {
    for cmd in [
        BackendCommand::LoadReferenceData,
        BackendCommand::LoadModelInfo,
        BackendCommand::CheckServiceStatus,
    ] {
        dispatch_backend_command(cmd_tx, cmd, &mut state.notice);
    }
}

pub fn reload_reference_data(cmd_tx: &Sender<BackendCommand>, state: &mut ControllerState) {
    dispatch_backend_command(cmd_tx, BackendCommand::LoadReferenceData, &mut state.notice);
}

/// Form submission: enter `Loading`, collect the form, hand it to the backend.
pub fn submit_scenario(
    cmd_tx: &Sender<BackendCommand>,
    state: &mut ControllerState,
) -> Result<(), SubmitRejected> {
    let input = state.begin_submit()?;
    if !dispatch_backend_command(cmd_tx, BackendCommand::Predict { input }, &mut state.notice) {
        state.apply(UiEvent::PredictionFailed(UiError::prediction_failed()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
