//! Controller layer: UI events, the view-state machine, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
