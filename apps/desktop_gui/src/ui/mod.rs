//! UI layer: the egui shell that draws the view model and forwards operator input.

pub mod app;

pub use app::PredictorApp;
