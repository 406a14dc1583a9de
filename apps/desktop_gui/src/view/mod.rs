//! View model: everything the window shows, kept free of widget code so the
//! mapping from service data to display text can be tested directly.

pub mod form;
pub mod format;
pub mod results;
pub mod severity;

pub use form::FormState;
pub use results::ResultsView;
pub use severity::{severity_label, SeverityLabel};
