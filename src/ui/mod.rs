//! Interactive terminal host for the dropdown.
//!
//! [`PickerUi`] is the public entry point. The host owns the candidate list,
//! records every selection change the dropdown reports and renders it in a
//! summary panel next to the widget. The remaining submodules implement the
//! event loop, input routing and layout.

mod actions;
mod builder;
mod config;
mod outcome;
mod render;
mod runtime;
mod state;

pub use builder::PickerUi;
pub use config::UiConfig;
pub use outcome::PickOutcome;
pub use runtime::run;
pub use state::App;
