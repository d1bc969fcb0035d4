//! Core crate exports for building and running the `multipick` terminal picker.
//!
//! The [`dropdown`] module holds the selection/navigation state machine and
//! can be embedded on its own. The [`ui`] module wraps it in a terminal host
//! that reports the selection and returns a [`PickOutcome`].

pub mod app_dirs;
pub mod dropdown;
pub mod logging;
pub mod tui;
pub mod ui;

pub use dropdown::{CandidateItem, Direction, Dropdown, DropdownKey};
pub use tui::theme::{Theme, default_theme};
pub use ui::{App, PickOutcome, PickerUi, UiConfig, run};
