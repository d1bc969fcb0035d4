//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point and returns a [`ResolvedConfig`] that is
//! used by the application.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
pub(crate) use util::sanitize_labels;
