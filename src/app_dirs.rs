//! Resolve the configuration and data directories for `multipick`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "multipick";

const CONFIG_DIR_ENV: &str = "MULTIPICK_CONFIG_DIR";
const DATA_DIR_ENV: &str = "MULTIPICK_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for multipick"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_counts_as_unset() {
		// SAFETY: test-local variable name not read by any other test.
		unsafe {
			env::set_var("MULTIPICK_TEST_EMPTY_DIR", "");
		}
		assert_eq!(dir_from_env("MULTIPICK_TEST_EMPTY_DIR"), None);
		assert_eq!(dir_from_env("MULTIPICK_TEST_UNSET_DIR"), None);
	}
}
