//! Configuration file loading for the CLI.
//!
//! Search order: explicit `--config` path, `ramlmodel/config.toml` in the
//! working directory, the platform config directory, then defaults.

use std::fs;
use std::path::Path;

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Kind used when neither `--kind` nor the config names one.
pub(crate) const FALLBACK_KIND: &str = "DataElement";

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct AppConfig {
	/// Element kind used when `--kind` is omitted.
	pub default_kind: Option<String>,
	/// Output rendering settings.
	pub output: OutputConfig,
}

/// Output rendering settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct OutputConfig {
	/// Emit JSON instead of text when `--json` is not given.
	pub json: bool,
	/// Maximum nested element depth rendered.
	pub max_depth: u32,
	/// Maximum sequence items printed in text output.
	pub max_sequence_items: usize,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			json: false,
			max_depth: 6,
			max_sequence_items: 16,
		}
	}
}

impl AppConfig {
	/// Kind name from `--kind`, the config, or [`FALLBACK_KIND`].
	pub(crate) fn kind_name<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
		requested.or(self.default_kind.as_deref()).unwrap_or(FALLBACK_KIND)
	}
}

/// Find and load configuration.
pub(crate) fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig> {
	if let Some(path) = explicit_path {
		info!(path = path.display().to_string(); "loading configuration from explicit path");
		return load_config_file(path);
	}

	let local_config = Path::new("ramlmodel/config.toml");
	if local_config.exists() {
		info!(path = local_config.display().to_string(); "loading configuration from local path");
		return load_config_file(local_config);
	}

	if let Some(proj_dirs) = ProjectDirs::from("com", "ramlmodel", "ramlmodel") {
		let system_config = proj_dirs.config_dir().join("config.toml");
		if system_config.exists() {
			info!(path = system_config.display().to_string(); "loading configuration from system path");
			return load_config_file(&system_config);
		}
		debug!(path = system_config.display().to_string(); "system configuration file not found");
	} else {
		debug!("could not determine platform-specific config directory");
	}

	debug!("no configuration file found, using defaults");
	Ok(AppConfig::default())
}

fn load_config_file(path: &Path) -> Result<AppConfig> {
	if !path.exists() {
		return Err(CliError::MissingConfig(path.to_path_buf()));
	}

	let content = fs::read_to_string(path)?;
	parse_config(&content, path)
}

pub(crate) fn parse_config(content: &str, path: &Path) -> Result<AppConfig> {
	toml::from_str(content).map_err(|err| CliError::ConfigParse {
		path: path.to_path_buf(),
		message: err.to_string(),
	})
}
