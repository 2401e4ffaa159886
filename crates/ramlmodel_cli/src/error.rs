use std::path::PathBuf;

use ramlmodel::model::ModelError;
use thiserror::Error;

/// CLI result type.
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub(crate) enum CliError {
	/// Library failure while loading or projecting a document.
	#[error(transparent)]
	Model(#[from] ModelError),
	/// Filesystem failure outside document loading.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON output could not be rendered.
	#[error("json output: {0}")]
	Output(#[from] serde_json::Error),
	/// Configuration file is not valid TOML for [`crate::config::AppConfig`].
	#[error("failed to parse configuration {path}: {message}")]
	ConfigParse {
		/// Configuration file path.
		path: PathBuf,
		/// Parser message.
		message: String,
	},
	/// Explicit configuration path does not exist.
	#[error("missing configuration file: {0}")]
	MissingConfig(PathBuf),
	/// `check` found fields that failed to read.
	#[error("{issues} field(s) failed to read")]
	AuditFailed {
		/// Number of failed reads.
		issues: usize,
	},
}
