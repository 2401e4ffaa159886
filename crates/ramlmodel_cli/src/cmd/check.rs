use std::path::PathBuf;

use log::info;
use ramlmodel::model::{AuditOptions, audit};

use crate::cmd::util::{emit_json, open_document};
use crate::config::AppConfig;
use crate::error::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub kind: Option<String>,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

/// Read every declared field in the document and report the ones that fail.
///
/// Exits with an error when any field fails to read.
pub fn run(args: Args, config: &AppConfig) -> Result<()> {
	let Args {
		file: path,
		kind,
		json,
		max_depth,
	} = args;

	let opened = open_document(&path, kind.as_deref(), config)?;
	let mut options = AuditOptions::default();
	if let Some(depth) = max_depth {
		options.max_depth = depth;
	}
	let report = audit(opened.root(), &options);
	info!(visited = report.visited_elements, issues = report.issues.len(); "audit finished");

	if json || config.output.json {
		let payload = CheckJson {
			path: path.display().to_string(),
			kind: opened.kind.name,
			visited_elements: report.visited_elements,
			fields_read: report.fields_read,
			truncated: report.truncated,
			issues: report
				.issues
				.iter()
				.map(|issue| IssueJson {
					path: issue.path.clone(),
					error: issue.error.to_string(),
				})
				.collect(),
		};
		emit_json(&payload)?;
	} else {
		println!("path: {}", path.display());
		println!("kind: {}", opened.kind.name);
		println!("visited elements: {}", report.visited_elements);
		println!("fields read: {}", report.fields_read);
		if report.truncated {
			println!("truncated: max depth {} reached", options.max_depth);
		}
		println!("issues: {}", report.issues.len());
		for issue in &report.issues {
			println!("  {}: {}", issue.path, issue.error);
		}
	}

	if report.is_clean() {
		Ok(())
	} else {
		Err(CliError::AuditFailed {
			issues: report.issues.len(),
		})
	}
}

#[derive(serde::Serialize)]
struct CheckJson {
	path: String,
	kind: &'static str,
	visited_elements: usize,
	fields_read: usize,
	truncated: bool,
	issues: Vec<IssueJson>,
}

#[derive(serde::Serialize)]
struct IssueJson {
	path: String,
	error: String,
}
