use std::path::PathBuf;

use ramlmodel::model::FieldPath;

use crate::cmd::render::{RenderOptions, projected_json, projected_text};
use crate::cmd::util::{emit_json, open_document};
use crate::config::AppConfig;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// Field path to read, e.g. `examples[0].strict`.
	#[arg(long)]
	pub field: String,
	#[arg(long)]
	pub kind: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Read one field path and print only its value.
pub fn run(args: Args, config: &AppConfig) -> Result<()> {
	let Args { file: path, field, kind, json } = args;

	let field_path = FieldPath::parse(&field)?;
	let opened = open_document(&path, kind.as_deref(), config)?;
	let value = opened.root().select(&field_path)?;
	let options = RenderOptions::from_config(&config.output, None);

	if json || config.output.json {
		let payload = GetJson {
			kind: opened.kind.name,
			field: field_path.to_string(),
			value: projected_json(value, &options, 0)?,
		};
		return emit_json(&payload);
	}

	let mut out = String::new();
	projected_text(&field, value, &options, 0, 0, &mut out)?;
	print!("{out}");
	Ok(())
}

#[derive(serde::Serialize)]
struct GetJson {
	kind: &'static str,
	field: String,
	value: serde_json::Value,
}
