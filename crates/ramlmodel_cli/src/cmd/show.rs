use std::path::PathBuf;

use ramlmodel::model::{FieldPath, Projected};

use crate::cmd::render::{RenderOptions, element_json, element_text, projected_json, projected_text};
use crate::cmd::util::{emit_json, open_document};
use crate::config::AppConfig;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// Element kind the document root is projected through.
	#[arg(long)]
	pub kind: Option<String>,
	/// Field path to show instead of the whole root, e.g. `facets[0].name`.
	#[arg(long = "path")]
	pub path_expr: Option<String>,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

/// Project a document through a kind and print its declared fields.
pub fn run(args: Args, config: &AppConfig) -> Result<()> {
	let Args {
		file: path,
		kind,
		path_expr,
		json,
		max_depth,
	} = args;

	let opened = open_document(&path, kind.as_deref(), config)?;
	let root = opened.root();
	let options = RenderOptions::from_config(&config.output, max_depth);
	let selected = match path_expr.as_deref() {
		Some(expr) => Some((expr, root.select(&FieldPath::parse(expr)?)?)),
		None => None,
	};

	if json || config.output.json {
		let value = match selected {
			Some((_, value)) => projected_json(value, &options, 0)?,
			None => element_json(root, &options, 0)?,
		};
		let payload = ShowJson {
			path: path.display().to_string(),
			kind: opened.kind.name,
			compression: opened.document.compression.as_str(),
			select: path_expr.clone(),
			value,
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("kind: {}", opened.kind.name);
	println!("compression: {}", opened.document.compression.as_str());

	let mut out = String::new();
	match selected {
		Some((expr, Projected::Element(Some(element)))) => {
			out.push_str(&format!("{expr}: {}\n", element.decl().name));
			element_text(element, &options, 1, 0, &mut out)?;
		}
		Some((expr, value)) => projected_text(expr, value, &options, 0, 0, &mut out)?,
		None => element_text(root, &options, 0, 0, &mut out)?,
	}
	print!("{out}");

	Ok(())
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	kind: &'static str,
	compression: &'static str,
	select: Option<String>,
	value: serde_json::Value,
}
