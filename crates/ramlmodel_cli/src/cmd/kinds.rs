use ramlmodel::model::{KindDecl, kinds};

use crate::cmd::util::{emit_json, resolve_kind};
use crate::config::AppConfig;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Only list this kind.
	pub kind: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Print the registered element kinds and their declared fields.
pub fn run(args: Args, config: &AppConfig) -> Result<()> {
	let Args { kind, json } = args;

	let selected: Vec<&'static KindDecl> = match kind.as_deref() {
		Some(name) => vec![resolve_kind(Some(name), config)?],
		None => kinds().collect(),
	};

	if json || config.output.json {
		let payload = KindsJson {
			kinds: selected.iter().copied().map(kind_json).collect(),
		};
		return emit_json(&payload);
	}

	for decl in selected {
		println!("{}: {}", decl.name, decl.description());
		if !decl.groups.is_empty() {
			let groups: Vec<&str> = decl.groups.iter().map(|group| group.name).collect();
			println!("  groups: {}", groups.join(", "));
		}
		for field in decl.all_fields() {
			println!("  {} ({}): {}", field.name, field.arity.as_str(), field.shape());
		}
	}

	Ok(())
}

fn kind_json(decl: &KindDecl) -> KindJson {
	KindJson {
		name: decl.name,
		doc: decl.description(),
		groups: decl.groups.iter().map(|group| group.name).collect(),
		fields: decl
			.all_fields()
			.map(|field| FieldJson {
				name: field.name,
				accessor: field.accessor,
				r#type: field.ty.name(),
				arity: field.arity.as_str(),
				shape: field.shape(),
				doc: field.description(),
			})
			.collect(),
	}
}

#[derive(serde::Serialize)]
struct KindsJson {
	kinds: Vec<KindJson>,
}

#[derive(serde::Serialize)]
struct KindJson {
	name: &'static str,
	doc: &'static str,
	groups: Vec<&'static str>,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: &'static str,
	accessor: &'static str,
	r#type: &'static str,
	arity: &'static str,
	shape: String,
	doc: &'static str,
}
