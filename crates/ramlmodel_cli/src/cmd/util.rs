use std::path::Path;

use ramlmodel::model::{Document, DynElement, KindDecl, kind_by_name};
use serde::Serialize;
use serde_json::Value as Json;

use crate::config::AppConfig;
use crate::error::Result;

/// Pretty-print a JSON payload on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}

/// Resolve `--kind` against the config default and the registry.
pub(crate) fn resolve_kind(requested: Option<&str>, config: &AppConfig) -> Result<&'static KindDecl> {
	Ok(kind_by_name(config.kind_name(requested))?)
}

/// Open a document and remember the kind it is projected through.
pub(crate) struct Opened {
	pub document: Document,
	pub kind: &'static KindDecl,
}

impl Opened {
	pub(crate) fn root(&self) -> DynElement<'_, Json> {
		self.document.project_dyn(self.kind)
	}
}

pub(crate) fn open_document(path: &Path, requested: Option<&str>, config: &AppConfig) -> Result<Opened> {
	let kind = resolve_kind(requested, config)?;
	let document = Document::open(path)?;
	Ok(Opened { document, kind })
}
