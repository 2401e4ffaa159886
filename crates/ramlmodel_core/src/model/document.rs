use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value as Json;

use crate::model::compression::decode_bytes;
use crate::model::{Compression, DynElement, Element, ElementKind, KindDecl, Result};

/// Parsed document tree handed over by the parsing engine in its JSON form.
#[derive(Debug, Clone)]
pub struct Document {
	/// Compression mode detected for source bytes.
	pub compression: Compression,
	root: Json,
}

impl Document {
	/// Read, decompress, and parse a document from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		debug!(path = path.display().to_string(), bytes = raw.len(); "read document");
		Self::from_bytes(raw)
	}

	/// Decompress and parse in-memory document bytes.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let root = serde_json::from_slice(&bytes)?;
		debug!(compression = compression.as_str(), bytes = bytes.len(); "parsed document");
		Ok(Self { compression, root })
	}

	/// Wrap an already-parsed tree.
	pub fn from_json(root: Json) -> Self {
		Self {
			compression: Compression::None,
			root,
		}
	}

	/// Root node.
	pub fn root(&self) -> &Json {
		&self.root
	}

	/// Typed view of the root node.
	pub fn project<K: ElementKind>(&self) -> Element<'_, K, Json> {
		Element::new(&self.root)
	}

	/// Table-driven view of the root node.
	pub fn project_dyn(&self, kind: &'static KindDecl) -> DynElement<'_, Json> {
		DynElement::new(kind, Some(&self.root))
	}
}
