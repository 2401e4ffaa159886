use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors produced while loading documents and reading typed fields.
#[derive(Debug, Error)]
pub enum ModelError {
	/// Stored value exists but cannot be coerced to the declared field type.
	#[error("type mismatch on field `{field}`: expected {expected}, got {got}")]
	TypeMismatch {
		/// Field name, with `[index]` suffix for sequence items.
		field: String,
		/// Declared shape of the field.
		expected: String,
		/// Shape label of the stored value.
		got: &'static str,
	},
	/// Field name is not declared on the element kind.
	#[error("field `{field}` is not declared on {kind}")]
	UnknownField {
		/// Element kind name.
		kind: &'static str,
		/// Requested field name.
		field: String,
	},
	/// Element kind name is not registered.
	#[error("unknown element kind: {name}")]
	UnknownKind {
		/// Requested kind name.
		name: String,
	},
	/// Path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Index step applied to a value that is not a sequence.
	#[error("field path step `{step}` indexes a non-sequence value")]
	IndexNonSequence {
		/// Rendered path step.
		step: String,
	},
	/// Field step applied to a value that is not an element.
	#[error("field path step `{step}` selects into a non-element value")]
	SelectNonElement {
		/// Rendered path step.
		step: String,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document bytes are not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}

impl ModelError {
	/// Whether this error reports a stored value of the wrong shape.
	pub fn is_type_mismatch(&self) -> bool {
		matches!(self, Self::TypeMismatch { .. })
	}
}
