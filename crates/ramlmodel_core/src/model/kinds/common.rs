use crate::model::{EnumDecl, Scalar, ScalarType, ScalarValue};

/// Labels accepted for [`ModelLocation`].
pub const MODEL_LOCATION: EnumDecl = EnumDecl {
	name: "ModelLocation",
	labels: &["query", "headers", "uri", "form", "buri", "annotation", "model", "securityschema"],
};

/// Labels accepted for [`LocationKind`].
pub const LOCATION_KIND: EnumDecl = EnumDecl {
	name: "LocationKind",
	labels: &["apistructure", "declaration", "model"],
};

/// Where in an API a data element is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelLocation {
	/// Query parameter.
	Query,
	/// Header.
	Headers,
	/// URI parameter.
	Uri,
	/// Form parameter.
	Form,
	/// Base URI parameter.
	BaseUri,
	/// Annotation type.
	Annotation,
	/// Data model type.
	Model,
	/// Security scheme setting.
	SecuritySchema,
}

impl ModelLocation {
	/// Canonical label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Query => "query",
			Self::Headers => "headers",
			Self::Uri => "uri",
			Self::Form => "form",
			Self::BaseUri => "buri",
			Self::Annotation => "annotation",
			Self::Model => "model",
			Self::SecuritySchema => "securityschema",
		}
	}

	/// Parse a label, ignoring ASCII case.
	pub fn from_label(label: &str) -> Option<Self> {
		let found = match MODEL_LOCATION.label(label)? {
			"query" => Self::Query,
			"headers" => Self::Headers,
			"uri" => Self::Uri,
			"form" => Self::Form,
			"buri" => Self::BaseUri,
			"annotation" => Self::Annotation,
			"model" => Self::Model,
			_ => Self::SecuritySchema,
		};
		Some(found)
	}
}

impl Scalar for ModelLocation {
	const TYPE: ScalarType = ScalarType::Enum(&MODEL_LOCATION);

	fn from_scalar(value: ScalarValue) -> Option<Self> {
		match value {
			ScalarValue::Enum(label) => Self::from_label(label),
			_ => None,
		}
	}
}

/// Which part of an API declares a data element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
	/// Inline in the resource/method structure.
	ApiStructure,
	/// Global declaration section.
	Declaration,
	/// Nested inside another model.
	Model,
}

impl LocationKind {
	/// Canonical label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ApiStructure => "apistructure",
			Self::Declaration => "declaration",
			Self::Model => "model",
		}
	}

	/// Parse a label, ignoring ASCII case.
	pub fn from_label(label: &str) -> Option<Self> {
		let found = match LOCATION_KIND.label(label)? {
			"apistructure" => Self::ApiStructure,
			"declaration" => Self::Declaration,
			_ => Self::Model,
		};
		Some(found)
	}
}

impl Scalar for LocationKind {
	const TYPE: ScalarType = ScalarType::Enum(&LOCATION_KIND);

	fn from_scalar(value: ScalarValue) -> Option<Self> {
		match value {
			ScalarValue::Enum(label) => Self::from_label(label),
			_ => None,
		}
	}
}

declare_group! {
	/// Kinds identified by a declared name.
	pub trait Named(NAMED) {
		/// Declared name.
		name: scalar String = "name",
	}
}

declare_group! {
	/// Kinds carrying human-facing documentation.
	pub trait Documented(DOCUMENTED) {
		/// Friendly display name.
		display_name: optional String = "displayName",
		/// Markdown description.
		description: optional String = "description",
	}
}

declare_group! {
	/// Kinds that record where in the API they are declared.
	pub trait Located(LOCATED) {
		/// Where the element is used.
		location: optional ModelLocation = "location",
		/// Which part of the API declares the element.
		location_kind: optional LocationKind = "locationKind",
	}
}
