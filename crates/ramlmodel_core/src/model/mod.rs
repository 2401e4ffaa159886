mod audit;
mod compression;
mod decl;
mod document;
mod dynamic;
mod element;
mod error;
mod json;
mod kinds;
mod node;
mod path;
mod scalar;
mod value;

/// Whole-tree mismatch collection.
pub use audit::{AuditIssue, AuditOptions, AuditReport, audit};
/// Compression detection result.
pub use compression::Compression;
/// Declared-field table types.
pub use decl::{Arity, FieldDecl, FieldGroup, FieldType, KindDecl};
/// Document loading.
pub use document::Document;
/// Table-driven projection types.
pub use dynamic::{DynElement, Projected};
/// Typed element view and the four read primitives.
pub use element::{Element, ElementKind, read_element, read_element_sequence, read_scalar, read_scalar_sequence};
/// Error and result aliases.
pub use error::{ModelError, Result};
/// Built-in kinds, capabilities, and the kind registry.
pub use kinds::{
	BooleanElement, DOCUMENTED, DataElement, Documented, ExampleSpec, IntegerElement, LOCATED, LOCATION_KIND, LocationKind, Located, MODEL_LOCATION, ModelLocation, NAMED,
	Named, NumberElement, PARAMETER_FIELDS, Parameter, ParameterFields, StringElement, kind_by_name, kinds,
};
/// Generic node capability interface.
pub use node::{GenericNode, RawValue};
/// Field path parser types.
pub use path::{FieldPath, PathStep};
/// Scalar coercion types.
pub use scalar::{EnumDecl, Scalar, ScalarType, ScalarValue};
/// Owned document tree.
pub use value::{FieldValue, MapValue, Value};
