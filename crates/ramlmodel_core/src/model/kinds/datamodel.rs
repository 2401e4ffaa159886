use super::common::{DOCUMENTED, Documented, LOCATED, Located, NAMED, Named};

declare_kind! {
	/// Type declaration in the RAML 1.0 data model.
	pub struct DataElement with Named(NAMED), Documented(DOCUMENTED), Located(LOCATED) {
		/// Nested facet declarations.
		facets: elements DataElement = "facets",
		/// Schema reference or inline schema text.
		schema: optional String = "schema",
		/// Usage notes for the declaration.
		usage: optional String = "usage",
		/// Declared supertypes, in document order.
		type_: scalars String = "type",
		/// Default value.
		default_: optional String = "default",
		/// Single inline example.
		example: optional String = "example",
		/// Whether the element may repeat.
		repeat: optional bool = "repeat",
		/// Named examples.
		examples: elements ExampleSpec = "examples",
		/// Whether the element must be present.
		required: optional bool = "required",
	}
}

declare_kind! {
	/// Example attached to a data element.
	pub struct ExampleSpec with Named(NAMED), Documented(DOCUMENTED) {
		/// Example payload text.
		content: optional String = "content",
		/// Whether the example must validate against its type.
		strict: optional bool = "strict",
	}
}
