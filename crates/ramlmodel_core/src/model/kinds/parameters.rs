use super::common::{DOCUMENTED, Documented, LOCATED, Located, NAMED, Named};

declare_group! {
	/// Facets shared by every named parameter kind.
	pub trait ParameterFields(PARAMETER_FIELDS) {
		/// Primitive type name.
		type_: optional String = "type",
		/// Whether the parameter must be present.
		required: optional bool = "required",
		/// Default value.
		default_: optional String = "default",
		/// Example value.
		example: optional String = "example",
		/// Whether the parameter may repeat.
		repeat: optional bool = "repeat",
	}
}

declare_kind! {
	/// Named parameter of any primitive type.
	pub struct Parameter with Named(NAMED), ParameterFields(PARAMETER_FIELDS), Documented(DOCUMENTED), Located(LOCATED) {}
}

declare_kind! {
	/// Parameter of type `boolean`.
	pub struct BooleanElement with Named(NAMED), ParameterFields(PARAMETER_FIELDS), Documented(DOCUMENTED), Located(LOCATED) {}
}

declare_kind! {
	/// Parameter of type `string`.
	pub struct StringElement with Named(NAMED), ParameterFields(PARAMETER_FIELDS), Documented(DOCUMENTED), Located(LOCATED) {
		/// Regular expression the value must match.
		pattern: optional String = "pattern",
		/// Allowed values, in document order.
		enum_values: scalars String = "enum",
		/// Minimum length.
		min_length: optional i64 = "minLength",
		/// Maximum length.
		max_length: optional i64 = "maxLength",
	}
}

declare_kind! {
	/// Parameter of type `number`.
	pub struct NumberElement with Named(NAMED), ParameterFields(PARAMETER_FIELDS), Documented(DOCUMENTED), Located(LOCATED) {
		/// Inclusive lower bound.
		minimum: optional f64 = "minimum",
		/// Inclusive upper bound.
		maximum: optional f64 = "maximum",
	}
}

declare_kind! {
	/// Parameter of type `integer`.
	pub struct IntegerElement with Named(NAMED), ParameterFields(PARAMETER_FIELDS), Documented(DOCUMENTED), Located(LOCATED) {
		/// Inclusive lower bound.
		minimum: optional i64 = "minimum",
		/// Inclusive upper bound.
		maximum: optional i64 = "maximum",
	}
}
