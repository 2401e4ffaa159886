use std::fmt;

use crate::model::RawValue;

/// String-backed enumeration declared on a field.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumDecl {
	/// Enumeration name used in diagnostics.
	pub name: &'static str,
	/// Canonical lowercase labels.
	pub labels: &'static [&'static str],
}

impl EnumDecl {
	/// Resolve `input` to its canonical label, ignoring ASCII case.
	pub fn label(&self, input: &str) -> Option<&'static str> {
		self.labels.iter().copied().find(|label| label.eq_ignore_ascii_case(input))
	}
}

/// Declared scalar target type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
	/// Text.
	String,
	/// `true`/`false`.
	Boolean,
	/// Any number, read as `f64`.
	Number,
	/// Integral number, read as `i64`.
	Integer,
	/// One label out of a fixed set.
	Enum(&'static EnumDecl),
}

/// Scalar produced by coercing a raw value to a [`ScalarType`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
	/// Text.
	String(String),
	/// Boolean.
	Boolean(bool),
	/// Number.
	Number(f64),
	/// Integer.
	Integer(i64),
	/// Canonical enum label.
	Enum(&'static str),
}

impl ScalarType {
	/// Stable type name used in diagnostics and listings.
	pub fn name(self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Boolean => "boolean",
			Self::Number => "number",
			Self::Integer => "integer",
			Self::Enum(decl) => decl.name,
		}
	}

	/// Coerce a non-null raw value, returning `None` when the shapes disagree.
	///
	/// Strings accept any scalar and render it as text; the other types only
	/// accept their own shape. Integral floats count as integers.
	pub fn coerce<N>(self, raw: &RawValue<'_, N>) -> Option<ScalarValue> {
		match (self, raw) {
			(Self::String, RawValue::Str(item)) => Some(ScalarValue::String((*item).to_owned())),
			(Self::String, RawValue::Bool(item)) => Some(ScalarValue::String(item.to_string())),
			(Self::String, RawValue::Int(item)) => Some(ScalarValue::String(item.to_string())),
			(Self::String, RawValue::Float(item)) => Some(ScalarValue::String(item.to_string())),
			(Self::Boolean, RawValue::Bool(item)) => Some(ScalarValue::Boolean(*item)),
			(Self::Number, RawValue::Int(item)) => Some(ScalarValue::Number(*item as f64)),
			(Self::Number, RawValue::Float(item)) => Some(ScalarValue::Number(*item)),
			(Self::Integer, RawValue::Int(item)) => Some(ScalarValue::Integer(*item)),
			(Self::Integer, RawValue::Float(item)) if is_integral(*item) => Some(ScalarValue::Integer(*item as i64)),
			(Self::Enum(decl), RawValue::Str(item)) => decl.label(item).map(ScalarValue::Enum),
			_ => None,
		}
	}
}

impl fmt::Display for ScalarType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl ScalarValue {
	/// Shape label matching [`RawValue::kind`].
	pub fn kind(&self) -> &'static str {
		match self {
			Self::String(_) | Self::Enum(_) => "string",
			Self::Boolean(_) => "boolean",
			Self::Number(_) => "number",
			Self::Integer(_) => "integer",
		}
	}

	/// Text view of string and enum values.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(item) => Some(item.as_str()),
			Self::Enum(item) => Some(*item),
			_ => None,
		}
	}

	/// Boolean view.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Boolean(item) => Some(*item),
			_ => None,
		}
	}

	/// Numeric view of number and integer values.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(item) => Some(*item),
			Self::Integer(item) => Some(*item as f64),
			_ => None,
		}
	}
}

fn is_integral(value: f64) -> bool {
	value.is_finite() && value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64
}

/// Rust type a scalar field is read into.
pub trait Scalar: Sized {
	/// Declared scalar type backing this Rust type.
	const TYPE: ScalarType;

	/// Extract `Self` from a value coerced with [`Scalar::TYPE`].
	fn from_scalar(value: ScalarValue) -> Option<Self>;
}

impl Scalar for String {
	const TYPE: ScalarType = ScalarType::String;

	fn from_scalar(value: ScalarValue) -> Option<Self> {
		match value {
			ScalarValue::String(item) => Some(item),
			_ => None,
		}
	}
}

impl Scalar for bool {
	const TYPE: ScalarType = ScalarType::Boolean;

	fn from_scalar(value: ScalarValue) -> Option<Self> {
		value.as_bool()
	}
}

impl Scalar for f64 {
	const TYPE: ScalarType = ScalarType::Number;

	fn from_scalar(value: ScalarValue) -> Option<Self> {
		match value {
			ScalarValue::Number(item) => Some(item),
			_ => None,
		}
	}
}

impl Scalar for i64 {
	const TYPE: ScalarType = ScalarType::Integer;

	fn from_scalar(value: ScalarValue) -> Option<Self> {
		match value {
			ScalarValue::Integer(item) => Some(item),
			_ => None,
		}
	}
}
