/// Untyped value borrowed from a generic node field.
///
/// Nested nodes are handed out by reference, so wrapping a child never copies
/// the subtree it points at.
#[derive(Debug)]
pub enum RawValue<'a, N> {
	/// Explicit null.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Integral number.
	Int(i64),
	/// Non-integral (or out of `i64` range) number.
	Float(f64),
	/// String scalar.
	Str(&'a str),
	/// Nested node.
	Node(&'a N),
	/// Ordered sequence of values.
	Seq(Vec<RawValue<'a, N>>),
}

impl<N> RawValue<'_, N> {
	/// Stable lowercase shape label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "boolean",
			Self::Int(_) => "integer",
			Self::Float(_) => "number",
			Self::Str(_) => "string",
			Self::Node(_) => "element",
			Self::Seq(_) => "sequence",
		}
	}

	/// Whether the value is an explicit null.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

/// Read-only capability interface over a node produced by a document engine.
///
/// Implementations must not mutate the node while any projection borrows it;
/// every read is a pure lookup.
pub trait GenericNode: Sized {
	/// Whether the node carries an entry for `name` (including explicit nulls).
	fn has_field(&self, name: &str) -> bool;

	/// Raw value stored under `name`, or `None` when the field is absent.
	fn raw_value(&self, name: &str) -> Option<RawValue<'_, Self>>;

	/// Items stored under `name` as an ordered sequence.
	///
	/// Absent and null fields yield an empty sequence. A single non-sequence
	/// value yields a one-element sequence.
	fn raw_sequence(&self, name: &str) -> Vec<RawValue<'_, Self>> {
		match self.raw_value(name) {
			None | Some(RawValue::Null) => Vec::new(),
			Some(RawValue::Seq(items)) => items,
			Some(other) => vec![other],
		}
	}
}
