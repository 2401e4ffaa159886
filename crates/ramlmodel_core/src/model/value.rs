use serde_json::Value as Json;

use crate::model::{GenericNode, RawValue};

/// Owned, ordered document value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Integral number.
	Int(i64),
	/// Non-integral number.
	Float(f64),
	/// String scalar.
	String(Box<str>),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// Nested node.
	Map(MapValue),
}

/// Owned node with fields kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapValue {
	/// Ordered fields; the first entry wins when names repeat.
	pub fields: Vec<FieldValue>,
}

/// One named entry on a [`MapValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Stored value.
	pub value: Value,
}

impl MapValue {
	/// Create an empty node.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a field and return the node, for fixture-style construction.
	pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.insert(name, value);
		self
	}

	/// Append a field.
	pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
		self.fields.push(FieldValue {
			name: name.into(),
			value: value.into(),
		});
	}

	/// Look up the first field named `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}
}

impl Value {
	/// Convert a JSON value, keeping object key order as serde_json yields it.
	pub fn from_json(json: &Json) -> Self {
		match json {
			Json::Null => Self::Null,
			Json::Bool(item) => Self::Bool(*item),
			Json::Number(number) => match number.as_i64() {
				Some(int) => Self::Int(int),
				None => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
			},
			Json::String(item) => Self::String(item.as_str().into()),
			Json::Array(items) => Self::Array(items.iter().map(Self::from_json).collect()),
			Json::Object(map) => Self::Map(MapValue {
				fields: map
					.iter()
					.map(|(name, value)| FieldValue {
						name: name.as_str().into(),
						value: Self::from_json(value),
					})
					.collect(),
			}),
		}
	}

	fn as_raw(&self) -> RawValue<'_, MapValue> {
		match self {
			Self::Null => RawValue::Null,
			Self::Bool(item) => RawValue::Bool(*item),
			Self::Int(item) => RawValue::Int(*item),
			Self::Float(item) => RawValue::Float(*item),
			Self::String(item) => RawValue::Str(item.as_ref()),
			Self::Array(items) => RawValue::Seq(items.iter().map(Self::as_raw).collect()),
			Self::Map(map) => RawValue::Node(map),
		}
	}
}

impl GenericNode for MapValue {
	fn has_field(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	fn raw_value(&self, name: &str) -> Option<RawValue<'_, Self>> {
		self.get(name).map(Value::as_raw)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<MapValue> for Value {
	fn from(value: MapValue) -> Self {
		Self::Map(value)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Self::Array(items.into_iter().map(Into::into).collect())
	}
}

#[cfg(test)]
mod tests;
