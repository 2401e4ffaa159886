use serde_json::Value as Json;

use crate::model::{GenericNode, RawValue};

impl GenericNode for Json {
	fn has_field(&self, name: &str) -> bool {
		self.as_object().is_some_and(|map| map.contains_key(name))
	}

	fn raw_value(&self, name: &str) -> Option<RawValue<'_, Self>> {
		self.as_object()?.get(name).map(raw_from_json)
	}
}

fn raw_from_json(value: &Json) -> RawValue<'_, Json> {
	match value {
		Json::Null => RawValue::Null,
		Json::Bool(item) => RawValue::Bool(*item),
		Json::Number(number) => match number.as_i64() {
			Some(int) => RawValue::Int(int),
			None => RawValue::Float(number.as_f64().unwrap_or(f64::NAN)),
		},
		Json::String(item) => RawValue::Str(item.as_str()),
		Json::Array(items) => RawValue::Seq(items.iter().map(raw_from_json).collect()),
		Json::Object(_) => RawValue::Node(value),
	}
}

#[cfg(test)]
mod tests;
