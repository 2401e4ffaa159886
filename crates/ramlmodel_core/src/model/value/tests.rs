use serde_json::json;

use crate::model::{GenericNode, MapValue, RawValue, Value};

#[test]
fn first_field_wins_on_repeated_names() {
	let node = MapValue::new().with("name", "first").with("name", "second");

	assert!(matches!(node.raw_value("name"), Some(RawValue::Str("first"))));
}

#[test]
fn insertion_order_is_preserved() {
	let node = MapValue::new().with("b", 1_i64).with("a", 2_i64);

	let names: Vec<&str> = node.fields.iter().map(|field| field.name.as_ref()).collect();
	assert_eq!(names, ["b", "a"]);
}

#[test]
fn json_conversion_keeps_shapes() {
	let converted = Value::from_json(&json!({"n": 1, "f": 1.5, "s": "x", "list": [true, null], "child": {"k": "v"}}));

	let Value::Map(map) = converted else {
		panic!("object converts to map");
	};
	assert_eq!(map.get("n"), Some(&Value::Int(1)));
	assert_eq!(map.get("f"), Some(&Value::Float(1.5)));
	assert_eq!(map.get("s"), Some(&Value::from("x")));
	assert_eq!(map.get("list"), Some(&Value::Array(vec![Value::Bool(true), Value::Null])));
	assert_eq!(map.get("child"), Some(&Value::Map(MapValue::new().with("k", "v"))));
}

#[test]
fn raw_sequence_of_nested_maps_borrows_children() {
	let node = MapValue::new().with("items", vec![MapValue::new().with("k", "v")]);

	let items = node.raw_sequence("items");
	assert_eq!(items.len(), 1);
	assert_eq!(items[0].kind(), "element");
}
