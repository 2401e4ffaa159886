use serde_json::json;

use crate::model::{DataElement, Element, GenericNode, ModelError, RawValue};

#[test]
fn object_fields_are_exposed() {
	let node = json!({"name": "x", "count": 3, "ratio": 0.5, "flag": true, "none": null});

	assert!(node.has_field("name"));
	assert!(node.has_field("none"));
	assert!(!node.has_field("missing"));
	assert!(matches!(node.raw_value("name"), Some(RawValue::Str("x"))));
	assert!(matches!(node.raw_value("count"), Some(RawValue::Int(3))));
	assert!(matches!(node.raw_value("ratio"), Some(RawValue::Float(ratio)) if ratio == 0.5));
	assert!(matches!(node.raw_value("flag"), Some(RawValue::Bool(true))));
	assert!(matches!(node.raw_value("none"), Some(RawValue::Null)));
}

#[test]
fn non_object_values_expose_no_fields() {
	let node = json!(["name"]);

	assert!(!node.has_field("name"));
	assert!(node.raw_value("name").is_none());
	assert!(node.raw_sequence("name").is_empty());
}

#[test]
fn nested_objects_are_borrowed_nodes() {
	let node = json!({"facets": [{"name": "x"}]});

	let items = node.raw_sequence("facets");
	let [RawValue::Node(child)] = items.as_slice() else {
		panic!("expected one nested node, got {items:?}");
	};
	assert!(std::ptr::eq(*child, &node["facets"][0]));
}

#[test]
fn json_document_projects_through_typed_accessors() {
	let node = json!({"facets": [{"name": "x"}], "type": ["string", "integer"], "required": true});
	let element: Element<'_, DataElement, _> = Element::new(&node);

	let facets = element.facets().expect("facets read");
	assert_eq!(facets.len(), 1);
	assert_eq!(facets[0].name().expect("name read").as_deref(), Some("x"));
	assert_eq!(element.type_().expect("type read"), vec!["string".to_owned(), "integer".to_owned()]);
	assert_eq!(element.required().expect("required read"), Some(true));
}

#[test]
fn arrays_convert_to_owned_sequences_on_each_read() {
	let node = json!({"schema": ["a", ["b"]]});

	let Some(RawValue::Seq(items)) = node.raw_value("schema") else {
		panic!("array field reads as a sequence");
	};
	assert!(matches!(items.as_slice(), [RawValue::Str("a"), RawValue::Seq(inner)] if matches!(inner.as_slice(), [RawValue::Str("b")])));

	let element: Element<'_, DataElement, _> = Element::new(&node);
	let err = element.schema().expect_err("array is not a string");
	assert!(matches!(err, ModelError::TypeMismatch { got: "sequence", .. }));
}
