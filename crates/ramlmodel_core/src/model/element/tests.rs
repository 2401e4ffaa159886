use crate::model::{BooleanElement, DataElement, Element, ExampleSpec, MapValue, ModelError, Parameter, Value, read_element, read_element_sequence, read_scalar, read_scalar_sequence};

fn data(node: &MapValue) -> Element<'_, DataElement, MapValue> {
	Element::new(node)
}

#[test]
fn missing_scalar_reads_as_absence_for_every_type() {
	let node = MapValue::new().with("other", "x");

	assert_eq!(read_scalar::<String, _>(Some(&node), "name").expect("string read"), None);
	assert_eq!(read_scalar::<bool, _>(Some(&node), "name").expect("bool read"), None);
	assert_eq!(read_scalar::<f64, _>(Some(&node), "name").expect("number read"), None);
	assert_eq!(read_scalar::<i64, _>(Some(&node), "name").expect("integer read"), None);
}

#[test]
fn explicit_null_reads_as_absence() {
	let node = MapValue::new().with("default", Value::Null).with("facets", Value::Null);
	let element = data(&node);

	assert_eq!(element.default_().expect("default read"), None);
	assert!(element.facets().expect("facets read").is_empty());
}

#[test]
fn missing_sequences_read_as_empty() {
	let node = MapValue::new();

	assert!(read_scalar_sequence::<String, _>(Some(&node), "type").expect("scalars read").is_empty());
	assert!(read_element_sequence::<DataElement, _>(Some(&node), "facets").expect("elements read").is_empty());
}

#[test]
fn sequence_order_matches_document_order() {
	let node = MapValue::new().with("type", vec!["c", "a", "b"]);

	let items = read_scalar_sequence::<String, _>(Some(&node), "type").expect("scalars read");
	assert_eq!(items, vec!["c".to_owned(), "a".to_owned(), "b".to_owned()]);
}

#[test]
fn single_value_reads_as_one_element_sequence() {
	let node = MapValue::new().with("type", "string");

	assert_eq!(data(&node).type_().expect("type read"), vec!["string".to_owned()]);
}

#[test]
fn nested_element_where_boolean_expected_is_mismatch() {
	let node = MapValue::new().with("required", MapValue::new().with("name", "x"));

	let err = read_scalar::<bool, _>(Some(&node), "required").expect_err("mismatch expected");
	match err {
		ModelError::TypeMismatch { field, expected, got } => {
			assert_eq!(field, "required");
			assert_eq!(expected, "boolean");
			assert_eq!(got, "element");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn mismatched_sequence_item_names_its_index() {
	let node = MapValue::new().with("type", Value::Array(vec![Value::from("string"), Value::from(MapValue::new())]));

	let err = data(&node).type_().expect_err("mismatch expected");
	assert!(matches!(err, ModelError::TypeMismatch { ref field, .. } if field == "type[1]"), "got {err}");
}

#[test]
fn scalar_where_element_expected_is_mismatch() {
	let node = MapValue::new().with("facets", vec!["not-an-element"]);

	let err = data(&node).facets().expect_err("mismatch expected");
	assert!(err.to_string().contains("facets[0]"), "got {err}");
	assert!(err.to_string().contains("DataElement element"), "got {err}");
}

#[test]
fn missing_nested_element_reads_as_none() {
	let node = MapValue::new();

	let child = read_element::<ExampleSpec, _>(Some(&node), "example").expect("element read");
	assert!(child.is_none());
}

#[test]
fn reads_are_idempotent() {
	let node = MapValue::new()
		.with("name", "Person")
		.with("type", vec!["object"])
		.with("facets", vec![MapValue::new().with("name", "x")]);
	let element = data(&node);

	assert_eq!(element.name().expect("first read"), element.name().expect("second read"));
	assert_eq!(element.type_().expect("first read"), element.type_().expect("second read"));
	assert_eq!(element.facets().expect("first read"), element.facets().expect("second read"));
}

#[test]
fn required_true_and_default_absent() {
	let node = MapValue::new().with("required", true);
	let element = data(&node);

	assert_eq!(element.required().expect("required read"), Some(true));
	assert_eq!(element.default_().expect("default read"), None);
}

#[test]
fn type_sequence_is_projected_in_order() {
	let node = MapValue::new().with("type", vec!["string", "integer"]);

	assert_eq!(data(&node).type_().expect("type read"), vec!["string".to_owned(), "integer".to_owned()]);
}

#[test]
fn facets_wrap_nested_nodes_without_copying() {
	let node = MapValue::new().with("facets", vec![MapValue::new().with("name", "x")]);
	let element = data(&node);

	let facets = element.facets().expect("facets read");
	assert_eq!(facets.len(), 1);
	assert_eq!(facets[0].name().expect("name read").as_deref(), Some("x"));

	let Some(Value::Array(stored)) = node.get("facets") else {
		panic!("fixture stores facets as array");
	};
	let Value::Map(stored_child) = &stored[0] else {
		panic!("fixture stores facet as map");
	};
	assert!(std::ptr::eq(facets[0].node().expect("facet is backed"), stored_child));
}

#[test]
fn absent_element_answers_every_read_with_absence() {
	let element: Element<'_, DataElement, MapValue> = Element::absent();

	assert!(element.is_absent());
	assert_eq!(element.name().expect("name"), None);
	assert_eq!(element.display_name().expect("display name"), None);
	assert_eq!(element.location().expect("location"), None);
	assert_eq!(element.schema().expect("schema"), None);
	assert_eq!(element.usage().expect("usage"), None);
	assert_eq!(element.default_().expect("default"), None);
	assert_eq!(element.example().expect("example"), None);
	assert_eq!(element.repeat().expect("repeat"), None);
	assert_eq!(element.required().expect("required"), None);
	assert!(element.type_().expect("type").is_empty());
	assert!(element.facets().expect("facets").is_empty());
	assert!(element.examples().expect("examples").is_empty());
	assert_eq!(element, Element::default());
}

#[test]
fn views_over_different_nodes_are_independent() {
	let left = MapValue::new().with("name", "left");
	let right = MapValue::new().with("name", "right");

	let a = data(&left);
	let b = data(&right);
	assert_ne!(a, b);
	assert_eq!(a.name().expect("left name").as_deref(), Some("left"));
	assert_eq!(b.name().expect("right name").as_deref(), Some("right"));
}

#[test]
fn cast_keeps_backing_node() {
	let node = MapValue::new().with("name", "verbose").with("type", "boolean").with("default", false);
	let boolean: Element<'_, BooleanElement, MapValue> = Element::new(&node);

	let parameter = boolean.cast::<Parameter>();
	assert!(std::ptr::eq(parameter.node().expect("backed"), &node));
	assert_eq!(parameter.type_().expect("type").as_deref(), Some("boolean"));
	assert_eq!(boolean.default_().expect("default").as_deref(), Some("false"));
}
