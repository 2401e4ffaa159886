use serde_json::json;

use crate::model::{
	BooleanElement, DataElement, Element, ElementKind, IntegerElement, LocationKind, ModelError, ModelLocation, NumberElement, StringElement, kind_by_name, kinds,
};

#[test]
fn registry_lists_every_kind_once() {
	let names: Vec<&str> = kinds().map(|kind| kind.name).collect();

	assert_eq!(
		names,
		["DataElement", "ExampleSpec", "Parameter", "BooleanElement", "StringElement", "NumberElement", "IntegerElement"]
	);
}

#[test]
fn lookup_ignores_case_and_separators() {
	assert!(std::ptr::eq(kind_by_name("data-element").expect("kebab case"), DataElement::decl()));
	assert!(std::ptr::eq(kind_by_name("BOOLEAN_ELEMENT").expect("snake case"), BooleanElement::decl()));
	assert!(matches!(kind_by_name("Resource"), Err(ModelError::UnknownKind { .. })));
}

#[test]
fn kind_docs_are_recorded() {
	let decl = DataElement::decl();
	assert!(decl.doc.contains("RAML 1.0 data model"));
	assert_eq!(decl.description(), "Type declaration in the RAML 1.0 data model.");

	let facets = decl.field("facets").expect("facets declared");
	assert_eq!(facets.description(), "Nested facet declarations.");
}

#[test]
fn string_parameter_facets() {
	let node = json!({
		"name": "sort",
		"type": "string",
		"location": "query",
		"locationKind": "apistructure",
		"enum": ["asc", "desc"],
		"minLength": 3,
		"maxLength": 4.0
	});
	let element: Element<'_, StringElement, _> = Element::new(&node);

	assert_eq!(element.name().expect("name").as_deref(), Some("sort"));
	assert_eq!(element.type_().expect("type").as_deref(), Some("string"));
	assert_eq!(element.location().expect("location"), Some(ModelLocation::Query));
	assert_eq!(element.location_kind().expect("location kind"), Some(LocationKind::ApiStructure));
	assert_eq!(element.enum_values().expect("enum"), vec!["asc".to_owned(), "desc".to_owned()]);
	assert_eq!(element.min_length().expect("min"), Some(3));
	assert_eq!(element.max_length().expect("max"), Some(4));
	assert_eq!(element.pattern().expect("pattern"), None);
}

#[test]
fn numeric_parameter_bounds() {
	let node = json!({"minimum": 1, "maximum": 9.5});

	let number: Element<'_, NumberElement, _> = Element::new(&node);
	assert_eq!(number.minimum().expect("minimum"), Some(1.0));
	assert_eq!(number.maximum().expect("maximum"), Some(9.5));

	let integer = number.cast::<IntegerElement>();
	assert_eq!(integer.minimum().expect("minimum"), Some(1));
	assert!(integer.maximum().is_err());
}

#[test]
fn data_element_examples() {
	let node = json!({"examples": [{"name": "a", "content": "{}", "strict": true, "displayName": "A"}]});
	let element: Element<'_, DataElement, _> = Element::new(&node);

	let examples = element.examples().expect("examples");
	assert_eq!(examples.len(), 1);
	assert_eq!(examples[0].name().expect("name").as_deref(), Some("a"));
	assert_eq!(examples[0].content().expect("content").as_deref(), Some("{}"));
	assert_eq!(examples[0].strict().expect("strict"), Some(true));
	assert_eq!(examples[0].display_name().expect("display name").as_deref(), Some("A"));
}
