use serde_json::json;

use crate::model::{DataElement, DynElement, Element, ElementKind, FieldPath, ModelError, Projected, ScalarValue};

#[test]
fn reads_match_typed_accessors() {
	let node = json!({"name": "Person", "type": ["object"], "facets": [{"name": "age"}]});
	let typed: Element<'_, DataElement, _> = Element::new(&node);
	let dynamic = typed.dynamic();

	assert_eq!(dynamic.read("name").expect("name"), Projected::Scalar(Some(ScalarValue::String("Person".to_owned()))));
	assert_eq!(dynamic.read("type").expect("type"), Projected::Scalars(vec![ScalarValue::String("object".to_owned())]));

	let Projected::Elements(facets) = dynamic.read("facets").expect("facets") else {
		panic!("facets is an element sequence");
	};
	assert_eq!(facets.len(), 1);
	assert_eq!(facets[0].node(), typed.facets().expect("typed facets")[0].node());
}

#[test]
fn undeclared_field_is_rejected() {
	let node = json!({"resource": "/users"});
	let dynamic = DynElement::new(DataElement::decl(), Some(&node));

	let err = dynamic.read("resource").expect_err("undeclared");
	assert!(matches!(err, ModelError::UnknownField { kind: "DataElement", .. }));
}

#[test]
fn absent_element_reads_absence_for_every_field() {
	let dynamic: DynElement<'_, serde_json::Value> = DynElement::new(DataElement::decl(), None);

	for (field, read) in dynamic.fields() {
		let projected = read.expect("absent reads never fail");
		let empty = match projected {
			Projected::Scalar(value) => value.is_none(),
			Projected::Scalars(items) => items.is_empty(),
			Projected::Element(child) => child.is_none(),
			Projected::Elements(items) => items.is_empty(),
		};
		assert!(empty, "field {} should read as absence", field.name);
	}
}

#[test]
fn select_walks_fields_and_indexes() {
	let node = json!({"facets": [{"name": "x", "type": ["string", "integer"]}]});
	let dynamic = DynElement::new(DataElement::decl(), Some(&node));

	let name = dynamic.select(&FieldPath::parse("facets[0].name").expect("path")).expect("select");
	assert_eq!(name, Projected::Scalar(Some(ScalarValue::String("x".to_owned()))));

	let second = dynamic.select(&FieldPath::parse("facets[0].type[1]").expect("path")).expect("select");
	assert_eq!(second, Projected::Scalar(Some(ScalarValue::String("integer".to_owned()))));

	let past_end = dynamic.select(&FieldPath::parse("facets[3].name").expect("path")).expect("select");
	assert_eq!(past_end, Projected::Scalar(None));

	let past_end = dynamic.select(&FieldPath::parse("facets[3]").expect("path")).expect("select");
	assert_eq!(past_end, Projected::Element(None));
}

#[test]
fn select_past_end_keeps_declared_arity() {
	let node = json!({"facets": [{"name": "x"}]});
	let dynamic = DynElement::new(DataElement::decl(), Some(&node));

	let supertype = dynamic.select(&FieldPath::parse("facets[9].type[0]").expect("path")).expect("select");
	assert_eq!(supertype, Projected::Scalar(None));

	let supertypes = dynamic.select(&FieldPath::parse("facets[9].type").expect("path")).expect("select");
	assert_eq!(supertypes, Projected::Scalars(Vec::new()));

	let nested = dynamic.select(&FieldPath::parse("facets[9].facets[0].examples").expect("path")).expect("select");
	assert_eq!(nested, Projected::Elements(Vec::new()));
}

#[test]
fn select_past_end_still_rejects_undeclared_fields() {
	let node = json!({"facets": [{"name": "x"}]});
	let dynamic = DynElement::new(DataElement::decl(), Some(&node));

	let present = dynamic.select(&FieldPath::parse("facets[0].bogus").expect("path"));
	assert!(matches!(present, Err(ModelError::UnknownField { kind: "DataElement", .. })));

	let past_end = dynamic.select(&FieldPath::parse("facets[9].bogus").expect("path"));
	assert!(matches!(past_end, Err(ModelError::UnknownField { kind: "DataElement", .. })));

	let absent_child = dynamic.select(&FieldPath::parse("examples[0].bogus").expect("path"));
	assert!(matches!(absent_child, Err(ModelError::UnknownField { kind: "ExampleSpec", .. })));
}

#[test]
fn select_rejects_shape_errors() {
	let node = json!({"name": "x", "facets": []});
	let dynamic = DynElement::new(DataElement::decl(), Some(&node));

	let into_scalar = dynamic.select(&FieldPath::parse("name.first").expect("path"));
	assert!(matches!(into_scalar, Err(ModelError::SelectNonElement { .. })));

	let index_element = dynamic.select(&FieldPath::parse("name[0]").expect("path"));
	assert!(matches!(index_element, Err(ModelError::IndexNonSequence { .. })));
}
