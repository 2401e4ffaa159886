use crate::model::{Arity, DataElement, ElementKind, ExampleSpec, FieldType, StringElement};

#[test]
fn own_fields_come_before_group_fields() {
	let names: Vec<&str> = DataElement::decl().all_fields().map(|field| field.name).collect();

	assert_eq!(names.first().copied(), Some("facets"));
	let own_end = names.iter().position(|name| *name == "required").expect("required declared");
	let name_at = names.iter().position(|name| *name == "name").expect("name declared");
	assert!(own_end < name_at);
	assert!(names.contains(&"displayName"));
	assert!(names.contains(&"locationKind"));
}

#[test]
fn field_lookup_searches_groups() {
	let decl = StringElement::decl();

	let own = decl.field("minLength").expect("own field");
	assert_eq!(own.arity, Arity::OptionalScalar);
	assert_eq!(own.accessor, "min_length");

	let grouped = decl.field("default").expect("group field");
	assert_eq!(grouped.accessor, "default_");
	assert!(decl.field("facets").is_none());
}

#[test]
fn shapes_describe_arity() {
	let decl = DataElement::decl();

	assert_eq!(decl.field("type").expect("type").shape(), "sequence of string");
	assert_eq!(decl.field("examples").expect("examples").shape(), "sequence of ExampleSpec element");
	assert_eq!(decl.field("required").expect("required").shape(), "boolean");
}

#[test]
fn element_fields_point_at_their_kind() {
	let field = DataElement::decl().field("examples").expect("examples");

	let FieldType::Element(kind) = field.ty else {
		panic!("examples is an element field");
	};
	assert!(std::ptr::eq(kind(), ExampleSpec::decl()));
}

#[test]
fn groups_are_recorded() {
	assert!(DataElement::decl().has_group("Located"));
	assert!(!ExampleSpec::decl().has_group("Located"));
	assert!(StringElement::decl().has_group("ParameterFields"));
}
