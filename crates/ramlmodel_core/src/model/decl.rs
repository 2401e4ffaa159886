use crate::model::ScalarType;

/// How many values a declared field holds, and of which shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
	/// One scalar the kind always expects; still reads as absence when missing.
	Scalar,
	/// One scalar that may be omitted.
	OptionalScalar,
	/// Ordered sequence of scalars.
	ScalarSequence,
	/// One nested element.
	Element,
	/// Ordered sequence of nested elements.
	ElementSequence,
}

impl Arity {
	/// Render arity as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Scalar => "scalar",
			Self::OptionalScalar => "optional",
			Self::ScalarSequence => "scalars",
			Self::Element => "element",
			Self::ElementSequence => "elements",
		}
	}

	/// Whether reads of this arity return a sequence.
	pub fn is_sequence(self) -> bool {
		matches!(self, Self::ScalarSequence | Self::ElementSequence)
	}
}

/// Declared result type of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
	/// Scalar coerced with the shared rules.
	Scalar(ScalarType),
	/// Nested element of the given kind.
	Element(fn() -> &'static KindDecl),
}

impl FieldType {
	/// Type name used in diagnostics and listings.
	pub fn name(self) -> &'static str {
		match self {
			Self::Scalar(ty) => ty.name(),
			Self::Element(kind) => kind().name,
		}
	}
}

/// One `(name, type, arity)` declaration on an element kind.
#[derive(Debug)]
pub struct FieldDecl {
	/// Field name as stored on the node.
	pub name: &'static str,
	/// Rust accessor method name.
	pub accessor: &'static str,
	/// Declared result type.
	pub ty: FieldType,
	/// Declared arity.
	pub arity: Arity,
	/// One-line description.
	pub doc: &'static str,
}

impl FieldDecl {
	/// Human-readable shape, e.g. `sequence of string`.
	pub fn shape(&self) -> String {
		match (self.arity, self.ty) {
			(Arity::ScalarSequence, ty) => format!("sequence of {}", ty.name()),
			(Arity::ElementSequence, ty) => format!("sequence of {} element", ty.name()),
			(Arity::Element, ty) => format!("{} element", ty.name()),
			(_, ty) => ty.name().to_owned(),
		}
	}

	/// Description text without the leading space doc comments carry.
	pub fn description(&self) -> &'static str {
		self.doc.trim()
	}
}

/// Field set shared by several kinds, opted into by composition.
#[derive(Debug)]
pub struct FieldGroup {
	/// Capability name.
	pub name: &'static str,
	/// Fields contributed by this capability.
	pub fields: &'static [FieldDecl],
}

/// Declared-field table of one element kind.
#[derive(Debug)]
pub struct KindDecl {
	/// Kind name.
	pub name: &'static str,
	/// One-line description.
	pub doc: &'static str,
	/// Fields declared directly on the kind.
	pub fields: &'static [FieldDecl],
	/// Capabilities the kind opts into.
	pub groups: &'static [&'static FieldGroup],
}

impl KindDecl {
	/// Find a declared field by stored name, searching own fields before groups.
	pub fn field(&self, name: &str) -> Option<&'static FieldDecl> {
		self.all_fields().find(|field| field.name == name)
	}

	/// Iterate own fields, then each group's fields, in declaration order.
	pub fn all_fields(&self) -> impl Iterator<Item = &'static FieldDecl> + use<> {
		let fields = self.fields;
		let groups = self.groups;
		fields.iter().chain(groups.iter().flat_map(|group| group.fields.iter()))
	}

	/// Description text without the leading space doc comments carry.
	pub fn description(&self) -> &'static str {
		self.doc.trim()
	}

	/// Whether the kind opts into the capability named `group`.
	pub fn has_group(&self, group: &str) -> bool {
		self.groups.iter().any(|item| item.name == group)
	}
}

#[cfg(test)]
mod tests;
