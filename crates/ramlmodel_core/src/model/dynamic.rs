use std::fmt;

use crate::model::element::{child_at, children_at, same_node, scalar_at, scalars_at};
use crate::model::{FieldDecl, FieldPath, FieldType, GenericNode, KindDecl, ModelError, PathStep, Result, ScalarValue};

/// Table-driven view over one node, for callers that pick the kind at runtime.
pub struct DynElement<'a, N> {
	decl: &'static KindDecl,
	node: Option<&'a N>,
}

/// Result of reading one declared field through a [`DynElement`].
#[derive(Debug)]
pub enum Projected<'a, N> {
	/// Single scalar, or absence.
	Scalar(Option<ScalarValue>),
	/// Ordered scalars.
	Scalars(Vec<ScalarValue>),
	/// Single nested element, or absence.
	Element(Option<DynElement<'a, N>>),
	/// Ordered nested elements.
	Elements(Vec<DynElement<'a, N>>),
}

impl<'a, N: GenericNode> DynElement<'a, N> {
	/// Bind a kind table to an optional node.
	pub fn new(decl: &'static KindDecl, node: Option<&'a N>) -> Self {
		Self { decl, node }
	}

	/// Declared-field table.
	pub fn decl(&self) -> &'static KindDecl {
		self.decl
	}

	/// Backing node, if any.
	pub fn node(&self) -> Option<&'a N> {
		self.node
	}

	/// Whether this view has no backing node.
	pub fn is_absent(&self) -> bool {
		self.node.is_none()
	}

	/// Read a declared field by stored name.
	pub fn read(&self, field: &str) -> Result<Projected<'a, N>> {
		let decl = self.decl.field(field).ok_or_else(|| ModelError::UnknownField {
			kind: self.decl.name,
			field: field.to_owned(),
		})?;
		self.read_decl(decl)
	}

	/// Read one field declaration against the backing node.
	pub fn read_decl(&self, field: &FieldDecl) -> Result<Projected<'a, N>> {
		let name = field.name;
		let projected = match (field.ty, field.arity.is_sequence()) {
			(FieldType::Scalar(ty), false) => Projected::Scalar(scalar_at(self.node, name, ty)?),
			(FieldType::Scalar(ty), true) => Projected::Scalars(scalars_at(self.node, name, ty)?),
			(FieldType::Element(kind), false) => {
				let kind = kind();
				Projected::Element(child_at(self.node, name, kind)?.map(|child| DynElement::new(kind, Some(child))))
			}
			(FieldType::Element(kind), true) => {
				let kind = kind();
				Projected::Elements(
					children_at(self.node, name, kind)?
						.into_iter()
						.map(|child| DynElement::new(kind, Some(child)))
						.collect(),
				)
			}
		};
		Ok(projected)
	}

	/// Read every declared field in table order.
	pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDecl, Result<Projected<'a, N>>)> + '_ {
		self.decl.all_fields().map(move |field| (field, self.read_decl(field)))
	}

	/// Follow a field path from this element.
	///
	/// Field steps must name declared fields; index steps must follow a
	/// sequence. Indexing past the end reads as an absent element of the
	/// sequence's kind, so later steps are still checked against its table.
	pub fn select(&self, path: &FieldPath) -> Result<Projected<'a, N>> {
		let mut current = Cursor::Element(*self);

		for step in &path.steps {
			current = match (step, current) {
				(PathStep::Field(name), Cursor::Element(element)) => element.step(name)?,
				(PathStep::Index(index), Cursor::Elements(kind, items)) => {
					Cursor::Element(items.into_iter().nth(*index).unwrap_or(DynElement::new(kind, None)))
				}
				(PathStep::Index(index), Cursor::Value(Projected::Scalars(items))) => Cursor::Value(Projected::Scalar(items.into_iter().nth(*index))),
				(PathStep::Field(_), _) => return Err(ModelError::SelectNonElement { step: step.to_string() }),
				(PathStep::Index(_), _) => return Err(ModelError::IndexNonSequence { step: step.to_string() }),
			};
		}

		Ok(match current {
			Cursor::Element(element) => Projected::Element((!element.is_absent()).then_some(element)),
			Cursor::Elements(_, items) => Projected::Elements(items),
			Cursor::Value(value) => value,
		})
	}

	fn step(&self, name: &str) -> Result<Cursor<'a, N>> {
		let field = self.decl.field(name).ok_or_else(|| ModelError::UnknownField {
			kind: self.decl.name,
			field: name.to_owned(),
		})?;
		let cursor = match (field.ty, field.arity.is_sequence()) {
			(FieldType::Element(kind), false) => Cursor::Element(DynElement::new(kind(), child_at(self.node, name, kind())?)),
			(FieldType::Element(kind), true) => {
				let kind = kind();
				let items = children_at(self.node, name, kind)?
					.into_iter()
					.map(|child| DynElement::new(kind, Some(child)))
					.collect();
				Cursor::Elements(kind, items)
			}
			(FieldType::Scalar(_), _) => Cursor::Value(self.read_decl(field)?),
		};
		Ok(cursor)
	}
}

/// Path walk position; element positions keep their kind even when absent.
enum Cursor<'a, N> {
	Element(DynElement<'a, N>),
	Elements(&'static KindDecl, Vec<DynElement<'a, N>>),
	Value(Projected<'a, N>),
}

impl<N> Clone for DynElement<'_, N> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<N> Copy for DynElement<'_, N> {}

impl<N> PartialEq for DynElement<'_, N> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.decl, other.decl) && same_node(self.node, other.node)
	}
}

impl<N> fmt::Debug for DynElement<'_, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DynElement")
			.field("kind", &self.decl.name)
			.field("backed", &self.node.is_some())
			.finish()
	}
}

impl<N> PartialEq for Projected<'_, N> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Scalar(left), Self::Scalar(right)) => left == right,
			(Self::Scalars(left), Self::Scalars(right)) => left == right,
			(Self::Element(left), Self::Element(right)) => left == right,
			(Self::Elements(left), Self::Elements(right)) => left == right,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests;
