use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::model::{DynElement, GenericNode, KindDecl, ModelError, RawValue, Result, Scalar, ScalarType, ScalarValue};

/// Element kind: a declared-field table plus the typed accessors generated from it.
pub trait ElementKind {
	/// Declared-field table of this kind.
	fn decl() -> &'static KindDecl;
}

/// Read-only typed view over one generic node.
///
/// The binding is fixed at construction. Accessors re-read the node on every
/// call and cache nothing. An element built with [`Element::absent`] has no
/// backing node and answers every read with its arity's absence value.
pub struct Element<'a, K, N> {
	node: Option<&'a N>,
	kind: PhantomData<fn() -> K>,
}

impl<'a, K: ElementKind, N: GenericNode> Element<'a, K, N> {
	/// Wrap an existing node.
	pub fn new(node: &'a N) -> Self {
		Self {
			node: Some(node),
			kind: PhantomData,
		}
	}

	/// Placeholder with no backing node.
	pub fn absent() -> Self {
		Self { node: None, kind: PhantomData }
	}

	/// Backing node, if any.
	pub fn node(&self) -> Option<&'a N> {
		self.node
	}

	/// Whether this view has no backing node.
	pub fn is_absent(&self) -> bool {
		self.node.is_none()
	}

	/// Declared-field table of this element's kind.
	pub fn decl(&self) -> &'static KindDecl {
		K::decl()
	}

	/// Whether the backing node stores an entry for `name`.
	pub fn has_field(&self, name: &str) -> bool {
		self.node.is_some_and(|node| node.has_field(name))
	}

	/// Read an optional scalar field.
	pub fn scalar<T: Scalar>(&self, field: &str) -> Result<Option<T>> {
		read_scalar(self.node, field)
	}

	/// Read a sequence-of-scalar field.
	pub fn scalars<T: Scalar>(&self, field: &str) -> Result<Vec<T>> {
		read_scalar_sequence(self.node, field)
	}

	/// Read a nested element field.
	pub fn element<C: ElementKind>(&self, field: &str) -> Result<Option<Element<'a, C, N>>> {
		read_element(self.node, field)
	}

	/// Read a sequence-of-element field.
	pub fn elements<C: ElementKind>(&self, field: &str) -> Result<Vec<Element<'a, C, N>>> {
		read_element_sequence(self.node, field)
	}

	/// View the same node as another kind.
	pub fn cast<C: ElementKind>(self) -> Element<'a, C, N> {
		Element {
			node: self.node,
			kind: PhantomData,
		}
	}

	/// Table-driven view of the same node.
	pub fn dynamic(&self) -> DynElement<'a, N> {
		DynElement::new(K::decl(), self.node)
	}
}

impl<K, N> Clone for Element<'_, K, N> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<K, N> Copy for Element<'_, K, N> {}

impl<K: ElementKind, N: GenericNode> Default for Element<'_, K, N> {
	fn default() -> Self {
		Self::absent()
	}
}

/// Two views are equal when they are backed by the same node, or both absent.
impl<K, N> PartialEq for Element<'_, K, N> {
	fn eq(&self, other: &Self) -> bool {
		same_node(self.node, other.node)
	}
}

impl<K: ElementKind, N> fmt::Debug for Element<'_, K, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("kind", &K::decl().name)
			.field("backed", &self.node.is_some())
			.finish()
	}
}

pub(crate) fn same_node<N>(left: Option<&N>, right: Option<&N>) -> bool {
	match (left, right) {
		(Some(left), Some(right)) => std::ptr::eq(left, right),
		(None, None) => true,
		_ => false,
	}
}

/// Read `field` as an optional scalar of type `T`.
///
/// A missing field, a null value, or a missing backing node reads as `None`.
pub fn read_scalar<T: Scalar, N: GenericNode>(node: Option<&N>, field: &str) -> Result<Option<T>> {
	scalar_at(node, field, T::TYPE)?.map(|value| extract(value, field)).transpose()
}

/// Read `field` as an ordered sequence of scalars of type `T`.
///
/// Missing fields read as an empty sequence; every item must coerce.
pub fn read_scalar_sequence<T: Scalar, N: GenericNode>(node: Option<&N>, field: &str) -> Result<Vec<T>> {
	scalars_at(node, field, T::TYPE)?
		.into_iter()
		.enumerate()
		.map(|(index, value)| extract(value, &format!("{field}[{index}]")))
		.collect()
}

/// Read `field` as a nested element of kind `K`.
///
/// Missing and null fields read as `None` rather than an absent placeholder.
pub fn read_element<'a, K: ElementKind, N: GenericNode>(node: Option<&'a N>, field: &str) -> Result<Option<Element<'a, K, N>>> {
	Ok(child_at(node, field, K::decl())?.map(Element::new))
}

/// Read `field` as an ordered sequence of nested elements of kind `K`.
///
/// Missing fields read as an empty sequence; every item must be a node.
pub fn read_element_sequence<'a, K: ElementKind, N: GenericNode>(node: Option<&'a N>, field: &str) -> Result<Vec<Element<'a, K, N>>> {
	Ok(children_at(node, field, K::decl())?.into_iter().map(Element::new).collect())
}

pub(crate) fn scalar_at<N: GenericNode>(node: Option<&N>, field: &str, ty: ScalarType) -> Result<Option<ScalarValue>> {
	let Some(raw) = node.and_then(|node| node.raw_value(field)) else {
		return Ok(None);
	};
	if raw.is_null() {
		return Ok(None);
	}

	coerce(&raw, field, ty).map(Some)
}

pub(crate) fn scalars_at<N: GenericNode>(node: Option<&N>, field: &str, ty: ScalarType) -> Result<Vec<ScalarValue>> {
	let Some(node) = node else {
		return Ok(Vec::new());
	};

	node.raw_sequence(field)
		.iter()
		.enumerate()
		.map(|(index, raw)| coerce(raw, &format!("{field}[{index}]"), ty))
		.collect()
}

pub(crate) fn child_at<'a, N: GenericNode>(node: Option<&'a N>, field: &str, kind: &'static KindDecl) -> Result<Option<&'a N>> {
	let Some(raw) = node.and_then(|node| node.raw_value(field)) else {
		return Ok(None);
	};

	match raw {
		RawValue::Null => Ok(None),
		RawValue::Node(child) => Ok(Some(child)),
		other => Err(mismatch(field, format!("{} element", kind.name), other.kind())),
	}
}

pub(crate) fn children_at<'a, N: GenericNode>(node: Option<&'a N>, field: &str, kind: &'static KindDecl) -> Result<Vec<&'a N>> {
	let Some(node) = node else {
		return Ok(Vec::new());
	};

	node.raw_sequence(field)
		.into_iter()
		.enumerate()
		.map(|(index, raw)| match raw {
			RawValue::Node(child) => Ok(child),
			other => Err(mismatch(&format!("{field}[{index}]"), format!("{} element", kind.name), other.kind())),
		})
		.collect()
}

fn coerce<N>(raw: &RawValue<'_, N>, field: &str, ty: ScalarType) -> Result<ScalarValue> {
	ty.coerce(raw).ok_or_else(|| mismatch(field, ty.name().to_owned(), raw.kind()))
}

fn extract<T: Scalar>(value: ScalarValue, field: &str) -> Result<T> {
	let got = value.kind();
	T::from_scalar(value).ok_or_else(|| mismatch(field, T::TYPE.name().to_owned(), got))
}

pub(crate) fn mismatch(field: &str, expected: String, got: &'static str) -> ModelError {
	debug!(field, expected = expected.as_str(), got; "field type mismatch");
	ModelError::TypeMismatch {
		field: field.to_owned(),
		expected,
		got,
	}
}

#[cfg(test)]
mod tests;
