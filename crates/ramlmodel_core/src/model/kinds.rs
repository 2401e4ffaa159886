//! Built-in RAML data-model kinds.
//!
//! A kind is a declared-field table. [`declare_kind!`] turns a field list into
//! the table plus one typed accessor per field; [`declare_group!`] does the same
//! for a capability that several kinds opt into, so shared fields are declared
//! once instead of being inherited.

use crate::model::{KindDecl, ModelError, Result};

macro_rules! field_decl {
	(scalar, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		field_decl!(@scalar Scalar, $accessor, $ty, $name, $doc)
	};
	(optional, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		field_decl!(@scalar OptionalScalar, $accessor, $ty, $name, $doc)
	};
	(scalars, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		field_decl!(@scalar ScalarSequence, $accessor, $ty, $name, $doc)
	};
	(element, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		field_decl!(@element Element, $accessor, $ty, $name, $doc)
	};
	(elements, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		field_decl!(@element ElementSequence, $accessor, $ty, $name, $doc)
	};
	(@scalar $arity:ident, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		$crate::model::FieldDecl {
			name: $name,
			accessor: stringify!($accessor),
			ty: $crate::model::FieldType::Scalar(<$ty as $crate::model::Scalar>::TYPE),
			arity: $crate::model::Arity::$arity,
			doc: $doc,
		}
	};
	(@element $arity:ident, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		$crate::model::FieldDecl {
			name: $name,
			accessor: stringify!($accessor),
			ty: $crate::model::FieldType::Element(<$ty as $crate::model::ElementKind>::decl),
			arity: $crate::model::Arity::$arity,
			doc: $doc,
		}
	};
}

macro_rules! field_accessor {
	($lt:lifetime, $node:ident; scalar, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		#[doc = $doc]
		pub fn $accessor(&self) -> $crate::model::Result<Option<$ty>> {
			self.scalar::<$ty>($name)
		}
	};
	($lt:lifetime, $node:ident; optional, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		#[doc = $doc]
		pub fn $accessor(&self) -> $crate::model::Result<Option<$ty>> {
			self.scalar::<$ty>($name)
		}
	};
	($lt:lifetime, $node:ident; scalars, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		#[doc = $doc]
		pub fn $accessor(&self) -> $crate::model::Result<Vec<$ty>> {
			self.scalars::<$ty>($name)
		}
	};
	($lt:lifetime, $node:ident; element, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		#[doc = $doc]
		pub fn $accessor(&self) -> $crate::model::Result<Option<$crate::model::Element<$lt, $ty, $node>>> {
			self.element::<$ty>($name)
		}
	};
	($lt:lifetime, $node:ident; elements, $accessor:ident, $ty:ty, $name:literal, $doc:literal) => {
		#[doc = $doc]
		pub fn $accessor(&self) -> $crate::model::Result<Vec<$crate::model::Element<$lt, $ty, $node>>> {
			self.elements::<$ty>($name)
		}
	};
}

/// Declare a capability: a marker trait, its field group, and accessors for every kind that implements it.
macro_rules! declare_group {
	(
		$(#[doc = $group_doc:literal])*
		$vis:vis trait $group:ident($decl:ident) {
			$(
				#[doc = $doc:literal]
				$accessor:ident: $arity:ident $ty:ty = $name:literal,
			)*
		}
	) => {
		$(#[doc = $group_doc])*
		$vis trait $group: $crate::model::ElementKind {}

		#[doc = concat!("Fields contributed by [`", stringify!($group), "`].")]
		$vis static $decl: $crate::model::FieldGroup = $crate::model::FieldGroup {
			name: stringify!($group),
			fields: &[$(field_decl!($arity, $accessor, $ty, $name, $doc)),*],
		};

		impl<'a, K: $group, N: $crate::model::GenericNode> $crate::model::Element<'a, K, N> {
			$(field_accessor!('a, N; $arity, $accessor, $ty, $name, $doc);)*
		}
	};
}

/// Declare an element kind: a marker type, its field table, and its typed accessors.
macro_rules! declare_kind {
	(
		$(#[doc = $kind_doc:literal])*
		$vis:vis struct $kind:ident $(with $($group:ident($group_decl:ident)),+)? {
			$(
				#[doc = $doc:literal]
				$accessor:ident: $arity:ident $ty:ty = $name:literal,
			)*
		}
	) => {
		$(#[doc = $kind_doc])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq)]
		$vis struct $kind;

		impl $crate::model::ElementKind for $kind {
			fn decl() -> &'static $crate::model::KindDecl {
				static DECL: $crate::model::KindDecl = $crate::model::KindDecl {
					name: stringify!($kind),
					doc: concat!("" $(, $kind_doc)*),
					fields: &[$(field_decl!($arity, $accessor, $ty, $name, $doc)),*],
					groups: &[$($(&$group_decl),+)?],
				};
				&DECL
			}
		}

		$($(impl $group for $kind {})+)?

		impl<'a, N: $crate::model::GenericNode> $crate::model::Element<'a, $kind, N> {
			$(field_accessor!('a, N; $arity, $accessor, $ty, $name, $doc);)*
		}
	};
}

mod common;
mod datamodel;
mod parameters;

pub use common::{DOCUMENTED, Documented, LOCATED, LOCATION_KIND, LocationKind, Located, MODEL_LOCATION, ModelLocation, NAMED, Named};
pub use datamodel::{DataElement, ExampleSpec};
pub use parameters::{BooleanElement, IntegerElement, NumberElement, PARAMETER_FIELDS, Parameter, ParameterFields, StringElement};

const REGISTRY: &[fn() -> &'static KindDecl] = &[
	<DataElement as crate::model::ElementKind>::decl,
	<ExampleSpec as crate::model::ElementKind>::decl,
	<Parameter as crate::model::ElementKind>::decl,
	<BooleanElement as crate::model::ElementKind>::decl,
	<StringElement as crate::model::ElementKind>::decl,
	<NumberElement as crate::model::ElementKind>::decl,
	<IntegerElement as crate::model::ElementKind>::decl,
];

/// Iterate every built-in kind table.
pub fn kinds() -> impl Iterator<Item = &'static KindDecl> {
	REGISTRY.iter().map(|decl| decl())
}

/// Resolve a kind by name, ignoring ASCII case, `-` and `_` (`data-element` finds `DataElement`).
pub fn kind_by_name(name: &str) -> Result<&'static KindDecl> {
	let wanted = normalize(name);
	kinds()
		.find(|kind| normalize(kind.name) == wanted)
		.ok_or_else(|| ModelError::UnknownKind { name: name.to_owned() })
}

fn normalize(name: &str) -> String {
	name.chars().filter(|ch| *ch != '-' && *ch != '_').map(|ch| ch.to_ascii_lowercase()).collect()
}

#[cfg(test)]
mod tests;
