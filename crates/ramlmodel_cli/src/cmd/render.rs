use ramlmodel::model::{DynElement, GenericNode, Projected, ScalarValue};
use serde_json::{Map, Number, Value as Json};

use crate::config::OutputConfig;
use crate::error::Result;

/// Depth and length limits for rendered projections.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
	/// Maximum nested element depth rendered below the root.
	pub max_depth: u32,
	/// Maximum sequence items printed in text output.
	pub max_sequence_items: usize,
}

impl RenderOptions {
	/// Limits from the output config, with an optional `--max-depth` override.
	pub fn from_config(config: &OutputConfig, max_depth: Option<u32>) -> Self {
		Self {
			max_depth: max_depth.unwrap_or(config.max_depth),
			max_sequence_items: config.max_sequence_items,
		}
	}
}

/// Render every declared field of `element` as a JSON object.
///
/// Absent fields are kept as `null` or `[]` so the object mirrors the kind table.
pub fn element_json<N: GenericNode>(element: DynElement<'_, N>, options: &RenderOptions, depth: u32) -> Result<Json> {
	let mut out = Map::new();
	for (field, value) in element.fields() {
		out.insert(field.name.to_owned(), projected_json(value?, options, depth)?);
	}
	Ok(Json::Object(out))
}

/// Render one projected value as JSON.
pub fn projected_json<N: GenericNode>(value: Projected<'_, N>, options: &RenderOptions, depth: u32) -> Result<Json> {
	let json = match value {
		Projected::Scalar(item) => item.map(scalar_json).unwrap_or(Json::Null),
		Projected::Scalars(items) => Json::Array(items.into_iter().map(scalar_json).collect()),
		Projected::Element(None) => Json::Null,
		Projected::Element(Some(child)) => nested_json(child, options, depth)?,
		Projected::Elements(items) => {
			let mut out = Vec::with_capacity(items.len());
			for child in items {
				out.push(nested_json(child, options, depth)?);
			}
			Json::Array(out)
		}
	};
	Ok(json)
}

fn nested_json<N: GenericNode>(child: DynElement<'_, N>, options: &RenderOptions, depth: u32) -> Result<Json> {
	if depth >= options.max_depth {
		return Ok(Json::String(format!("<{} element>", child.decl().name)));
	}
	element_json(child, options, depth + 1)
}

/// Convert a scalar to its JSON form.
pub fn scalar_json(value: ScalarValue) -> Json {
	match value {
		ScalarValue::String(item) => Json::String(item),
		ScalarValue::Boolean(item) => Json::Bool(item),
		ScalarValue::Number(item) => Number::from_f64(item).map(Json::Number).unwrap_or(Json::Null),
		ScalarValue::Integer(item) => Json::Number(item.into()),
		ScalarValue::Enum(label) => Json::String(label.to_owned()),
	}
}

/// Render one scalar for text output.
pub fn scalar_text(value: &ScalarValue) -> String {
	match value {
		ScalarValue::String(item) => format!("{item:?}"),
		ScalarValue::Boolean(item) => item.to_string(),
		ScalarValue::Number(item) => item.to_string(),
		ScalarValue::Integer(item) => item.to_string(),
		ScalarValue::Enum(label) => (*label).to_owned(),
	}
}

/// Render the present fields of `element` as indented text lines.
pub fn element_text<N: GenericNode>(element: DynElement<'_, N>, options: &RenderOptions, indent: usize, depth: u32, out: &mut String) -> Result<()> {
	for (field, value) in element.fields() {
		let value = value?;
		if is_empty(&value) {
			continue;
		}
		projected_text(field.name, value, options, indent, depth, out)?;
	}
	Ok(())
}

/// Render one labelled projected value as indented text lines.
pub fn projected_text<N: GenericNode>(label: &str, value: Projected<'_, N>, options: &RenderOptions, indent: usize, depth: u32, out: &mut String) -> Result<()> {
	let pad = "  ".repeat(indent);
	match value {
		Projected::Scalar(None) | Projected::Element(None) => {
			out.push_str(&format!("{pad}{label}: (absent)\n"));
		}
		Projected::Scalar(Some(item)) => {
			out.push_str(&format!("{pad}{label}: {}\n", scalar_text(&item)));
		}
		Projected::Scalars(items) => {
			let mut rendered: Vec<String> = items.iter().take(options.max_sequence_items).map(scalar_text).collect();
			if items.len() > options.max_sequence_items {
				rendered.push(format!("... ({} more)", items.len() - options.max_sequence_items));
			}
			out.push_str(&format!("{pad}{label}: [{}]\n", rendered.join(", ")));
		}
		Projected::Element(Some(child)) => {
			out.push_str(&format!("{pad}{label}: {}\n", child.decl().name));
			nested_text(child, options, indent + 1, depth, out)?;
		}
		Projected::Elements(items) => {
			let kind = items.first().map_or("element", |item| item.decl().name);
			out.push_str(&format!("{pad}{label}: {} x {kind}\n", items.len()));
			for (index, child) in items.iter().take(options.max_sequence_items).enumerate() {
				out.push_str(&format!("{pad}  [{index}]\n"));
				nested_text(*child, options, indent + 2, depth, out)?;
			}
			if items.len() > options.max_sequence_items {
				out.push_str(&format!("{pad}  ... ({} more)\n", items.len() - options.max_sequence_items));
			}
		}
	}
	Ok(())
}

fn nested_text<N: GenericNode>(child: DynElement<'_, N>, options: &RenderOptions, indent: usize, depth: u32, out: &mut String) -> Result<()> {
	if depth >= options.max_depth {
		out.push_str(&format!("{}...\n", "  ".repeat(indent)));
		return Ok(());
	}
	element_text(child, options, indent, depth + 1, out)
}

fn is_empty<N>(value: &Projected<'_, N>) -> bool {
	match value {
		Projected::Scalar(item) => item.is_none(),
		Projected::Scalars(items) => items.is_empty(),
		Projected::Element(item) => item.is_none(),
		Projected::Elements(items) => items.is_empty(),
	}
}
