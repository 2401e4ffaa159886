use log::debug;

use crate::model::{DynElement, GenericNode, ModelError, Projected};

/// Whole-tree audit options.
#[derive(Debug, Clone)]
pub struct AuditOptions {
	/// Maximum nesting depth to descend into.
	pub max_depth: u32,
}

impl Default for AuditOptions {
	fn default() -> Self {
		Self { max_depth: 32 }
	}
}

/// One field that failed to read.
#[derive(Debug)]
pub struct AuditIssue {
	/// Dotted path from the audit root, e.g. `facets[0].type[1]`.
	pub path: String,
	/// Read error for that field.
	pub error: ModelError,
}

/// Audit result.
#[derive(Debug, Default)]
pub struct AuditReport {
	/// Failed reads, in traversal order.
	pub issues: Vec<AuditIssue>,
	/// Number of backed elements visited, including the root.
	pub visited_elements: usize,
	/// Number of declared fields read.
	pub fields_read: usize,
	/// Whether `max_depth` stopped the descent somewhere.
	pub truncated: bool,
}

impl AuditReport {
	/// Whether every declared field read cleanly.
	pub fn is_clean(&self) -> bool {
		self.issues.is_empty()
	}
}

/// Read every declared field under `root`, collecting failures instead of stopping at the first.
pub fn audit<N: GenericNode>(root: DynElement<'_, N>, options: &AuditOptions) -> AuditReport {
	let mut report = AuditReport::default();
	visit(root, "", 0, options, &mut report);
	debug!(
		kind = root.decl().name,
		elements = report.visited_elements,
		fields = report.fields_read,
		issues = report.issues.len();
		"audit finished"
	);
	report
}

fn visit<N: GenericNode>(element: DynElement<'_, N>, prefix: &str, depth: u32, options: &AuditOptions, report: &mut AuditReport) {
	if element.is_absent() {
		return;
	}
	report.visited_elements += 1;

	for (field, read) in element.fields() {
		report.fields_read += 1;
		let projected = match read {
			Ok(projected) => projected,
			Err(error) => {
				let at = match &error {
					ModelError::TypeMismatch { field: name, .. } => name.as_str(),
					_ => field.name,
				};
				report.issues.push(AuditIssue {
					path: join(prefix, at),
					error,
				});
				continue;
			}
		};

		let children = match projected {
			Projected::Element(Some(child)) => vec![(join(prefix, field.name), child)],
			Projected::Elements(items) => items
				.into_iter()
				.enumerate()
				.map(|(index, child)| (format!("{}[{index}]", join(prefix, field.name)), child))
				.collect(),
			_ => Vec::new(),
		};
		if children.is_empty() {
			continue;
		}
		if depth >= options.max_depth {
			report.truncated = true;
			continue;
		}

		for (path, child) in children {
			visit(child, &path, depth + 1, options, report);
		}
	}
}

fn join(prefix: &str, name: &str) -> String {
	if prefix.is_empty() { name.to_owned() } else { format!("{prefix}.{name}") }
}
