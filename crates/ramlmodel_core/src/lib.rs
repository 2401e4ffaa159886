//! Typed, read-only projection layer over parsed RAML document nodes.

/// Generic node capability, coercion rules, declared-field tables, and typed element views.
pub mod model;
