//! # Document Shape
//!
//! Helpers for locating the `$schema` key in a parsed JSON document and for
//! producing the instance that is actually handed to the validator.

use serde_json::Value;

/// The key a document uses to name its schema.
pub const SCHEMA_KEY: &str = "$schema";

/// What a parsed document offers in place of a `$schema` reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaSlot<'a> {
    /// The document is an array or a scalar and cannot carry `$schema`.
    NoSlot,
    /// The document is an object without a usable `$schema` value.
    /// `null` and the empty string count as absent.
    Missing,
    /// `$schema` is present but is not a string.
    NotAString(&'a Value),
    /// `$schema` holds a non-empty string.
    Present(&'a str),
}

/// Inspect the top-level `$schema` slot of `document`.
pub fn schema_slot(document: &Value) -> SchemaSlot<'_> {
    let Some(object) = document.as_object() else {
        return SchemaSlot::NoSlot;
    };
    match object.get(SCHEMA_KEY) {
        None | Some(Value::Null) => SchemaSlot::Missing,
        Some(Value::String(s)) if s.is_empty() => SchemaSlot::Missing,
        Some(Value::String(s)) => SchemaSlot::Present(s),
        Some(other) => SchemaSlot::NotAString(other),
    }
}

/// Return a copy of `document` without its top-level `$schema` key.
///
/// Schemas commonly declare `additionalProperties: false` without listing
/// `$schema`, so the key must not reach the validator. Nested `$schema`
/// keys are data and are kept.
pub fn strip_schema_key(document: &Value) -> Value {
    match document {
        Value::Object(object) => {
            let mut stripped = object.clone();
            stripped.remove(SCHEMA_KEY);
            Value::Object(stripped)
        }
        other => other.clone(),
    }
}
