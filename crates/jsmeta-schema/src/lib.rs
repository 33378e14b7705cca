//! # jsmeta-schema — Schema Resolution & Validation
//!
//! Consumed by the CLI through two operations:
//!
//! - [`SchemaLoader::load`]: given a [`jsmeta_core::SchemaReference`],
//!   obtain the schema document it names.
//! - [`SchemaValidator::validate`]: given a schema and a document, succeed
//!   or return structured violations. The document's top-level `$schema`
//!   key is excluded first.
//!
//! Compilation, `$ref`/`$id` resolution and the meta-schemas themselves
//! belong to the `jsonschema` crate. This crate only supplies it with a
//! [`SchemaRetriever`] for files and HTTP(S) URLs and a base URI for each
//! loaded document.

pub mod error;
pub mod loader;
pub mod retrieve;
pub mod validate;

pub use error::SchemaError;
pub use loader::{LoadedSchema, SchemaLoader};
pub use retrieve::SchemaRetriever;
pub use validate::SchemaValidator;
