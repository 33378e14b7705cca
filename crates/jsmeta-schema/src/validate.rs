//! # Schema Validation
//!
//! Compiles a [`LoadedSchema`] with the `jsonschema` crate and validates a
//! document against it.
//!
//! ## `$schema` exclusion
//!
//! The top-level `$schema` key is removed from a copy of the document before
//! validation. It names the schema, it is not data described by it, and
//! schemas with `additionalProperties: false` would otherwise reject every
//! document that points at them.
//!
//! ## Reference resolution
//!
//! A schema with a known location is registered as a resource under that
//! URI and compiled through a one-keyword `{"$ref": location}` root, so
//! relative `$ref`s inside it resolve against the file or URL it came from.
//! The resource's draft is detected from its own `$schema`, defaulting to
//! 2020-12. Cross-document `$ref`s go through [`SchemaRetriever`];
//! meta-schema URIs are answered from the validator's bundled registry.

use jsmeta_core::{strip_schema_key, ValidationViolations, Violation};
use jsonschema::{Resource, ValidationOptions, Validator};
use serde_json::{json, Value};

use crate::error::SchemaError;
use crate::loader::LoadedSchema;
use crate::retrieve::SchemaRetriever;

/// A schema validator backed by the `jsonschema` crate.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    retriever: SchemaRetriever,
}

impl SchemaValidator {
    /// Create a validator resolving external `$ref`s through `retriever`.
    pub fn new(retriever: SchemaRetriever) -> Self {
        Self { retriever }
    }

    fn build_options(&self) -> ValidationOptions {
        let mut opts = jsonschema::options();
        opts.with_retriever(self.retriever.clone());
        opts
    }

    /// Compile `schema` into a validator.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Build`] if the schema is itself invalid or one
    /// of its references cannot be resolved.
    pub fn build_validator(&self, schema: &LoadedSchema) -> Result<Validator, SchemaError> {
        let build_error = |reason: String| SchemaError::Build {
            schema: schema.name(),
            reason,
        };

        let mut options = self.build_options();
        let Some(base) = &schema.base else {
            return options
                .build(&schema.document)
                .map_err(|e| build_error(e.to_string()));
        };

        let resource = Resource::from_contents(schema.document.clone())
            .map_err(|e| build_error(e.to_string()))?;
        options.with_resource(base.as_str(), resource);
        options
            .build(&json!({ "$ref": base.as_str() }))
            .map_err(|e| build_error(e.to_string()))
    }

    /// Validate `document` against `schema`, ignoring its top-level `$schema`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ValidationFailed`] with one [`Violation`] per
    /// failing keyword, or [`SchemaError::Build`] if the schema does not
    /// compile.
    pub fn validate(&self, schema: &LoadedSchema, document: &Value) -> Result<(), SchemaError> {
        let validator = self.build_validator(schema)?;
        let instance = strip_schema_key(document);

        let violations: ValidationViolations = validator
            .iter_errors(&instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: schema.name(),
                violations,
            })
        }
    }
}
