//! # Schema Errors
//!
//! Everything that can go wrong between reading a `$schema` reference and
//! getting a verdict on the document. The CLI turns each variant into a
//! failed outcome; none of them abort a run.

use jsmeta_core::{ReferenceError, ValidationViolations};
use thiserror::Error;

/// Error during schema resolution or validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The `$schema` string could not be classified.
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {reason}")]
    HttpClient {
        /// Reason reported by the client builder.
        reason: String,
    },

    /// A remote schema could not be fetched.
    #[error("failed to fetch schema '{url}': {reason}")]
    Fetch {
        /// The URL that was requested.
        url: String,
        /// Transport error or HTTP status.
        reason: String,
    },

    /// A local schema file could not be read.
    #[error("cannot read schema file '{path}': {reason}")]
    Read {
        /// Path of the schema file.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },

    /// A schema document is not valid JSON.
    #[error("schema '{location}' is not valid JSON: {reason}")]
    Parse {
        /// Where the schema came from.
        location: String,
        /// Parser message.
        reason: String,
    },

    /// A `$ref` points at a URI scheme the retriever cannot serve.
    #[error("cannot retrieve '{uri}': only file, http and https URIs are supported")]
    UnsupportedUri {
        /// The URI that was requested.
        uri: String,
    },

    /// The schema could not be compiled into a validator.
    #[error("schema '{schema}' could not be compiled: {reason}")]
    Build {
        /// Schema reference.
        schema: String,
        /// Compilation error reported by the validator.
        reason: String,
    },

    /// The document did not conform to the schema.
    #[error("validation failed against schema '{schema}':\n{violations}")]
    ValidationFailed {
        /// Schema reference.
        schema: String,
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },
}
