//! # Error Types
//!
//! Errors raised while interpreting a `$schema` reference string. Loading
//! and validation errors live in `jsmeta-schema`.

use thiserror::Error;

/// A `$schema` value that cannot be turned into a [`crate::SchemaReference`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// The reference is empty or whitespace-only.
    #[error("$schema reference is empty")]
    Empty,

    /// The reference is a URI with a scheme other than `http`, `https` or `file`.
    #[error("unsupported URI scheme '{scheme}' in $schema reference '{reference}'")]
    UnsupportedScheme {
        /// The reference as written in the document.
        reference: String,
        /// The offending scheme.
        scheme: String,
    },

    /// A `file://` URL that does not map to a local path.
    #[error("'{reference}' is not a valid file:// URL")]
    InvalidFileUrl {
        /// The reference as written in the document.
        reference: String,
    },
}
