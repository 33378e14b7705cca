//! # jsmeta-core — Foundational Types for check-json-schema-meta
//!
//! Defines the domain model shared by the schema and CLI crates. Nothing in
//! here performs file or network I/O; the only ambient input is the process
//! environment read by [`expand_env_vars`].
//!
//! ## Contents
//!
//! - [`reference`]: classification of a `$schema` string into a bundled
//!   meta-schema, a remote URL, or a local file.
//! - [`envvars`]: `$NAME` / `${NAME}` expansion inside schema references.
//! - [`document`]: locating the `$schema` slot of a parsed document and
//!   removing it before validation.
//! - [`outcome`]: per-file outcomes, status lines, and run aggregation into
//!   a process exit code.
//! - [`violation`]: structured validation violations.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsmeta-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod envvars;
pub mod error;
pub mod options;
pub mod outcome;
pub mod reference;
pub mod violation;

// Re-export primary types for ergonomic imports.
pub use document::{schema_slot, strip_schema_key, SchemaSlot, SCHEMA_KEY};
pub use envvars::{expand_env_vars, expand_with};
pub use error::ReferenceError;
pub use options::{CheckOptions, DEFAULT_HTTP_TIMEOUT_SECS};
pub use outcome::{Failure, FileReport, Outcome, RunSummary, SkipReason};
pub use reference::{MetaSchemaDraft, SchemaReference};
pub use violation::{ValidationViolations, Violation};
