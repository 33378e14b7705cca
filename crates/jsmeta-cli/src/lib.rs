//! # jsmeta-cli — check-json-schema-meta
//!
//! A pre-commit hook that validates JSON documents against the schema named
//! by their `$schema` key.
//!
//! ```bash
//! check-json-schema-meta renovate.json .vscode/settings.json
//! check-json-schema-meta --strict --expand-env-vars config/*.json
//! ```
//!
//! Every file gets one status line on stdout:
//!
//! ```text
//! ✅ renovate.json: schema validation passed (https://docs.renovatebot.com/renovate-schema.json)
//! ⚠️ package-lock.json: no $schema key, skipping
//! ❌ config/app.json: invalid JSON: expected `,` or `}` at line 4 column 3
//! ```
//!
//! The process exits 0 iff no file failed.

pub mod check;
pub mod checker;

pub use check::{run_check, CheckArgs};
pub use checker::Checker;
