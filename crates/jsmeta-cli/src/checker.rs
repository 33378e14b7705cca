//! # Per-File Driver
//!
//! [`Checker`] runs the full pipeline for one path and folds every problem
//! into an [`Outcome`]:
//!
//! 1. existence, then `.json` extension
//! 2. read and parse
//! 3. locate `$schema`, applying the strict policy when there is none
//! 4. optional environment-variable expansion
//! 5. load the schema, validate the document without its `$schema` key
//!
//! Strict mode only changes step 3.

use std::path::Path;

use jsmeta_core::{
    expand_env_vars, schema_slot, CheckOptions, Failure, FileReport, Outcome, RunSummary,
    SchemaReference, SchemaSlot, SkipReason,
};
use jsmeta_schema::{SchemaError, SchemaLoader, SchemaRetriever, SchemaValidator};
use serde_json::Value;

/// Checks files against the schemas they reference.
#[derive(Debug, Clone)]
pub struct Checker {
    options: CheckOptions,
    loader: SchemaLoader,
    validator: SchemaValidator,
}

impl Checker {
    /// Create a checker for a run.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::HttpClient`] if the HTTP client used for
    /// remote schemas cannot be built.
    pub fn new(options: CheckOptions) -> Result<Self, SchemaError> {
        let retriever = SchemaRetriever::new(options.http_timeout)?;
        Ok(Self {
            loader: SchemaLoader::new(retriever.clone()),
            validator: SchemaValidator::new(retriever),
            options,
        })
    }

    /// Check one path.
    pub fn check_file(&self, path: &Path) -> FileReport {
        tracing::debug!(path = %path.display(), "checking file");
        FileReport::new(path, self.check(path))
    }

    /// Check every path in order, handing each report to `sink` as soon as
    /// it is available.
    pub fn check_all<I, P, F>(&self, paths: I, mut sink: F) -> RunSummary
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        F: FnMut(&FileReport),
    {
        let mut summary = RunSummary::default();
        for path in paths {
            let report = self.check_file(path.as_ref());
            summary.record(&report.outcome);
            sink(&report);
        }
        summary
    }

    fn check(&self, path: &Path) -> Outcome {
        if !path.exists() {
            return Outcome::Failed(Failure::FileNotFound);
        }
        if !has_json_extension(path) {
            tracing::warn!(path = %path.display(), "skipping file without .json extension");
            return Outcome::Skipped(SkipReason::NotJsonFile);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return Outcome::Failed(Failure::Unreadable {
                    reason: e.to_string(),
                })
            }
        };

        let document: Value = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(e) => {
                return Outcome::Failed(Failure::InvalidJson {
                    reason: e.to_string(),
                })
            }
        };

        self.check_document(path, &document)
    }

    /// Check an already-parsed document. `path` locates relative schema
    /// references.
    pub fn check_document(&self, path: &Path, document: &Value) -> Outcome {
        let raw = match schema_slot(document) {
            SchemaSlot::Present(raw) => raw,
            SchemaSlot::Missing => {
                return self.schema_less(path, Failure::MissingSchema, SkipReason::NoSchemaKey)
            }
            SchemaSlot::NoSlot => {
                return self.schema_less(path, Failure::NoSchemaSlot, SkipReason::NoSchemaSlot)
            }
            SchemaSlot::NotAString(value) => {
                return Outcome::Failed(Failure::SchemaError {
                    reason: format!("$schema must be a string, found {value}"),
                })
            }
        };

        let raw = if self.options.expand_env_vars {
            let expanded = expand_env_vars(raw);
            if expanded != raw {
                tracing::debug!(from = raw, to = %expanded, "expanded environment variables");
            }
            expanded
        } else {
            raw.to_string()
        };

        match self.validate_against(path, &raw, document) {
            Ok(reference) => Outcome::Passed { reference },
            Err(SchemaError::ValidationFailed { schema, violations }) => {
                Outcome::Failed(Failure::ValidationFailed {
                    reference: schema,
                    violations,
                })
            }
            Err(e) => Outcome::Failed(Failure::SchemaError {
                reason: e.to_string(),
            }),
        }
    }

    fn schema_less(&self, path: &Path, strict_failure: Failure, skip: SkipReason) -> Outcome {
        if self.options.strict {
            Outcome::Failed(strict_failure)
        } else {
            tracing::warn!(path = %path.display(), reason = %skip, "skipping file");
            Outcome::Skipped(skip)
        }
    }

    fn validate_against(
        &self,
        path: &Path,
        raw: &str,
        document: &Value,
    ) -> Result<String, SchemaError> {
        let reference = SchemaReference::parse(raw, path.parent())?;
        tracing::debug!(%reference, "resolved $schema reference");
        let schema = self.loader.load(&reference)?;
        self.validator.validate(&schema, document)?;
        Ok(schema.name())
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
