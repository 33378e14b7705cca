//! # Outcomes & Aggregation
//!
//! Every input path ends in exactly one [`Outcome`]. Nothing that goes wrong
//! while checking a single file escapes as an error; it becomes a
//! [`Failure`] instead, and [`RunSummary`] folds the outcomes of a run into
//! the process exit code.
//!
//! ## Status lines
//!
//! [`FileReport`] renders as `<symbol> <path>: <message>` where the symbol
//! is `✅` for passed, `⚠️` for skipped and `❌` for failed files.
//! Validation failures append one indented line per violation.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::violation::ValidationViolations;

/// Why a file was not validated, without counting as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The path does not have a `.json` extension.
    NotJsonFile,
    /// The document is an object without a `$schema` key.
    NoSchemaKey,
    /// The document is an array or scalar and has nowhere to put `$schema`.
    NoSchemaSlot,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotJsonFile => f.write_str("not a JSON file, skipping"),
            Self::NoSchemaKey => f.write_str("no $schema key, skipping"),
            Self::NoSchemaSlot => f.write_str("top-level value is not an object, skipping"),
        }
    }
}

/// Why a file failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The path does not exist.
    FileNotFound,
    /// The file exists but could not be read as UTF-8 text.
    Unreadable {
        /// Underlying I/O error message.
        reason: String,
    },
    /// The file is not valid JSON.
    InvalidJson {
        /// Parser message including line and column.
        reason: String,
    },
    /// Strict mode: the object has no `$schema` key.
    MissingSchema,
    /// Strict mode: the document is not an object, so it cannot declare `$schema`.
    NoSchemaSlot,
    /// The `$schema` reference could not be interpreted, loaded or compiled.
    SchemaError {
        /// Description of the problem, including the reference.
        reason: String,
    },
    /// The document does not conform to its schema.
    ValidationFailed {
        /// The schema reference the document was validated against.
        reference: String,
        /// One entry per failing keyword.
        violations: ValidationViolations,
    },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound => f.write_str("file does not exist"),
            Self::Unreadable { reason } => write!(f, "cannot read file: {reason}"),
            Self::InvalidJson { reason } => write!(f, "invalid JSON: {reason}"),
            Self::MissingSchema => f.write_str("missing $schema key (strict mode)"),
            Self::NoSchemaSlot => {
                f.write_str("top-level value is not an object and cannot declare $schema (strict mode)")
            }
            Self::SchemaError { reason } => write!(f, "schema error: {reason}"),
            Self::ValidationFailed {
                reference,
                violations,
            } => write!(
                f,
                "schema validation failed against '{reference}':\n{violations}"
            ),
        }
    }
}

/// The result of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The document conforms to the schema it references.
    Passed {
        /// The schema reference the document was validated against.
        reference: String,
    },
    /// The file was not validated.
    Skipped(SkipReason),
    /// The file failed.
    Failed(Failure),
}

impl Outcome {
    /// Returns true if this outcome makes the run fail.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Status-line prefix.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Passed { .. } => "✅",
            Self::Skipped(_) => "⚠️",
            Self::Failed(_) => "❌",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed { reference } => write!(f, "schema validation passed ({reference})"),
            Self::Skipped(reason) => write!(f, "{reason}"),
            Self::Failed(failure) => write!(f, "{failure}"),
        }
    }
}

/// An outcome paired with the path it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The path as given on the command line.
    pub path: PathBuf,
    /// What happened to it.
    pub outcome: Outcome,
}

impl FileReport {
    /// Pair `outcome` with `path`.
    pub fn new(path: impl AsRef<Path>, outcome: Outcome) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            outcome,
        }
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.outcome.symbol(),
            self.path.display(),
            self.outcome
        )
    }
}

/// Running totals for a batch of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files that validated successfully.
    pub passed: usize,
    /// Files that were skipped.
    pub skipped: usize,
    /// Files that failed.
    pub failed: usize,
}

impl RunSummary {
    /// Count one more outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Passed { .. } => self.passed += 1,
            Outcome::Skipped(_) => self.skipped += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    /// Total number of files seen.
    pub fn total(&self) -> usize {
        self.passed + self.skipped + self.failed
    }

    /// True iff no file failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code: 0 iff every file passed or was skipped, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

impl<'a> FromIterator<&'a Outcome> for RunSummary {
    fn from_iter<I: IntoIterator<Item = &'a Outcome>>(iter: I) -> Self {
        let mut summary = Self::default();
        for outcome in iter {
            summary.record(outcome);
        }
        summary
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} skipped, {} failed",
            self.passed, self.skipped, self.failed
        )
    }
}
