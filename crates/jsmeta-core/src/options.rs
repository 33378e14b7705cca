//! # Check Options
//!
//! Run-wide settings. The CLI fills these from its flags; library users
//! construct them directly.

use std::time::Duration;

/// Default timeout for fetching a remote schema, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Settings shared by every file in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Fail documents that cannot or do not declare `$schema` instead of
    /// skipping them.
    pub strict: bool,
    /// Expand `$NAME` / `${NAME}` in schema references before resolution.
    pub expand_env_vars: bool,
    /// Timeout applied to each remote schema request.
    pub http_timeout: Duration,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            strict: false,
            expand_env_vars: false,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl CheckOptions {
    /// Default options with strict mode toggled.
    pub fn strict(strict: bool) -> Self {
        Self {
            strict,
            ..Self::default()
        }
    }
}
