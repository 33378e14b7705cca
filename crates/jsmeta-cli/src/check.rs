//! # Check Command
//!
//! Flags accepted by the hook and the handler that prints one status line
//! per file. Status lines go to stdout; diagnostics go to stderr through
//! `tracing`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use jsmeta_core::{CheckOptions, DEFAULT_HTTP_TIMEOUT_SECS};

use crate::checker::Checker;

/// Arguments for checking a batch of files.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON files to check, as passed by pre-commit.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Fail files that do not declare $schema, including top-level arrays.
    #[arg(long)]
    pub strict: bool,

    /// Expand $VAR and ${VAR} in $schema values before resolving them.
    #[arg(long)]
    pub expand_env_vars: bool,

    /// Timeout in seconds for fetching a remote schema.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    pub http_timeout: u64,
}

impl CheckArgs {
    /// Run-wide options selected by these flags.
    pub fn options(&self) -> CheckOptions {
        CheckOptions {
            strict: self.strict,
            expand_env_vars: self.expand_env_vars,
            http_timeout: Duration::from_secs(self.http_timeout),
        }
    }
}

/// Check every file, print its status line, and return the exit code.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let checker =
        Checker::new(args.options()).context("failed to initialise schema retrieval")?;

    let summary = checker.check_all(&args.files, |report| println!("{report}"));

    tracing::info!(
        passed = summary.passed,
        skipped = summary.skipped,
        failed = summary.failed,
        "checked {} file(s)",
        summary.total()
    );

    Ok(summary.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(files: Vec<PathBuf>, strict: bool) -> CheckArgs {
        CheckArgs {
            files,
            strict,
            expand_env_vars: false,
            http_timeout: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }

    #[test]
    fn options_follow_flags() {
        let mut a = args(vec![], true);
        a.expand_env_vars = true;
        a.http_timeout = 5;
        let opts = a.options();
        assert!(opts.strict);
        assert!(opts.expand_env_vars);
        assert_eq!(opts.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn run_check_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.json");
        std::fs::write(&plain, r#"{"name": "test"}"#).unwrap();

        assert_eq!(run_check(&args(vec![plain.clone()], false)).unwrap(), 0);
        assert_eq!(run_check(&args(vec![plain], true)).unwrap(), 1);
        assert_eq!(
            run_check(&args(vec![dir.path().join("nonexistent.json")], false)).unwrap(),
            1
        );
    }
}
