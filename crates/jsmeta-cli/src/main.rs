//! # check-json-schema-meta entry point
//!
//! Parses command-line arguments, initialises logging, and runs the check.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jsmeta_cli::check::{run_check, CheckArgs};

/// Validate JSON files against the schema named by their $schema key.
#[derive(Parser, Debug)]
#[command(name = "check-json-schema-meta", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    check: CheckArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run_check(&cli.check) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_files_only() {
        let cli = Cli::try_parse_from(["check-json-schema-meta", "a.json", "b.json"]).unwrap();
        assert_eq!(
            cli.check.files,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
        assert!(!cli.check.strict);
        assert!(!cli.check.expand_env_vars);
        assert_eq!(cli.check.http_timeout, 30);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "check-json-schema-meta",
            "--strict",
            "--expand-env-vars",
            "--http-timeout",
            "5",
            "-vv",
            "renovate.json",
        ])
        .unwrap();
        assert!(cli.check.strict);
        assert!(cli.check.expand_env_vars);
        assert_eq!(cli.check.http_timeout, 5);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.check.files, vec![PathBuf::from("renovate.json")]);
    }

    #[test]
    fn cli_parse_flags_after_files() {
        let cli =
            Cli::try_parse_from(["check-json-schema-meta", "a.json", "--strict"]).unwrap();
        assert!(cli.check.strict);
        assert_eq!(cli.check.files, vec![PathBuf::from("a.json")]);
    }

    #[test]
    fn cli_parse_requires_files() {
        assert!(Cli::try_parse_from(["check-json-schema-meta"]).is_err());
        assert!(Cli::try_parse_from(["check-json-schema-meta", "--strict"]).is_err());
    }

    #[test]
    fn cli_parse_rejects_bad_timeout() {
        let result = Cli::try_parse_from([
            "check-json-schema-meta",
            "--http-timeout",
            "soon",
            "a.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_unknown_flag_errors() {
        let result = Cli::try_parse_from(["check-json-schema-meta", "--lenient", "a.json"]);
        assert!(result.is_err());
    }
}
