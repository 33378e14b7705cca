//! # Schema References
//!
//! A `$schema` value names either one of the JSON Schema meta-schemas, a
//! remote document reachable over HTTP(S), or a schema file on disk.
//! [`SchemaReference::parse`] performs that classification once so the
//! loader can dispatch on the variant instead of re-inspecting strings.
//!
//! ## Local paths
//!
//! Relative paths are looked up next to the referencing document first and
//! fall back to the current directory. The second lookup matches how
//! pre-commit invokes hooks from the repository root.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::ReferenceError;

/// The JSON Schema drafts whose meta-schemas are bundled with the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaSchemaDraft {
    /// `http://json-schema.org/draft-04/schema#`
    Draft4,
    /// `http://json-schema.org/draft-06/schema#`
    Draft6,
    /// `http://json-schema.org/draft-07/schema#`
    Draft7,
    /// `https://json-schema.org/draft/2019-09/schema`
    Draft201909,
    /// `https://json-schema.org/draft/2020-12/schema`
    Draft202012,
}

impl MetaSchemaDraft {
    /// Every supported draft, oldest first.
    pub const ALL: [Self; 5] = [
        Self::Draft4,
        Self::Draft6,
        Self::Draft7,
        Self::Draft201909,
        Self::Draft202012,
    ];

    /// The canonical meta-schema URI for this draft.
    pub fn canonical_uri(self) -> &'static str {
        match self {
            Self::Draft4 => "http://json-schema.org/draft-04/schema#",
            Self::Draft6 => "http://json-schema.org/draft-06/schema#",
            Self::Draft7 => "http://json-schema.org/draft-07/schema#",
            Self::Draft201909 => "https://json-schema.org/draft/2019-09/schema",
            Self::Draft202012 => "https://json-schema.org/draft/2020-12/schema",
        }
    }

    /// Recognize a meta-schema URI.
    ///
    /// Accepts both `http` and `https` and an optional trailing empty
    /// fragment, since documents in the wild use every combination.
    pub fn from_uri(uri: &str) -> Option<Self> {
        let trimmed = uri.trim().trim_end_matches('#');
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))?;
        match rest {
            "json-schema.org/draft-04/schema" => Some(Self::Draft4),
            "json-schema.org/draft-06/schema" => Some(Self::Draft6),
            "json-schema.org/draft-07/schema" => Some(Self::Draft7),
            "json-schema.org/draft/2019-09/schema" => Some(Self::Draft201909),
            "json-schema.org/draft/2020-12/schema" => Some(Self::Draft202012),
            _ => None,
        }
    }
}

/// A classified `$schema` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaReference {
    /// One of the bundled JSON Schema meta-schemas.
    MetaSchema(MetaSchemaDraft),
    /// An `http://` or `https://` URL.
    Remote(Url),
    /// A schema file on disk, from a `file://` URL or a plain path.
    File(PathBuf),
}

impl SchemaReference {
    /// Classify a raw `$schema` string.
    ///
    /// `base_dir` is the directory of the referencing document; relative
    /// paths are resolved against it when the file exists there.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError`] for empty references, unsupported URI
    /// schemes, and `file://` URLs that do not denote a local path.
    pub fn parse(raw: &str, base_dir: Option<&Path>) -> Result<Self, ReferenceError> {
        let reference = raw.trim();
        if reference.is_empty() {
            return Err(ReferenceError::Empty);
        }

        if let Some(draft) = MetaSchemaDraft::from_uri(reference) {
            return Ok(Self::MetaSchema(draft));
        }

        match Url::parse(reference) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Self::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(Self::File)
                    .map_err(|()| ReferenceError::InvalidFileUrl {
                        reference: reference.to_string(),
                    }),
                // `C:\schemas\x.json` parses as a URL with scheme `c`.
                scheme if scheme.len() == 1 => Ok(Self::File(resolve_local(
                    Path::new(reference),
                    base_dir,
                ))),
                scheme => Err(ReferenceError::UnsupportedScheme {
                    reference: reference.to_string(),
                    scheme: scheme.to_string(),
                }),
            },
            Err(_) => Ok(Self::File(resolve_local(Path::new(reference), base_dir))),
        }
    }
}

impl fmt::Display for SchemaReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MetaSchema(draft) => f.write_str(draft.canonical_uri()),
            Self::Remote(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve a local schema path.
///
/// Absolute paths are returned as-is. A relative path is taken relative to
/// `base_dir` when that file exists, otherwise relative to the current
/// directory.
pub fn resolve_local(path: &Path, base_dir: Option<&Path>) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if let Some(base) = base_dir {
        let candidate = base.join(path);
        if candidate.exists() {
            return candidate;
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_schema_uris_are_recognized_in_all_spellings() {
        for uri in [
            "http://json-schema.org/draft-07/schema#",
            "http://json-schema.org/draft-07/schema",
            "https://json-schema.org/draft-07/schema#",
        ] {
            assert_eq!(MetaSchemaDraft::from_uri(uri), Some(MetaSchemaDraft::Draft7), "{uri}");
        }
        assert_eq!(
            MetaSchemaDraft::from_uri("https://json-schema.org/draft/2020-12/schema"),
            Some(MetaSchemaDraft::Draft202012)
        );
        assert_eq!(
            MetaSchemaDraft::from_uri("https://json-schema.org/draft/2019-09/schema#"),
            Some(MetaSchemaDraft::Draft201909)
        );
        assert_eq!(
            MetaSchemaDraft::from_uri("https://json-schema.org/draft/2099-01/schema"),
            None
        );
    }

    #[test]
    fn canonical_uris_round_trip() {
        for draft in MetaSchemaDraft::ALL {
            assert_eq!(MetaSchemaDraft::from_uri(draft.canonical_uri()), Some(draft));
        }
    }

    #[test]
    fn parse_meta_schema() {
        let r = SchemaReference::parse("http://json-schema.org/draft-04/schema#", None).unwrap();
        assert_eq!(r, SchemaReference::MetaSchema(MetaSchemaDraft::Draft4));
    }

    #[test]
    fn parse_remote_url() {
        let r = SchemaReference::parse("https://docs.renovatebot.com/renovate-schema.json", None)
            .unwrap();
        match &r {
            SchemaReference::Remote(url) => {
                assert_eq!(url.host_str(), Some("docs.renovatebot.com"));
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn parse_file_url() {
        let r = SchemaReference::parse("file:///tmp/schemas/strict.json", None).unwrap();
        assert_eq!(r, SchemaReference::File(PathBuf::from("/tmp/schemas/strict.json")));
    }

    #[test]
    fn parse_file_url_with_remote_host_is_rejected() {
        let err = SchemaReference::parse("file://example.com/x.json", None).unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidFileUrl { .. }));
    }

    #[test]
    fn parse_absolute_path() {
        let r = SchemaReference::parse("/etc/schemas/app.json", None).unwrap();
        assert_eq!(r, SchemaReference::File(PathBuf::from("/etc/schemas/app.json")));
    }

    #[test]
    fn parse_relative_path_without_base_stays_relative() {
        let r = SchemaReference::parse("schemas/app.schema.json", None).unwrap();
        assert_eq!(r, SchemaReference::File(PathBuf::from("schemas/app.schema.json")));
    }

    #[test]
    fn parse_trims_whitespace() {
        let r = SchemaReference::parse("  ./app.json  ", None).unwrap();
        assert_eq!(r, SchemaReference::File(PathBuf::from("./app.json")));
    }

    #[test]
    fn parse_empty_is_error() {
        assert_eq!(SchemaReference::parse("   ", None), Err(ReferenceError::Empty));
    }

    #[test]
    fn parse_unsupported_scheme() {
        let err = SchemaReference::parse("ftp://example.com/schema.json", None).unwrap_err();
        match err {
            ReferenceError::UnsupportedScheme { scheme, .. } => assert_eq!(scheme, "ftp"),
            other => panic!("expected UnsupportedScheme, got {other:?}"),
        }
    }

    #[test]
    fn resolve_local_prefers_base_dir_when_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("local.schema.json"), b"{}").unwrap();

        let resolved = resolve_local(Path::new("local.schema.json"), Some(dir.path()));
        assert_eq!(resolved, dir.path().join("local.schema.json"));

        let missing = resolve_local(Path::new("missing.schema.json"), Some(dir.path()));
        assert_eq!(missing, PathBuf::from("missing.schema.json"));
    }

    #[test]
    fn display_matches_source_form() {
        let r = SchemaReference::MetaSchema(MetaSchemaDraft::Draft7);
        assert_eq!(r.to_string(), "http://json-schema.org/draft-07/schema#");
        let r = SchemaReference::File(PathBuf::from("/a/b.json"));
        assert_eq!(r.to_string(), "/a/b.json");
    }
}
