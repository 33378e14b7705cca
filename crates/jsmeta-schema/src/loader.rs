//! # Schema Loading
//!
//! Turns a classified [`SchemaReference`] into a schema document ready to be
//! compiled.
//!
//! - Meta-schemas become a two-keyword shim, `{"$schema": uri, "$ref": uri}`,
//!   which the validator resolves against its bundled copy. No network.
//! - Files and URLs are read or fetched, and their location is kept as the
//!   base URI the validator registers the document under. Relative `$ref`s
//!   then resolve next to the schema even where the draft ignores `$id`
//!   (draft-07 and earlier skip every sibling of a root `$ref`).

use std::path::{Path, PathBuf};

use jsmeta_core::{MetaSchemaDraft, SchemaReference};
use serde_json::{json, Value};
use url::Url;

use crate::error::SchemaError;
use crate::retrieve::SchemaRetriever;

/// A schema document together with the reference it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSchema {
    /// Where the schema came from.
    pub reference: SchemaReference,
    /// The schema document.
    pub document: Value,
    /// Absolute location of the document, without fragment. `None` for
    /// bundled meta-schemas.
    pub base: Option<Url>,
}

impl LoadedSchema {
    /// The reference in display form, used in messages.
    pub fn name(&self) -> String {
        self.reference.to_string()
    }
}

/// Resolves `$schema` references to schema documents.
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    retriever: SchemaRetriever,
}

impl SchemaLoader {
    /// Create a loader that reads and fetches through `retriever`.
    pub fn new(retriever: SchemaRetriever) -> Self {
        Self { retriever }
    }

    /// Obtain the schema document named by `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Read`] or [`SchemaError::Fetch`] if the
    /// document cannot be obtained, and [`SchemaError::Parse`] if it is not
    /// valid JSON.
    pub fn load(&self, reference: &SchemaReference) -> Result<LoadedSchema, SchemaError> {
        let (document, base) = match reference {
            SchemaReference::MetaSchema(draft) => {
                tracing::debug!(uri = draft.canonical_uri(), "using bundled meta-schema");
                (meta_schema_shim(*draft), None)
            }
            SchemaReference::Remote(url) => {
                let document = self.retriever.fetch(url)?;
                let mut base = url.clone();
                base.set_fragment(None);
                (document, Some(base))
            }
            SchemaReference::File(path) => {
                let absolute = absolutize(path)?;
                let document = self.retriever.read_file(&absolute)?;
                (document, Url::from_file_path(&absolute).ok())
            }
        };

        Ok(LoadedSchema {
            reference: reference.clone(),
            document,
            base,
        })
    }
}

/// A schema that defers entirely to a bundled meta-schema.
fn meta_schema_shim(draft: MetaSchemaDraft) -> Value {
    let uri = draft.canonical_uri();
    json!({ "$schema": uri, "$ref": uri })
}

fn absolutize(path: &Path) -> Result<PathBuf, SchemaError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| SchemaError::Read {
        path: path.display().to_string(),
        reason: format!("cannot determine current directory: {e}"),
    })?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn loader() -> SchemaLoader {
        SchemaLoader::new(SchemaRetriever::new(Duration::from_secs(5)).unwrap())
    }

    #[test]
    fn meta_schema_is_served_without_io() {
        let reference = SchemaReference::MetaSchema(MetaSchemaDraft::Draft7);
        let loaded = loader().load(&reference).unwrap();
        assert_eq!(
            loaded.document,
            json!({
                "$schema": "http://json-schema.org/draft-07/schema#",
                "$ref": "http://json-schema.org/draft-07/schema#"
            })
        );
        assert_eq!(loaded.name(), "http://json-schema.org/draft-07/schema#");
    }

    #[test]
    fn meta_schema_has_no_base() {
        let reference = SchemaReference::MetaSchema(MetaSchemaDraft::Draft202012);
        assert_eq!(loader().load(&reference).unwrap().base, None);
    }

    #[test]
    fn file_schema_keeps_its_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.schema.json");
        std::fs::write(&path, r#"{"type": "object"}"#).unwrap();

        let loaded = loader().load(&SchemaReference::File(path.clone())).unwrap();
        assert_eq!(loaded.base, Some(Url::from_file_path(&path).unwrap()));
        assert_eq!(loaded.document, json!({"type": "object"}));
    }

    #[test]
    fn unreachable_remote_schema_is_fetch_error() {
        let loader = SchemaLoader::new(SchemaRetriever::new(Duration::from_secs(2)).unwrap());
        let url = Url::parse("http://127.0.0.1:1/schema.json").unwrap();
        let err = loader.load(&SchemaReference::Remote(url)).unwrap_err();
        assert!(matches!(err, SchemaError::Fetch { .. }), "got {err}");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = loader()
            .load(&SchemaReference::File(dir.path().join("nope.json")))
            .unwrap_err();
        assert!(matches!(err, SchemaError::Read { .. }), "got {err}");
    }
}
