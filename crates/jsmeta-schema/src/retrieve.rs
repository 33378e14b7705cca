//! # Schema Retrieval
//!
//! Fetches schema documents from disk and over HTTP(S). The same retriever
//! serves two callers: the [`crate::SchemaLoader`], for the document a
//! `$schema` names, and the `jsonschema` crate, for every `$ref` that points
//! outside the schema being compiled.
//!
//! Meta-schemas never reach this code: the validator ships them and resolves
//! their URIs from its own registry.

use std::path::Path;
use std::time::Duration;

use jsonschema::{Retrieve, Uri};
use serde_json::Value;
use url::Url;

use crate::error::SchemaError;

/// File and HTTP(S) retriever backed by a blocking `reqwest` client.
///
/// Cloning is cheap; clones share the client's connection pool.
#[derive(Debug, Clone)]
pub struct SchemaRetriever {
    client: reqwest::blocking::Client,
}

impl SchemaRetriever {
    /// Create a retriever whose HTTP requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::HttpClient`] if the TLS backend cannot be
    /// initialised.
    pub fn new(timeout: Duration) -> Result<Self, SchemaError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("check-json-schema-meta/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SchemaError::HttpClient {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Fetch and parse a remote schema.
    pub fn fetch(&self, url: &Url) -> Result<Value, SchemaError> {
        tracing::debug!(%url, "fetching remote schema");

        let response = self.client.get(url.clone()).send().map_err(|e| {
            let reason = if e.is_timeout() {
                "request timed out".to_string()
            } else {
                e.to_string()
            };
            SchemaError::Fetch {
                url: url.to_string(),
                reason,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SchemaError::Fetch {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let body = response.text().map_err(|e| SchemaError::Fetch {
            url: url.to_string(),
            reason: format!("cannot read response body: {e}"),
        })?;

        serde_json::from_str(&body).map_err(|e| SchemaError::Parse {
            location: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// Read and parse a schema file.
    pub fn read_file(&self, path: &Path) -> Result<Value, SchemaError> {
        tracing::debug!(path = %path.display(), "reading schema file");

        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| SchemaError::Parse {
            location: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Retrieve a schema by absolute URL, dispatching on the scheme.
    pub fn retrieve_url(&self, url: &Url) -> Result<Value, SchemaError> {
        match url.scheme() {
            "http" | "https" => self.fetch(url),
            "file" => {
                let path = url.to_file_path().map_err(|()| SchemaError::UnsupportedUri {
                    uri: url.to_string(),
                })?;
                self.read_file(&path)
            }
            _ => Err(SchemaError::UnsupportedUri {
                uri: url.to_string(),
            }),
        }
    }
}

impl Retrieve for SchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let url = Url::parse(uri.as_str())?;
        Ok(self.retrieve_url(&url)?)
    }
}
