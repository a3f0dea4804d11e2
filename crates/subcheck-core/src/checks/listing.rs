//! Recursive repository listing through the GitHub contents API.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::probe::{HttpClient, ProbeError};

/// Directory nesting followed before a listing branch is abandoned.
const MAX_DEPTH: usize = 32;

/// One entry of a contents API directory listing.
#[derive(Debug, Deserialize)]
struct ContentItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error("unexpected contents listing from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// List every file path in a repository, starting at a contents API URL.
///
/// Directories are followed through the `url` each entry carries. A listing
/// that does not answer 200 contributes nothing, so an inaccessible repository
/// simply yields an empty list. Each listing URL is fetched at most once and
/// nesting stops at [`MAX_DEPTH`].
pub fn list_repo_files(
    client: &dyn HttpClient,
    contents_url: &str,
) -> Result<Vec<String>, ListingError> {
    let mut walk = Walk::default();
    walk.collect(client, contents_url, 0)?;
    tracing::debug!(url = contents_url, files = walk.files.len(), "listed repository");
    Ok(walk.files)
}

#[derive(Default)]
struct Walk {
    files: Vec<String>,
    visited: HashSet<String>,
}

impl Walk {
    fn collect(
        &mut self,
        client: &dyn HttpClient,
        url: &str,
        depth: usize,
    ) -> Result<(), ListingError> {
        if depth > MAX_DEPTH {
            tracing::warn!(url, depth, "listing nested too deep, skipping");
            return Ok(());
        }
        if !self.visited.insert(url.to_string()) {
            tracing::warn!(url, "listing already visited, skipping");
            return Ok(());
        }
        let resp = client.get(url)?;
        if resp.status != 200 {
            tracing::debug!(url, status = resp.status, "skipping listing");
            return Ok(());
        }
        let items: Vec<ContentItem> =
            serde_json::from_slice(&resp.body).map_err(|source| ListingError::Decode {
                url: url.to_string(),
                source,
            })?;
        for item in items {
            match item.kind.as_str() {
                "file" => {
                    if let Some(p) = item.path.or(item.name) {
                        self.files.push(p);
                    }
                }
                "dir" => {
                    if let Some(dir_url) = item.url {
                        self.collect(client, &dir_url, depth + 1)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}
