//! Open Library catalog lookup
//!
//! Read-only search against the public Open Library API. Raw result
//! documents are normalized into [`RemoteBook`] summaries; nothing is
//! persisted locally.

use crate::error::RemoteError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result type for remote lookups
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Endpoints used by the lookup client
#[derive(Debug, Clone)]
pub struct RemoteEndpoints {
    /// Search endpoint returning a JSON object with a `docs` array
    pub search_url: String,

    /// Cover image host; covers resolve to `<covers_url>/<cover_i>-M.jpg`
    pub covers_url: String,

    /// Site base for detail links, joined with each result's `key`
    pub site_url: String,
}

impl Default for RemoteEndpoints {
    fn default() -> Self {
        Self {
            search_url: "https://openlibrary.org/search.json".to_string(),
            covers_url: "https://covers.openlibrary.org/b/id".to_string(),
            site_url: "https://openlibrary.org".to_string(),
        }
    }
}

impl RemoteEndpoints {
    /// Defaults, with per-endpoint environment overrides
    /// Tests and mirrors point these at their own servers
    pub fn from_env() -> Self {
        let mut endpoints = Self::default();
        if let Ok(url) = std::env::var("LIBRIS_OPENLIBRARY_URL") {
            endpoints.search_url = url;
        }
        if let Ok(url) = std::env::var("LIBRIS_COVERS_URL") {
            endpoints.covers_url = url;
        }
        if let Ok(url) = std::env::var("LIBRIS_SITE_URL") {
            endpoints.site_url = url;
        }
        endpoints
    }
}

/// Client for the Open Library search API
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    endpoints: RemoteEndpoints,
    client: reqwest::Client,
}

impl OpenLibraryClient {
    /// Requests that outlive this are abandoned rather than blocking the
    /// interaction forever
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client against the public Open Library endpoints
    pub fn new() -> RemoteResult<Self> {
        Self::with_endpoints(RemoteEndpoints::default())
    }

    /// Create a client against custom endpoints
    pub fn with_endpoints(endpoints: RemoteEndpoints) -> RemoteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self { endpoints, client })
    }

    /// Search the catalog by free-text term
    ///
    /// Returns the normalized results in the order the service lists them.
    /// An empty `docs` array is a valid outcome and yields an empty Vec.
    pub async fn search(&self, term: &str) -> RemoteResult<Vec<RemoteBook>> {
        if term.trim().is_empty() {
            return Err(RemoteError::InvalidQuery("empty search term".to_string()));
        }

        let url = format!(
            "{}?q={}",
            self.endpoints.search_url,
            urlencoding::encode(term)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status().as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))?;

        Ok(body
            .docs
            .into_iter()
            .map(|doc| doc.normalize(&self.endpoints))
            .collect())
    }
}

/// Raw search response: a `docs` array of loosely-typed documents
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

/// One raw result document; every field may be absent
#[derive(Debug, Deserialize)]
struct SearchDoc {
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
    first_publish_year: Option<i64>,
    cover_i: Option<i64>,
    key: Option<String>,
}

impl SearchDoc {
    /// Fill fallbacks and derive the cover and detail URLs
    fn normalize(self, endpoints: &RemoteEndpoints) -> RemoteBook {
        // An empty author_name list gets the same fallback as a missing one
        let author = self
            .author_name
            .into_iter()
            .next()
            .unwrap_or_else(|| RemoteBook::FALLBACK.to_string());

        RemoteBook {
            title: self
                .title
                .unwrap_or_else(|| RemoteBook::FALLBACK.to_string()),
            author,
            first_publish_year: self.first_publish_year,
            cover_url: self
                .cover_i
                .map(|id| format!("{}/{}-M.jpg", endpoints.covers_url, id)),
            detail_url: self
                .key
                .map(|key| format!("{}{}", endpoints.site_url, key)),
        }
    }
}

/// A normalized remote search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteBook {
    pub title: String,
    pub author: String,
    pub first_publish_year: Option<i64>,
    pub cover_url: Option<String>,
    pub detail_url: Option<String>,
}

impl RemoteBook {
    /// Placeholder rendered for absent fields
    pub const FALLBACK: &'static str = "N/A";

    /// Publish year as rendered to the operator
    pub fn publish_year_display(&self) -> String {
        self.first_publish_year
            .map(|year| year.to_string())
            .unwrap_or_else(|| Self::FALLBACK.to_string())
    }
}
