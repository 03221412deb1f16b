//! External catalog lookup handler

use super::{error_response, ApiError};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use libris_core::remote::RemoteBook;
use serde::{Deserialize, Serialize};

/// Query parameters for catalog search
#[derive(Debug, Deserialize)]
pub struct CatalogSearchQuery {
    /// Free-text search term
    pub q: String,
}

/// Remote result view
#[derive(Debug, Serialize)]
pub struct RemoteBookView {
    pub title: String,
    pub author: String,
    pub first_publish_year: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,
}

impl From<RemoteBook> for RemoteBookView {
    fn from(book: RemoteBook) -> Self {
        Self {
            first_publish_year: book.publish_year_display(),
            title: book.title,
            author: book.author,
            cover_url: book.cover_url,
            detail_url: book.detail_url,
        }
    }
}

/// Search response
/// `total: 0` with an empty `results` array is the no-matches signal
#[derive(Debug, Serialize)]
pub struct CatalogSearchResponse {
    pub results: Vec<RemoteBookView>,
    pub total: usize,
}

/// Query the external catalog by free-text term
pub async fn search_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogSearchQuery>,
) -> Result<Json<CatalogSearchResponse>, ApiError> {
    let results = state
        .remote
        .search(&query.q)
        .await
        .map_err(|e| error_response(e.into()))?;

    let results: Vec<RemoteBookView> = results.into_iter().map(Into::into).collect();
    let total = results.len();
    Ok(Json(CatalogSearchResponse { results, total }))
}
