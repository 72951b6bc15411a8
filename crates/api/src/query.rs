//! Query parameter types for film listing and search.

use serde::Deserialize;

/// `GET /films?sort=<rating|name|created_at>`.
#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort: String,
}

/// `GET /films/search?by=<name|actor>&q=<substring>`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub by: String,
    #[serde(default)]
    pub q: String,
}
