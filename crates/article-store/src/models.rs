//! Domain records held by the store.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store. Starts at 1 and is never reused.
pub type ArticleId = u64;

/// A single article record.
///
/// Serializes as `{"id":1,"title":"...","content":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
}

impl Article {
    /// Whether `needle` (already lowercased) occurs in the title or content,
    /// ignoring case.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// One window of a paginated listing.
///
/// `total_pages` is `ceil(total / limit)`, so an empty collection has zero pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub articles: Vec<Article>,
}

impl Page {
    /// Assemble a page from a `list_page` result.
    ///
    /// `limit` must be non-zero; the store rejects zero before this is reached.
    pub fn new(page: usize, limit: usize, articles: Vec<Article>, total: usize) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit.max(1)),
            articles,
        }
    }
}
