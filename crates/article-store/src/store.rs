//! Main store implementation.
//!
//! `ArticleStore` keeps articles in creation order, which is also id order,
//! and hands out ids from a counter that only moves forward.

use crate::error::{StoreError, StoreResult};
use crate::models::{Article, ArticleId};

/// First id handed out by a fresh store.
const FIRST_ID: ArticleId = 1;

/// In-memory article collection.
///
/// Not synchronized; callers that share it across tasks wrap it in a lock.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    articles: Vec<Article>,
    next_id: ArticleId,
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleStore {
    /// Create an empty store whose first article will get id 1.
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Number of stored articles.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the store holds no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Append a new article with the next id and return a copy of it.
    pub fn create(&mut self, title: impl Into<String>, content: impl Into<String>) -> Article {
        let article = Article {
            id: self.next_id,
            title: title.into(),
            content: content.into(),
        };
        self.articles.push(article.clone());
        self.next_id += 1;

        tracing::debug!(article_id = article.id, "Article stored");
        article
    }

    /// Overwrite title and content of the article with `id`.
    ///
    /// Id and position are left untouched.
    pub fn update(
        &mut self,
        id: ArticleId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Article> {
        let article = self
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::NotFound(id))?;

        article.title = title.into();
        article.content = content.into();

        tracing::debug!(article_id = id, "Article updated");
        Ok(article.clone())
    }

    /// Articles whose title or content contains `keyword`, ignoring case, in
    /// store order. An empty keyword matches every article.
    pub fn search(&self, keyword: &str) -> Vec<Article> {
        let needle = keyword.to_lowercase();
        self.articles
            .iter()
            .filter(|a| a.matches_lowercase(&needle))
            .cloned()
            .collect()
    }

    /// The `page`-th window of `limit` articles (1-indexed) and the total
    /// collection size.
    ///
    /// A window starting at or past the end is empty; the total is the same
    /// for every page.
    pub fn list_page(&self, page: usize, limit: usize) -> StoreResult<(Vec<Article>, usize)> {
        if page == 0 {
            return Err(StoreError::InvalidPagination {
                field: "page",
                value: page,
            });
        }
        if limit == 0 {
            return Err(StoreError::InvalidPagination {
                field: "limit",
                value: limit,
            });
        }

        let total = self.articles.len();
        let window = (page - 1)
            .checked_mul(limit)
            .filter(|&start| start < total)
            .map(|start| {
                let end = start.saturating_add(limit).min(total);
                self.articles[start..end].to_vec()
            })
            .unwrap_or_default();

        Ok((window, total))
    }
}
