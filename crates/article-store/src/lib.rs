//! article-store: In-memory storage for the articles service
//!
//! This crate provides:
//! - The `Article` record and its JSON shape
//! - `ArticleStore`, an ordered collection with monotonic id assignment
//! - Case-insensitive keyword search over title and content
//! - 1-indexed page/limit windowing with a `Page` summary type
//!
//! # Usage
//!
//! ```rust
//! use article_store::ArticleStore;
//!
//! let mut store = ArticleStore::new();
//! let article = store.create("Rust", "Ownership and borrowing");
//! assert_eq!(article.id, 1);
//!
//! let hits = store.search("OWNERSHIP");
//! assert_eq!(hits.len(), 1);
//!
//! let (articles, total) = store.list_page(1, 10).unwrap();
//! assert_eq!((articles.len(), total), (1, 1));
//! ```

pub mod error;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{Article, ArticleId, Page};
pub use store::ArticleStore;
