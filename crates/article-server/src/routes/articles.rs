//! Article routes.
//!
//! This module implements the article HTTP endpoints:
//! - POST /articles/create - Create an article
//! - PUT /articles/update/{id} - Replace title and content of an article
//! - GET /articles/search - Keyword search over title and content
//! - GET /articles/get-all - Paginated listing in creation order

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use serde::Deserialize;

use article_store::{Article, ArticleId, Page, StoreError};

use crate::error::{ApiError, ApiResult};
use crate::extract::{JsonBody, QueryParams};
use crate::state::AppState;

/// Page used when the query omits `page`.
const DEFAULT_PAGE: usize = 1;
/// Page size used when the query omits `limit`.
const DEFAULT_LIMIT: usize = 10;

// ============================================================================
// Request Types
// ============================================================================

/// Request body for POST /articles/create.
///
/// Missing fields, and a `null` body, default to empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
}

/// Request body for PUT /articles/update/{id}.
#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateArticleRequest {
    /// Both fields, provided they are present and non-empty.
    fn into_fields(self) -> Option<(String, String)> {
        match (self.title, self.content) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
                Some((title, content))
            }
            _ => None,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse an optional positive integer, falling back to `default` when absent.
///
/// Surrounding whitespace is rejected, not trimmed.
fn parse_positive(raw: Option<&str>, default: usize, message: &str) -> ApiResult<usize> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| ApiError::BadRequest(message.to_string())),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /articles/create - Create an article.
///
/// # Response
///
/// - 201 Created: the new article
/// - 400 Bad Request: body is not a JSON object with string fields
async fn create_article(
    State(state): State<AppState>,
    body: Result<JsonBody<Option<CreateArticleRequest>>, ApiError>,
) -> ApiResult<(StatusCode, Json<Article>)> {
    let JsonBody(request) = body.map_err(|e| match e {
        ApiError::BadRequest(detail) => {
            tracing::debug!(%detail, "Rejected create body");
            ApiError::BadRequest("Invalid Input".to_string())
        }
        other => other,
    })?;
    let request = request.unwrap_or_default();

    let article = state
        .store()
        .write()
        .await
        .create(request.title, request.content);

    tracing::info!(article_id = article.id, "Article created");

    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /articles/update/{id} - Replace title and content.
///
/// # Response
///
/// - 200 OK: the updated article
/// - 400 Bad Request: non-numeric id, or title/content missing or empty
/// - 404 Not Found: no article with this id
async fn update_article(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<JsonBody<UpdateArticleRequest>, ApiError>,
) -> ApiResult<Json<Article>> {
    let id: ArticleId = raw_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid ID".to_string()))?;

    let required = || ApiError::BadRequest("Invalid input: Title and Content are required".into());
    let (title, content) = match body {
        Ok(JsonBody(request)) => request.into_fields().ok_or_else(required)?,
        Err(ApiError::BadRequest(_)) => return Err(required()),
        Err(other) => return Err(other),
    };

    let article = state
        .store()
        .write()
        .await
        .update(id, title, content)
        .map_err(|e| match e {
            StoreError::NotFound(_) => ApiError::NotFound("Article not found".to_string()),
            other => ApiError::Store(other),
        })?;

    tracing::info!(article_id = article.id, "Article updated");

    Ok(Json(article))
}

/// GET /articles/search?keyword= - Case-insensitive keyword search.
///
/// # Response
///
/// - 200 OK: array of matching articles, possibly empty
async fn search_articles(
    State(state): State<AppState>,
    query: QueryParams,
) -> Json<Vec<Article>> {
    let keyword = query.get("keyword").unwrap_or_default();
    let articles = state.store().read().await.search(keyword);

    tracing::debug!(%keyword, count = articles.len(), "Searched articles");

    Json(articles)
}

/// GET /articles/get-all?page=&limit= - Paginated listing.
///
/// # Response
///
/// - 200 OK: `{ "page", "limit", "total", "totalPages", "articles" }`
/// - 400 Bad Request: page or limit non-numeric or below 1
async fn list_articles(
    State(state): State<AppState>,
    query: QueryParams,
) -> ApiResult<Json<Page>> {
    let page = parse_positive(query.get("page"), DEFAULT_PAGE, "Invalid page number")?;
    let limit = parse_positive(query.get("limit"), DEFAULT_LIMIT, "Invalid limit number")?;

    let (articles, total) = state.store().read().await.list_page(page, limit)?;

    tracing::debug!(page, limit, total, returned = articles.len(), "Listed articles");

    Ok(Json(Page::new(page, limit, articles, total)))
}

/// Build article routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/articles/create", post(create_article))
        .route("/articles/update/{id}", put(update_article))
        .route("/articles/search", get(search_articles))
        .route("/articles/get-all", get(list_articles))
}

// ============================================================================
// Tests
// ============================================================================
