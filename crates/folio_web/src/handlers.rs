use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_core::{ArticleHeader, Error};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleBody {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Status {
    pub articles: usize,
    pub in_flight: usize,
    pub finished: bool,
}

/// Maps pipeline errors onto HTTP responses.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Http(_) | Error::External(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status != StatusCode::NOT_FOUND {
            warn!("⚠️ Request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Json<Vec<ArticleHeader>> {
    Json(state.fetcher.snapshot())
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Json<ArticleHeader>, ApiError> {
    Ok(Json(find(&state, &title)?))
}

pub async fn get_article_body(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Json<ArticleBody>, ApiError> {
    let article = find(&state, &title)?;
    let content = state.fetcher.fetch_body(&article.path).await?;
    Ok(Json(ArticleBody {
        path: article.path,
        content,
    }))
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<Status> {
    Json(Status {
        articles: state.fetcher.collection().len(),
        in_flight: state.fetcher.in_flight(),
        finished: state.fetcher.is_finished(),
    })
}

fn find(state: &AppState, title: &str) -> Result<ArticleHeader, Error> {
    state
        .fetcher
        .collection()
        .find_by_title(title)
        .ok_or_else(|| Error::NotFound(format!("article {:?}", title)))
}
