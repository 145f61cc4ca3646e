//! Book HTTP Routes
//!
//! CRUD endpoints over the book collection. Path ids are parsed before the
//! body, so a malformed id is reported even when the body is also invalid.
//!
//! Bodies are read as raw bytes and decoded here, so a missing or foreign
//! `Content-Type` header does not change the outcome.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use crate::book::{Book, BookId, BookInput, PatchFields};
use crate::store::BookStore;

/// Shared state for book handlers
pub type BookState = Arc<BookStore>;

/// `{"message": ...}` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create book routes
pub fn book_routes(state: BookState) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .patch(patch_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

fn parse_id(raw: &str) -> ApiResult<BookId> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|_| ApiError::InvalidInput)
}

// ==================
// Handlers
// ==================

async fn list_books_handler(State(store): State<BookState>) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(store.list()?))
}

async fn get_book_handler(
    State(store): State<BookState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Book>> {
    let id = parse_id(&id)?;
    Ok(Json(store.get(id)?))
}

async fn create_book_handler(
    State(store): State<BookState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let input: BookInput = parse_body(&body)?;
    let book = store.create(input)?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book_handler(
    State(store): State<BookState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Book>> {
    let id = parse_id(&id)?;
    let input: BookInput = parse_body(&body)?;
    Ok(Json(store.replace(id, input)?))
}

async fn patch_book_handler(
    State(store): State<BookState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Book>> {
    let id = parse_id(&id)?;
    let fields: PatchFields = parse_body(&body)?;
    Ok(Json(store.patch(id, fields)?))
}

async fn delete_book_handler(
    State(store): State<BookState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    store.delete(id)?;
    Ok(Json(MessageResponse::new("Book deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Ok(12));
        assert_eq!(parse_id("-3"), Ok(-3));
        assert_eq!(parse_id("abc"), Err(ApiError::InvalidId));
        assert_eq!(parse_id("1.5"), Err(ApiError::InvalidId));
        assert_eq!(parse_id(""), Err(ApiError::InvalidId));
    }

    #[test]
    fn test_parse_body_rejects_garbage() {
        assert_eq!(parse_body::<BookInput>(b"not json").unwrap_err(), ApiError::InvalidInput);
        assert_eq!(parse_body::<BookInput>(b"").unwrap_err(), ApiError::InvalidInput);
        assert_eq!(
            parse_body::<PatchFields>(br#"["title"]"#).unwrap_err(),
            ApiError::InvalidInput
        );
    }
}
