//! # Bookshelf HTTP Server Module
//!
//! Axum server exposing the book collection as REST-over-JSON.
//!
//! # Endpoints
//!
//! - `GET /ping` - Health check
//! - `GET|POST /books` - List and create
//! - `GET|PUT|PATCH|DELETE /books/:id` - Single-book operations

pub mod book_routes;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
