//! docshelf REST API
//!
//! Thin HTTP adapter over the [`docshelf_store`] engine: routing, parameter
//! parsing, status-code mapping and OpenAPI documentation. No storage logic
//! lives here.

mod dto;
mod error;
mod handlers;

pub use dto::{DocumentResponse, HealthResponse};
pub use error::ApiError;

use axum::routing::{get, post, put};
use axum::Router;
use docshelf_store::DocumentStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::search,
        handlers::create,
        handlers::get_by_id,
        handlers::get_content,
        handlers::save_content,
        handlers::delete_document,
        handlers::undelete,
        handlers::rename,
        handlers::move_document,
        handlers::create_copy,
    ),
    components(schemas(dto::HealthResponse, dto::DocumentResponse))
)]
struct ApiDoc;

/// Builds the REST router with all document routes, Swagger UI and a
/// permissive CORS layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/documents", get(handlers::search).post(handlers::create))
        .route(
            "/documents/:id",
            get(handlers::get_by_id).delete(handlers::delete_document),
        )
        .route(
            "/documents/:id/content",
            get(handlers::get_content).post(handlers::save_content),
        )
        .route("/documents/:id/undelete", put(handlers::undelete))
        .route("/documents/:id/rename", put(handlers::rename))
        .route("/documents/:id/move", post(handlers::move_document))
        .route("/documents/:id/create-copy", post(handlers::create_copy))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
