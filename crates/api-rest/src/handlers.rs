//! REST request handlers for document operations.

use crate::dto::{
    CopyParams, CreateParams, DocumentResponse, HealthResponse, MoveParams, RenameParams,
    SearchParams,
};
use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthResponse)
    )
)]
/// Health check endpoint
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub(crate) async fn health(State(_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        message: "docshelf REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/documents",
    params(SearchParams),
    responses(
        (status = 200, description = "List of found documents", body = [DocumentResponse]),
        (status = 500, description = "Internal server error")
    )
)]
/// Search for documents
///
/// Both `folder` and `name` allow wildcards, for example `mydocs` with
/// `ref*`. Omitted parameters impose no filter.
#[axum::debug_handler]
pub(crate) async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<DocumentResponse>>, ApiError> {
    let documents = state.store.search(
        params.folder.as_deref().unwrap_or(""),
        params.name.as_deref().unwrap_or(""),
        params.include_deleted.unwrap_or(false),
    )?;
    Ok(Json(
        documents.into_iter().map(DocumentResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/documents/{id}",
    params(("id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document information", body = DocumentResponse),
        (status = 404, description = "Document not found"),
        (status = 400, description = "Bad request")
    )
)]
/// Retrieves information about a document
#[axum::debug_handler]
pub(crate) async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let document = state.store.get(id)?;
    Ok(Json(document.into()))
}

#[utoipa::path(
    get,
    path = "/documents/{id}/content",
    params(("id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 200, description = "Raw content of the document", body = String),
        (status = 404, description = "Document not found"),
        (status = 400, description = "Bad request")
    )
)]
/// Retrieves the current content of a document
#[axum::debug_handler]
pub(crate) async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, ApiError> {
    Ok(state.store.load_content(id)?)
}

#[utoipa::path(
    post,
    path = "/documents/{id}/content",
    params(("id" = Uuid, Path, description = "Document id")),
    request_body = String,
    responses(
        (status = 200, description = "Content saved"),
        (status = 404, description = "Document not found"),
        (status = 400, description = "Bad request")
    )
)]
/// Updates the content of a document
#[axum::debug_handler]
pub(crate) async fn save_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    content: String,
) -> Result<StatusCode, ApiError> {
    state.store.save_content(id, &content)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/documents",
    params(CreateParams),
    request_body = String,
    responses(
        (status = 201, description = "Document created", body = DocumentResponse),
        (status = 400, description = "Bad request")
    )
)]
/// Creates a new document
///
/// The request body carries the optional initial content.
#[axum::debug_handler]
pub(crate) async fn create(
    State(state): State<AppState>,
    Query(params): Query<CreateParams>,
    content: String,
) -> Result<(StatusCode, Json<DocumentResponse>), ApiError> {
    let document = state.store.create(
        &params.folder,
        &params.name,
        &params.doc_type,
        &content,
        params.overwrite.unwrap_or(false),
    )?;
    Ok((StatusCode::CREATED, Json(document.into())))
}

#[utoipa::path(
    delete,
    path = "/documents/{id}",
    params(("id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document marked as deleted"),
        (status = 404, description = "Document not found")
    )
)]
/// Marks a document as deleted
#[axum::debug_handler]
pub(crate) async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    put,
    path = "/documents/{id}/undelete",
    params(("id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document restored"),
        (status = 404, description = "Document not found")
    )
)]
/// Restores a previously deleted document
#[axum::debug_handler]
pub(crate) async fn undelete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.undelete(id)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    put,
    path = "/documents/{id}/rename",
    params(("id" = Uuid, Path, description = "Document id"), RenameParams),
    responses(
        (status = 200, description = "Document renamed"),
        (status = 404, description = "Document not found"),
        (status = 400, description = "Bad request")
    )
)]
/// Changes the name of a document
#[axum::debug_handler]
pub(crate) async fn rename(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<RenameParams>,
) -> Result<StatusCode, ApiError> {
    state.store.rename(id, &params.new_name)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/documents/{id}/move",
    params(("id" = Uuid, Path, description = "Document id"), MoveParams),
    responses(
        (status = 200, description = "Document moved"),
        (status = 404, description = "Document not found"),
        (status = 400, description = "Bad request")
    )
)]
/// Moves a document to another folder
#[axum::debug_handler]
pub(crate) async fn move_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<MoveParams>,
) -> Result<StatusCode, ApiError> {
    state.store.move_to(id, &params.to_folder)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/documents/{id}/create-copy",
    params(("id" = Uuid, Path, description = "Document id"), CopyParams),
    responses(
        (status = 201, description = "Newly created document", body = DocumentResponse),
        (status = 404, description = "Document not found"),
        (status = 400, description = "Bad request")
    )
)]
/// Creates a new document copying all data (including content) from another
/// document
#[axum::debug_handler]
pub(crate) async fn create_copy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<CopyParams>,
) -> Result<(StatusCode, Json<DocumentResponse>), ApiError> {
    let document = state.store.create_copy(id, params.name.as_deref())?;
    Ok((StatusCode::CREATED, Json(document.into())))
}
