//! Request and response shapes for the REST API.

use chrono::{DateTime, Utc};
use docshelf_store::Document;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: String,
}

/// Document metadata as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    /// Document identifier
    pub id: Uuid,
    /// File name without folder and extension
    pub name: String,
    /// Logical folder; empty string means the root
    pub folder: String,
    /// Document content type (extension)
    #[serde(rename = "type")]
    pub doc_type: String,
    /// When the document was first saved
    pub created_on: DateTime<Utc>,
    /// Last time the document was saved
    pub last_saved_on: DateTime<Utc>,
    /// Set when the document is in the trash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_on: Option<DateTime<Utc>>,
    /// Content size in characters
    pub size: usize,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        DocumentResponse {
            id: document.id,
            name: document.name,
            folder: document.folder,
            doc_type: document.doc_type,
            created_on: document.created_on,
            last_saved_on: document.last_saved_on,
            deleted_on: document.deleted_on,
            size: document.size,
        }
    }
}

/// Query parameters for document search. Folder and name allow `*`/`?`
/// wildcards, for example `rep*` or `not?s`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Folder to search in; all folders when absent
    pub folder: Option<String>,
    /// Document name to search for
    pub name: Option<String>,
    /// Also return documents in the trash
    pub include_deleted: Option<bool>,
}

/// Query parameters for document creation.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CreateParams {
    /// Folder where the document will be created
    pub folder: String,
    /// Name of the new document
    pub name: String,
    /// Document type (extension)
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Replace an existing non-empty document at the same location
    pub overwrite: Option<bool>,
}

/// Query parameters for renaming a document.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RenameParams {
    /// The document's new name
    pub new_name: String,
}

/// Query parameters for moving a document.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MoveParams {
    /// Folder the document will be moved into
    pub to_folder: String,
}

/// Query parameters for copying a document.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CopyParams {
    /// Optional name for the new document; `<source name> (copy)` by default
    pub name: Option<String>,
}
