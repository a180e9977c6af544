//! docshelf document store
//!
//! This crate implements the document index and file-store consistency engine
//! behind docshelf: an identifier-keyed index of document metadata kept
//! synchronized with a hierarchical file tree across create, rename, move,
//! delete and undelete operations.
//!
//! ## Storage Layout
//!
//! All state lives under a single root directory:
//!
//! ```text
//! <root>/
//! ├── .index.json          # identifier → record mapping, the source of truth
//! ├── .deleted/            # trash subtree, mirrors the live tree
//! │   └── <folder>/
//! │       └── <name>.<type>@<timestamp>
//! └── <folder>/
//!     └── <name>.<type>    # live document bytes
//! ```
//!
//! ## Consistency Model
//!
//! - The index file is the single source of truth for which identifiers exist
//!   and where their bytes live.
//! - Every mutation is a full load → mutate → save cycle, serialized behind a
//!   process-local lock inside [`IndexStore`]; physical file operations happen
//!   inside the same cycle so a failed move never leaves a persisted record
//!   pointing at nothing.
//! - If the index file is missing at startup it is rebuilt from the file tree,
//!   minting fresh identifiers (see [`IndexStore::init`]).
//! - Delete is soft: bytes move into the hidden trash subtree under a
//!   timestamp-suffixed name and move back on undelete. Records are never
//!   removed from the index.
//!
//! **No API concerns**: HTTP routing, status-code mapping and process
//! configuration belong in `api-rest` and the server binary.

mod config;
mod document;
mod index;
mod paths;
mod search;
mod store;
mod trash;
mod validate;

pub use config::StoreConfig;
pub use document::{Document, DocumentRecord, Index};
pub use index::IndexStore;
pub use paths::LogicalLocation;
pub use store::DocumentStore;
pub use trash::{from_trash_path, to_trash_path};
pub use validate::{check_name, check_type};

/// Errors that can occur during document operations.
///
/// The first group is user-facing (bad input or a missing document); callers
/// map those to client errors. Everything else is an internal fault and must
/// not be interpreted as user error.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// No record exists for the identifier
    #[error("document \"{0}\" not found")]
    NotFound(uuid::Uuid),
    /// Name or folder argument is empty or contains an illegal character
    #[error("\"{0}\" is not a valid file name")]
    InvalidName(String),
    /// A non-empty document already occupies the target path
    #[error("a document named \"{0}\" already exists")]
    AlreadyExists(String),
    /// A stored trash path does not match the expected suffixed pattern
    #[error("document internal path is not in the correct format: {0}")]
    TrashPathFormat(String),
    /// The configured root location is unusable
    #[error("invalid root location: {0}")]
    InvalidRoot(String),

    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to read index file: {0}")]
    IndexRead(std::io::Error),
    #[error("failed to write index file: {0}")]
    IndexWrite(std::io::Error),
    #[error("failed to deserialize index: {0}")]
    IndexDeserialize(serde_json::Error),
    #[error("failed to serialize index: {0}")]
    IndexSerialize(serde_json::Error),
    #[error("failed to read document file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write document file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to move document file: {0}")]
    FileMove(std::io::Error),
    #[error("failed to scan document tree: {0}")]
    TreeScan(std::io::Error),
}

/// Result type for document operations.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;
