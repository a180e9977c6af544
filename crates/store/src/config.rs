//! Store runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! engine. Request handling never reads process-wide environment variables,
//! which keeps behaviour consistent across multi-threaded runtimes and test
//! harnesses.

use crate::{DocumentError, DocumentResult};
use std::path::{Path, PathBuf};

/// Name of the index file kept directly under the root.
pub(crate) const INDEX_FILE_NAME: &str = ".index.json";

/// Name of the trash subtree kept directly under the root.
pub(crate) const TRASH_DIR_NAME: &str = ".deleted";

/// Store configuration resolved at startup.
///
/// Holds the root directory under which all document bytes, the index file
/// and the trash subtree live. The index file and trash directory carry
/// dot-prefixed names so they stay hidden from directory listings and from
/// the index rebuild scan.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    root: PathBuf,
}

impl StoreConfig {
    /// Create a new `StoreConfig` for the given root location.
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidRoot`] if the location is empty.
    pub fn new(root: impl Into<PathBuf>) -> DocumentResult<Self> {
        let root = root.into();
        if root.as_os_str().is_empty() {
            return Err(DocumentError::InvalidRoot(
                "root location cannot be empty".into(),
            ));
        }
        Ok(Self { root })
    }

    /// Base directory holding all live documents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the JSON index file.
    pub fn index_file(&self) -> PathBuf {
        self.root.join(INDEX_FILE_NAME)
    }

    /// Path of the hidden trash subtree.
    pub fn trash_dir(&self) -> PathBuf {
        self.root.join(TRASH_DIR_NAME)
    }
}
