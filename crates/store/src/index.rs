//! The index store: ownership and lifecycle of the JSON index file.
//!
//! [`IndexStore`] is the explicit lifecycle object guarding the index — it is
//! constructed once per process, injected into the engine, and never exposed
//! as a bare global. Every load → mutate → save cycle runs behind a single
//! process-local mutex so a mutation can never observe a snapshot that a
//! concurrent mutation is about to overwrite.
//!
//! Locking is process-local only: multiple service instances sharing one root
//! directory are not safely handled.

use crate::document::{DocumentRecord, Index};
use crate::{DocumentError, DocumentResult, StoreConfig};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Owns the JSON index file and serializes access to it.
#[derive(Debug)]
pub struct IndexStore {
    cfg: StoreConfig,
    lock: Mutex<()>,
}

impl IndexStore {
    /// Creates a store for the given configuration. No I/O happens until
    /// [`IndexStore::init`] runs.
    pub fn new(cfg: StoreConfig) -> Self {
        Self {
            cfg,
            lock: Mutex::new(()),
        }
    }

    /// Ensures a valid index exists before the service starts.
    ///
    /// Creates the root directory, rebuilds the index from the file tree if
    /// the index file is absent, and ensures the hidden trash subtree exists.
    /// The rebuild runs under the same lock as every other index cycle, so
    /// concurrent startup cannot race.
    ///
    /// Rebuild synthesizes a fresh record per discovered file — new
    /// identifier, filesystem timestamps, byte length as size. Previously
    /// assigned identifiers are not recovered.
    ///
    /// # Errors
    /// Any I/O or serialization failure; all are internal faults.
    pub fn init(&self) -> DocumentResult<()> {
        fs::create_dir_all(self.cfg.root()).map_err(DocumentError::StorageDirCreation)?;

        {
            let _guard = self.guard();
            if !self.cfg.index_file().exists() {
                tracing::info!(
                    "index file missing, rebuilding from {}",
                    self.cfg.root().display()
                );
                let index = self.scan_tree()?;
                self.save(&index)?;
            }
        }

        fs::create_dir_all(self.cfg.trash_dir()).map_err(DocumentError::StorageDirCreation)
    }

    /// Reads and deserializes the whole index file.
    ///
    /// # Errors
    /// Fails if the file is missing or malformed — which must not happen once
    /// [`IndexStore::init`] has succeeded.
    pub fn load(&self) -> DocumentResult<Index> {
        let json = fs::read_to_string(self.cfg.index_file()).map_err(DocumentError::IndexRead)?;
        serde_json::from_str(&json).map_err(DocumentError::IndexDeserialize)
    }

    /// Serializes and overwrites the index file in full.
    pub fn save(&self, index: &Index) -> DocumentResult<()> {
        let json = serde_json::to_string_pretty(index).map_err(DocumentError::IndexSerialize)?;
        fs::write(self.cfg.index_file(), json).map_err(DocumentError::IndexWrite)
    }

    /// Runs `f` against a consistent snapshot of the index, under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Index) -> DocumentResult<R>) -> DocumentResult<R> {
        let _guard = self.guard();
        let index = self.load()?;
        f(&index)
    }

    /// Runs a guarded load → mutate → save cycle.
    ///
    /// The index is persisted only when `f` succeeds; on error the on-disk
    /// index is left as it was. Physical file operations belonging to the
    /// mutation run inside `f`, so they are serialized with the index write.
    pub fn update<R>(&self, f: impl FnOnce(&mut Index) -> DocumentResult<R>) -> DocumentResult<R> {
        let _guard = self.guard();
        let mut index = self.load()?;
        let result = f(&mut index)?;
        self.save(&index)?;
        Ok(result)
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // A poisoned lock only means another thread panicked mid-cycle; the
        // on-disk index is still the authoritative state.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn scan_tree(&self) -> DocumentResult<Index> {
        let mut index = Index::new();
        self.scan_dir(self.cfg.root(), &mut index)?;
        tracing::info!("rebuilt index with {} document(s)", index.len());
        Ok(index)
    }

    fn scan_dir(&self, dir: &Path, index: &mut Index) -> DocumentResult<()> {
        for entry in fs::read_dir(dir).map_err(DocumentError::TreeScan)? {
            let entry = entry.map_err(DocumentError::TreeScan)?;
            let path = entry.path();

            // Dot-prefixed entries cover the index file and the trash
            // subtree; non-UTF-8 names are skipped with them.
            let hidden = entry
                .file_name()
                .to_str()
                .map_or(true, |name| name.starts_with('.'));
            if hidden {
                continue;
            }

            let file_type = entry.file_type().map_err(DocumentError::TreeScan)?;
            if file_type.is_dir() {
                self.scan_dir(&path, index)?;
            } else if file_type.is_file() {
                match self.record_from_file(&path) {
                    Some(record) => {
                        index.insert(record.id, record);
                    }
                    None => {
                        tracing::warn!("skipping unreadable entry: {}", path.display());
                    }
                }
            }
        }
        Ok(())
    }

    /// Synthesizes a record for a file discovered during rebuild.
    fn record_from_file(&self, path: &Path) -> Option<DocumentRecord> {
        let location = self.cfg.logical_from_physical(path)?;
        let metadata = fs::metadata(path).ok()?;

        let last_saved_on = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());
        let created_on = metadata
            .created()
            .map(DateTime::<Utc>::from)
            .unwrap_or(last_saved_on);

        Some(DocumentRecord {
            id: Uuid::new_v4(),
            name: location.name,
            folder: location.folder,
            doc_type: location.doc_type,
            created_on,
            last_saved_on,
            deleted_on: None,
            size: metadata.len() as usize,
            full_path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> IndexStore {
        let cfg = StoreConfig::new(temp.path().join("documents")).unwrap();
        IndexStore::new(cfg)
    }

    #[test]
    fn init_creates_root_trash_and_empty_index() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.init().unwrap();

        let root = temp.path().join("documents");
        assert!(root.is_dir());
        assert!(root.join(".deleted").is_dir());
        assert!(root.join(".index.json").is_file());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn rebuild_indexes_every_preexisting_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("documents");
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a/report.txt"), "content").unwrap();
        fs::write(root.join("readme.md"), "hi").unwrap();

        let store = store_in(&temp);
        store.init().unwrap();

        let index = store.load().unwrap();
        assert_eq!(index.len(), 2);

        let report = index
            .values()
            .find(|r| r.name == "report")
            .expect("report indexed");
        assert_eq!(report.folder, "a");
        assert_eq!(report.doc_type, "txt");
        assert_eq!(report.size, 7);
        assert!(report.deleted_on.is_none());
        assert_eq!(report.full_path, root.join("a/report.txt"));

        let readme = index
            .values()
            .find(|r| r.name == "readme")
            .expect("readme indexed");
        assert_eq!(readme.folder, "");
        assert_eq!(readme.doc_type, "md");

        assert_ne!(report.id, readme.id);
    }

    #[test]
    fn rebuild_skips_hidden_entries() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("documents");
        fs::create_dir_all(root.join(".deleted")).unwrap();
        fs::write(root.join(".deleted/old.txt@20240101000000000000000"), "x").unwrap();
        fs::write(root.join(".hidden"), "x").unwrap();
        fs::write(root.join("visible.txt"), "x").unwrap();

        let store = store_in(&temp);
        store.init().unwrap();

        let index = store.load().unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.values().next().unwrap().name, "visible");
    }

    #[test]
    fn init_leaves_an_existing_index_alone() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.init().unwrap();

        // Populate the index, then add a stray file; a second init must not
        // trigger a rebuild.
        let root = temp.path().join("documents");
        fs::write(root.join("stray.txt"), "x").unwrap();
        store.init().unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.init().unwrap();

        let record = DocumentRecord {
            id: Uuid::new_v4(),
            name: "report".into(),
            folder: "notes".into(),
            doc_type: "txt".into(),
            created_on: Utc::now(),
            last_saved_on: Utc::now(),
            deleted_on: None,
            size: 3,
            full_path: temp.path().join("documents/notes/report.txt"),
        };
        let mut index = Index::new();
        index.insert(record.id, record.clone());
        store.save(&index).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[&record.id], record);
    }

    #[test]
    fn update_persists_only_on_success() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.init().unwrap();

        let id = Uuid::new_v4();
        let failed: DocumentResult<()> = store.update(|index| {
            index.insert(
                id,
                DocumentRecord {
                    id,
                    name: "ghost".into(),
                    folder: "".into(),
                    doc_type: "txt".into(),
                    created_on: Utc::now(),
                    last_saved_on: Utc::now(),
                    deleted_on: None,
                    size: 0,
                    full_path: temp.path().join("documents/ghost.txt"),
                },
            );
            Err(DocumentError::NotFound(id))
        });
        assert!(failed.is_err());
        assert!(store.load().unwrap().is_empty());
    }
}
