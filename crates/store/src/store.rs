//! The document engine.
//!
//! [`DocumentStore`] implements every document operation by composing the
//! index store, the path translator and the trash transforms, performing the
//! matching physical file operations inside the guarded index cycle so a
//! persisted record never points at a file that failed to materialize.

use crate::document::{Document, DocumentRecord};
use crate::search::matches_filter;
use crate::validate::{check_name, check_type};
use crate::{trash, DocumentError, DocumentResult, IndexStore, StoreConfig};
use chrono::Utc;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;
use uuid::Uuid;

/// The document engine: one instance per process, shared across request
/// handlers.
///
/// Constructed through [`DocumentStore::open`], which runs the index
/// lifecycle's `init` exactly once. All operations take `&self`; index
/// serialization lives inside the injected [`IndexStore`].
#[derive(Debug)]
pub struct DocumentStore {
    cfg: StoreConfig,
    index: IndexStore,
}

impl DocumentStore {
    /// Opens the store: ensures the root, index file and trash subtree exist,
    /// rebuilding the index from the file tree when absent.
    ///
    /// # Errors
    /// Propagates any [`IndexStore::init`] failure; the service must not
    /// start serving requests in that case.
    pub fn open(cfg: StoreConfig) -> DocumentResult<Self> {
        let index = IndexStore::new(cfg.clone());
        index.init()?;
        Ok(Self { cfg, index })
    }

    /// The configuration this store was opened with.
    pub fn config(&self) -> &StoreConfig {
        &self.cfg
    }

    /// Returns the document's metadata.
    ///
    /// Metadata trust is by index: the underlying file is not checked.
    ///
    /// # Errors
    /// [`DocumentError::NotFound`] when the identifier has no record.
    pub fn get(&self, id: Uuid) -> DocumentResult<Document> {
        Ok(Document::from(&self.lookup(id)?))
    }

    /// Searches the index by folder and name.
    ///
    /// Records whose deleted-state does not match `include_deleted` are
    /// dropped first (false = live only). A non-empty `folder` or `pattern`
    /// then filters its axis: case-insensitive substring containment, or a
    /// glob expression when the argument contains `*` or `?`. Results come
    /// back in index iteration order.
    pub fn search(
        &self,
        folder: &str,
        pattern: &str,
        include_deleted: bool,
    ) -> DocumentResult<Vec<Document>> {
        self.index.read(|index| {
            Ok(index
                .values()
                .filter(|record| include_deleted || record.deleted_on.is_none())
                .filter(|record| folder.is_empty() || matches_filter(&record.folder, folder))
                .filter(|record| pattern.is_empty() || matches_filter(&record.name, pattern))
                .map(Document::from)
                .collect())
        })
    }

    /// Creates a new document and writes its content.
    ///
    /// A file already present at the computed path fails the operation unless
    /// it is empty or `overwrite` is set; an existing empty file is always
    /// overwritable. The new record's timestamps are set to now and its size
    /// to the character count of `content`.
    ///
    /// # Errors
    /// [`DocumentError::InvalidName`] for a bad folder, name or type (the
    /// folder must be a non-empty single segment; the type may be empty but
    /// never contains separators), [`DocumentError::AlreadyExists`] on
    /// conflict, otherwise internal I/O faults.
    pub fn create(
        &self,
        folder: &str,
        name: &str,
        doc_type: &str,
        content: &str,
        overwrite: bool,
    ) -> DocumentResult<Document> {
        check_name(folder)?;
        check_name(name)?;
        check_type(doc_type)?;

        let full_path = self.cfg.physical_path(folder, name, doc_type);

        self.index.update(|index| {
            let existing_len = fs::metadata(&full_path).map(|m| m.len()).unwrap_or(0);
            if existing_len > 0 && !overwrite {
                let shown = full_path.strip_prefix(self.cfg.root()).unwrap_or(&full_path);
                return Err(DocumentError::AlreadyExists(shown.display().to_string()));
            }

            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).map_err(DocumentError::StorageDirCreation)?;
            }
            fs::write(&full_path, content).map_err(DocumentError::FileWrite)?;

            let now = Utc::now();
            let record = DocumentRecord {
                id: Uuid::new_v4(),
                name: name.to_owned(),
                folder: folder.to_owned(),
                doc_type: doc_type.to_owned(),
                created_on: now,
                last_saved_on: now,
                deleted_on: None,
                size: content.chars().count(),
                full_path: full_path.clone(),
            };
            let document = Document::from(&record);
            index.insert(record.id, record);
            Ok(document)
        })
    }

    /// Reads the document's content as text.
    ///
    /// Content I/O is not serialized with index mutations; concurrent
    /// readers and writers of the same file race at the filesystem level.
    ///
    /// # Errors
    /// [`DocumentError::NotFound`] for an unknown identifier, otherwise
    /// internal read faults.
    pub fn load_content(&self, id: Uuid) -> DocumentResult<String> {
        let record = self.lookup(id)?;
        fs::read_to_string(&record.full_path).map_err(DocumentError::FileRead)
    }

    /// Overwrites the document's content.
    ///
    /// The record's `last_saved_on` and `size` fields are left untouched.
    ///
    /// # Errors
    /// [`DocumentError::NotFound`] for an unknown identifier, otherwise
    /// internal write faults.
    pub fn save_content(&self, id: Uuid, content: &str) -> DocumentResult<()> {
        let record = self.lookup(id)?;
        fs::write(&record.full_path, content).map_err(DocumentError::FileWrite)
    }

    /// Changes the document's logical name.
    ///
    /// The file on disk keeps its current name; only the index entry changes.
    ///
    /// # Errors
    /// [`DocumentError::InvalidName`], [`DocumentError::NotFound`].
    pub fn rename(&self, id: Uuid, new_name: &str) -> DocumentResult<()> {
        check_name(new_name)?;

        self.index.update(|index| {
            let record = index.get_mut(&id).ok_or(DocumentError::NotFound(id))?;
            record.name = new_name.to_owned();
            Ok(())
        })
    }

    /// Moves the document to another folder.
    ///
    /// The new physical path is computed from the document's current logical
    /// name and type, so a previously renamed document also converges back to
    /// its logical name on disk. The move never overwrites an existing file.
    /// A soft-deleted document's bytes are relocated out of the trash while
    /// the record stays marked deleted.
    ///
    /// # Errors
    /// [`DocumentError::InvalidName`], [`DocumentError::NotFound`]; an
    /// occupied destination surfaces as an internal move fault.
    pub fn move_to(&self, id: Uuid, new_folder: &str) -> DocumentResult<()> {
        check_name(new_folder)?;

        self.index.update(|index| {
            let record = index.get_mut(&id).ok_or(DocumentError::NotFound(id))?;
            let new_path = self
                .cfg
                .physical_path(new_folder, &record.name, &record.doc_type);

            move_file(&record.full_path, &new_path)?;

            record.folder = new_folder.to_owned();
            record.full_path = new_path;
            Ok(())
        })
    }

    /// Soft-deletes the document: moves its bytes into the trash subtree
    /// under a timestamp-suffixed name and stamps `deleted_on`.
    ///
    /// Deleting an already-deleted document is a no-op.
    ///
    /// # Errors
    /// [`DocumentError::NotFound`], otherwise internal move faults.
    pub fn delete(&self, id: Uuid) -> DocumentResult<()> {
        self.index.update(|index| {
            let record = index.get_mut(&id).ok_or(DocumentError::NotFound(id))?;
            if record.deleted_on.is_some() {
                return Ok(());
            }

            let deleted_at = Utc::now();
            let trashed = trash::to_trash_path(&self.cfg, &record.full_path, deleted_at)?;
            move_file(&record.full_path, &trashed)?;

            record.full_path = trashed;
            record.deleted_on = Some(deleted_at);
            Ok(())
        })
    }

    /// Restores a soft-deleted document to its pre-delete path.
    ///
    /// Undeleting a live document is a no-op.
    ///
    /// # Errors
    /// [`DocumentError::NotFound`]; [`DocumentError::TrashPathFormat`] when
    /// the stored trash path does not match the expected suffixed pattern
    /// (unreachable given delete's contract); otherwise internal move faults.
    pub fn undelete(&self, id: Uuid) -> DocumentResult<()> {
        self.index.update(|index| {
            let record = index.get_mut(&id).ok_or(DocumentError::NotFound(id))?;
            if record.deleted_on.is_none() {
                return Ok(());
            }

            let restored = trash::from_trash_path(&self.cfg, &record.full_path)?;
            move_file(&record.full_path, &restored)?;

            record.full_path = restored;
            record.deleted_on = None;
            Ok(())
        })
    }

    /// Creates a new document with the source document's folder, type and
    /// content.
    ///
    /// Without `copy_name` the new document is named `<source name> (copy)`.
    /// A soft-deleted source is permitted; its trashed bytes are read as-is.
    ///
    /// # Errors
    /// [`DocumentError::NotFound`] for the source, plus anything
    /// [`DocumentStore::create`] raises for the copy.
    pub fn create_copy(&self, id: Uuid, copy_name: Option<&str>) -> DocumentResult<Document> {
        let source = self.lookup(id)?;
        let new_name = copy_name
            .map(str::to_owned)
            .unwrap_or_else(|| format!("{} (copy)", source.name));
        check_name(&new_name)?;

        let content = fs::read_to_string(&source.full_path).map_err(DocumentError::FileRead)?;
        self.create(&source.folder, &new_name, &source.doc_type, &content, false)
    }

    fn lookup(&self, id: Uuid) -> DocumentResult<DocumentRecord> {
        self.index.read(|index| {
            index
                .get(&id)
                .cloned()
                .ok_or(DocumentError::NotFound(id))
        })
    }
}

/// Moves a file without overwriting, creating destination parents first.
fn move_file(from: &Path, to: &Path) -> DocumentResult<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(DocumentError::StorageDirCreation)?;
    }
    if to.exists() {
        return Err(DocumentError::FileMove(io::Error::new(
            ErrorKind::AlreadyExists,
            format!("destination already exists: {}", to.display()),
        )));
    }
    fs::rename(from, to).map_err(DocumentError::FileMove)
}
