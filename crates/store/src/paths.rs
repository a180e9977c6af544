//! Logical ↔ physical path translation.
//!
//! Maps a (folder, name, type) triple to a file path under the root and back.
//! Pure path construction — no I/O and no existence checks.

use crate::StoreConfig;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Logical attributes recovered from a physical path during index rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLocation {
    /// File name without folder and extension
    pub name: String,
    /// Path segment between the root and the file name; empty at the root
    pub folder: String,
    /// Extension without the leading dot; empty when there is none
    pub doc_type: String,
}

impl StoreConfig {
    /// Computes the physical file path for a logical (folder, name, type)
    /// triple.
    ///
    /// The type is applied as the file extension and replaces any extension
    /// the name itself carries, so `("a", "report.old", "txt")` maps to
    /// `<root>/a/report.txt`.
    pub fn physical_path(&self, folder: &str, name: &str, doc_type: &str) -> PathBuf {
        let mut path = if folder.is_empty() {
            self.root().join(name)
        } else {
            self.root().join(folder).join(name)
        };
        let doc_type = doc_type.trim_start_matches('.');
        if !doc_type.is_empty() {
            path.set_extension(doc_type);
        }
        path
    }

    /// Recovers the logical attributes of a file under the root.
    ///
    /// Used only during index rebuild. Returns `None` when the path is not
    /// under the root or a component is not valid UTF-8; the rebuild scan
    /// logs and skips such entries.
    pub fn logical_from_physical(&self, path: &Path) -> Option<LogicalLocation> {
        let relative = path.strip_prefix(self.root()).ok()?;
        let name = path.file_stem()?.to_str()?.to_owned();
        let doc_type = path
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .to_owned();
        let folder = relative
            .parent()
            .and_then(Path::to_str)?
            .to_owned();
        Some(LogicalLocation {
            name,
            folder,
            doc_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> StoreConfig {
        StoreConfig::new("/srv/documents").unwrap()
    }

    #[test]
    fn physical_path_joins_folder_name_and_type() {
        assert_eq!(
            cfg().physical_path("notes", "report", "txt"),
            PathBuf::from("/srv/documents/notes/report.txt")
        );
    }

    #[test]
    fn empty_folder_maps_to_root() {
        assert_eq!(
            cfg().physical_path("", "report", "txt"),
            PathBuf::from("/srv/documents/report.txt")
        );
    }

    #[test]
    fn empty_type_leaves_the_name_bare() {
        assert_eq!(
            cfg().physical_path("notes", "report", ""),
            PathBuf::from("/srv/documents/notes/report")
        );
    }

    #[test]
    fn type_replaces_an_existing_extension() {
        assert_eq!(
            cfg().physical_path("notes", "report.old", "txt"),
            PathBuf::from("/srv/documents/notes/report.txt")
        );
    }

    #[test]
    fn leading_dot_on_type_is_tolerated() {
        assert_eq!(
            cfg().physical_path("notes", "report", ".txt"),
            PathBuf::from("/srv/documents/notes/report.txt")
        );
    }

    #[test]
    fn logical_from_physical_inverts_the_mapping() {
        let cfg = cfg();
        let path = cfg.physical_path("notes", "report", "txt");
        let location = cfg.logical_from_physical(&path).unwrap();
        assert_eq!(
            location,
            LogicalLocation {
                name: "report".into(),
                folder: "notes".into(),
                doc_type: "txt".into(),
            }
        );
    }

    #[test]
    fn root_level_file_has_empty_folder() {
        let location = cfg()
            .logical_from_physical(Path::new("/srv/documents/readme.md"))
            .unwrap();
        assert_eq!(location.folder, "");
        assert_eq!(location.name, "readme");
        assert_eq!(location.doc_type, "md");
    }

    #[test]
    fn nested_folder_is_preserved() {
        let location = cfg()
            .logical_from_physical(Path::new("/srv/documents/a/b/report.txt"))
            .unwrap();
        assert_eq!(location.folder, "a/b");
    }

    #[test]
    fn path_outside_root_is_rejected() {
        assert!(cfg()
            .logical_from_physical(Path::new("/elsewhere/report.txt"))
            .is_none());
    }
}
