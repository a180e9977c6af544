//! Trash-subtree path transforms.
//!
//! Soft delete is a physical move: the document's bytes are re-rooted under
//! the hidden trash directory and the file name gains an `@<timestamp>`
//! suffix so repeated delete/undelete cycles of same-named files never
//! collide. Restore reverses the transform exactly.
//!
//! Both directions are pure string transforms kept isolated here so the
//! suffix format can change without touching call sites. The round-trip law
//! (`from_trash_path(to_trash_path(p)) == p`) is enforced by tests.

use crate::{DocumentError, DocumentResult, StoreConfig};
use chrono::{DateTime, Utc};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Timestamp layout appended to trashed file names: UTC, second fields then
/// nanoseconds, digits only.
pub(crate) const TRASH_STAMP_FORMAT: &str = "%Y%m%d%H%M%S%f";

/// Computes the trash-subtree path for a live document path.
///
/// The live root is substituted with the trash directory and
/// `@<timestamp>` is appended to the file name.
///
/// # Errors
/// Returns [`DocumentError::TrashPathFormat`] if the path is not under the
/// root or has no UTF-8 file name.
pub fn to_trash_path(
    cfg: &StoreConfig,
    live_path: &Path,
    deleted_at: DateTime<Utc>,
) -> DocumentResult<PathBuf> {
    let relative = live_path
        .strip_prefix(cfg.root())
        .map_err(|_| DocumentError::TrashPathFormat(live_path.display().to_string()))?;
    let file_name = relative
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| DocumentError::TrashPathFormat(live_path.display().to_string()))?;

    let mut trashed = cfg.trash_dir().join(relative);
    trashed.set_file_name(format!(
        "{}@{}",
        file_name,
        deleted_at.format(TRASH_STAMP_FORMAT)
    ));
    Ok(trashed)
}

/// Reverses [`to_trash_path`]: strips the trailing `@<timestamp>` suffix and
/// substitutes the live root for the trash directory.
///
/// # Errors
/// Returns [`DocumentError::TrashPathFormat`] if the path is not under the
/// trash directory or its file name does not end in `@<digits>`. Unreachable
/// for paths produced by delete.
pub fn from_trash_path(cfg: &StoreConfig, trash_path: &Path) -> DocumentResult<PathBuf> {
    let format_error = || DocumentError::TrashPathFormat(trash_path.display().to_string());

    let relative = trash_path
        .strip_prefix(cfg.trash_dir())
        .map_err(|_| format_error())?;
    let file_name = relative
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(format_error)?;

    let (original_name, stamp) = file_name.rsplit_once('@').ok_or_else(format_error)?;
    if original_name.is_empty() || stamp.is_empty() || !stamp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format_error());
    }

    let mut restored = cfg.root().join(relative);
    restored.set_file_name(original_name);
    Ok(restored)
}
