//! User-supplied name validation.
//!
//! Applied to every name and folder argument before any filesystem mutation.
//! Path separators are rejected outright, so folders created through the API
//! are always single-segment; nested folders can still enter the index via
//! the rebuild scan.

use crate::{DocumentError, DocumentResult};

/// Characters that are never allowed in a document or folder name.
pub(crate) const INVALID_NAME_CHARS: [char; 3] = ['/', '\\', '\0'];

/// Checks that `value` is usable as a file or folder name component.
///
/// # Errors
/// Returns [`DocumentError::InvalidName`] when the value is empty or contains
/// a path separator or NUL.
pub fn check_name(value: &str) -> DocumentResult<()> {
    if value.is_empty() || value.contains(INVALID_NAME_CHARS) {
        return Err(DocumentError::InvalidName(value.to_owned()));
    }
    Ok(())
}

/// Checks that `value` is usable as a document type (file extension).
///
/// Unlike names, an empty type is allowed and means the document carries no
/// extension.
///
/// # Errors
/// Returns [`DocumentError::InvalidName`] when the value contains a path
/// separator or NUL.
pub fn check_type(value: &str) -> DocumentResult<()> {
    if value.contains(INVALID_NAME_CHARS) {
        return Err(DocumentError::InvalidName(value.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass() {
        assert!(check_name("report").is_ok());
        assert!(check_name("report v1.2").is_ok());
        assert!(check_name("notes-2024 (draft)").is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(check_name(""), Err(DocumentError::InvalidName(_))));
    }

    #[test]
    fn path_separators_are_rejected() {
        assert!(matches!(
            check_name("a/b"),
            Err(DocumentError::InvalidName(_))
        ));
        assert!(matches!(
            check_name("a\\b"),
            Err(DocumentError::InvalidName(_))
        ));
    }

    #[test]
    fn empty_type_passes_but_separators_do_not() {
        assert!(check_type("").is_ok());
        assert!(check_type("txt").is_ok());
        assert!(matches!(
            check_type("x/y"),
            Err(DocumentError::InvalidName(_))
        ));
        assert!(matches!(
            check_type("x\\y"),
            Err(DocumentError::InvalidName(_))
        ));
    }

    #[test]
    fn nul_is_rejected() {
        assert!(matches!(
            check_name("a\0b"),
            Err(DocumentError::InvalidName(_))
        ));
    }
}
