//! Document metadata types and the persisted index mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use uuid::Uuid;

/// Document metadata as exposed to clients.
///
/// The logical view of a document: where it lives in the folder hierarchy and
/// when it was touched, without any physical storage details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Opaque unique identifier, never reused
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
    /// Set when the document has been sent to the trash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_on: Option<DateTime<Utc>>,
    /// Content size in characters
    pub size: usize,
}

/// Internal per-document record persisted in the index.
///
/// Carries the same logical fields as [`Document`] plus the document's current
/// absolute physical path. The physical path is the only field distinguishing
/// "where the bytes currently are" from the logical view; it changes on move,
/// delete and undelete. The record never crosses the external boundary — see
/// [`Document`] for the public projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: Uuid,
    pub name: String,
    pub folder: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub created_on: DateTime<Utc>,
    pub last_saved_on: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_on: Option<DateTime<Utc>>,
    pub size: usize,
    /// Current absolute location of the document bytes
    pub full_path: PathBuf,
}

impl From<&DocumentRecord> for Document {
    fn from(record: &DocumentRecord) -> Self {
        Document {
            id: record.id,
            name: record.name.clone(),
            folder: record.folder.clone(),
            doc_type: record.doc_type.clone(),
            created_on: record.created_on,
            last_saved_on: record.last_saved_on,
            deleted_on: record.deleted_on,
            size: record.size,
        }
    }
}

/// The identifier → record mapping persisted as one JSON document.
///
/// Insertion order is irrelevant; no iteration order is guaranteed.
pub type Index = HashMap<Uuid, DocumentRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DocumentRecord {
        DocumentRecord {
            id: Uuid::new_v4(),
            name: "report".into(),
            folder: "notes".into(),
            doc_type: "txt".into(),
            created_on: "2024-01-01T00:00:00Z".parse().unwrap(),
            last_saved_on: "2024-01-02T00:00:00Z".parse().unwrap(),
            deleted_on: None,
            size: 42,
            full_path: PathBuf::from("/srv/documents/notes/report.txt"),
        }
    }

    #[test]
    fn document_projection_drops_the_physical_path() {
        let record = sample_record();
        let document = Document::from(&record);

        assert_eq!(document.id, record.id);
        assert_eq!(document.name, "report");
        assert_eq!(document.folder, "notes");
        assert_eq!(document.doc_type, "txt");
        assert_eq!(document.size, 42);

        let json = serde_json::to_string(&document).unwrap();
        assert!(!json.contains("fullPath"));
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"fullPath\""));
        assert!(json.contains("\"type\":\"txt\""));

        let back: DocumentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn live_record_omits_deleted_on() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("deletedOn"));

        let mut deleted = record;
        deleted.deleted_on = Some("2024-02-01T00:00:00Z".parse().unwrap());
        let json = serde_json::to_string(&deleted).unwrap();
        assert!(json.contains("deletedOn"));
    }
}
