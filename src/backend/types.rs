// SPDX-License-Identifier: MPL-2.0
//! JSON record types exchanged with the backend.
//!
//! The backend is the source of truth for everything except `title`, which is
//! set client-side from the search keyword. Fields this client does not
//! interpret are carried opaquely in `extra` and serialized back verbatim, so
//! saving a record never strips backend data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned image identifier.
///
/// Opaque to the client. The wire format is not pinned down: some backends
/// hand out numeric row ids, others string ids, so both are accepted and
/// round-tripped unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageId::Number(n) => write!(f, "{}", n),
            ImageId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ImageId {
    fn from(n: i64) -> Self {
        ImageId::Number(n)
    }
}

impl From<&str> for ImageId {
    fn from(s: &str) -> Self {
        ImageId::Text(s.to_string())
    }
}

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,

    /// Search keyword this image was found with. Absent on freshly fetched
    /// search results; the controller fills it in before the record enters
    /// the gallery.
    #[serde(default)]
    pub title: String,

    /// Whether the backend has this record in its stored collection.
    #[serde(default)]
    pub saved: bool,

    /// Where to fetch the actual picture from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Backend fields this client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response body of `DELETE /images/<id>`.
///
/// A missing `deleted_id` means the backend did not confirm the deletion;
/// callers must treat that as "nothing happened".
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteReceipt {
    #[serde(default)]
    pub deleted_id: Option<ImageId>,
}

/// Response body of `POST /images`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveReceipt {
    #[serde(default)]
    pub inserted_id: Option<ImageId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_both_deserialize() {
        let numeric: ImageRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(numeric.id, ImageId::Number(7));

        let text: ImageRecord = serde_json::from_str(r#"{"id": "abc-123"}"#).unwrap();
        assert_eq!(text.id, ImageId::Text("abc-123".to_string()));
    }

    #[test]
    fn numeric_id_round_trips_as_number() {
        let record: ImageRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], serde_json::json!(7));
    }

    #[test]
    fn missing_saved_defaults_to_false() {
        let record: ImageRecord =
            serde_json::from_str(r#"{"id": 1, "title": "dog"}"#).unwrap();
        assert!(!record.saved);
    }

    #[test]
    fn unknown_fields_are_preserved_on_save() {
        let body = r#"{"id": "u1", "title": "cat", "width": 640, "user": {"name": "ada"}}"#;
        let record: ImageRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.extra.len(), 2);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["width"], serde_json::json!(640));
        assert_eq!(json["user"]["name"], serde_json::json!("ada"));
    }

    #[test]
    fn delete_receipt_without_confirmation() {
        let receipt: DeleteReceipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.deleted_id.is_none());

        let receipt: DeleteReceipt =
            serde_json::from_str(r#"{"deleted_id": 4}"#).unwrap();
        assert_eq!(receipt.deleted_id, Some(ImageId::Number(4)));
    }

    #[test]
    fn save_receipt_reads_inserted_id() {
        let receipt: SaveReceipt =
            serde_json::from_str(r#"{"inserted_id": "mongo-oid"}"#).unwrap();
        assert_eq!(receipt.inserted_id, Some(ImageId::from("mongo-oid")));
    }

    #[test]
    fn id_display_matches_wire_form() {
        assert_eq!(ImageId::Number(42).to_string(), "42");
        assert_eq!(ImageId::from("abc").to_string(), "abc");
    }
}
