use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::{extra_to_json, id_to_hex, now_iso, sanitize_extra};

/// Anotação pessoal de um aluno (coleção `notes`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Owner
    pub email: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: Document,
}

impl CreateNoteRequest {
    pub fn into_note(self) -> Note {
        let now = now_iso();

        Note {
            id: None,
            email: self.email,
            title: self.title,
            description: self.description,
            created_at: Some(now.clone()),
            updated_at: Some(now),
            extra: sanitize_extra(self.extra, &["createdAt", "updatedAt"]),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateNoteRequest {
    /// `$set` document: only the fields present, plus the new `updatedAt`.
    pub fn to_update(&self) -> Document {
        let mut set = doc! { "updatedAt": now_iso() };
        if let Some(title) = &self.title {
            set.insert("title", title);
        }
        if let Some(description) = &self.description {
            set.insert("description", description);
        }
        doc! { "$set": set }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub title: String,
    pub description: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        NoteResponse {
            id: id_to_hex(note.id),
            email: note.email,
            title: note.title,
            description: note.description,
            created_at: note.created_at,
            updated_at: note.updated_at,
            extra: extra_to_json(note.extra),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_has_both_timestamps() {
        let request: CreateNoteRequest = serde_json::from_value(serde_json::json!({
            "email": "s@x.com",
            "title": "Derivatives",
            "description": "Chain rule recap"
        }))
        .unwrap();

        let note = request.into_note();

        assert_eq!(note.title, "Derivatives");
        assert!(note.created_at.is_some());
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_partial_update_only_sets_given_fields() {
        let request = UpdateNoteRequest {
            title: Some("Integrals".into()),
            description: None,
        };

        let update = request.to_update();
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.get_str("title").unwrap(), "Integrals");
        assert!(!set.contains_key("description"));
        assert!(set.contains_key("updatedAt"));
    }
}
