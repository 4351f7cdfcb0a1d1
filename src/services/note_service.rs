// ==================== NOTES ====================
// CRUD das anotações pessoais, sempre escopadas pelo email do dono

use futures::stream::TryStreamExt;
use mongodb::bson::doc;

use crate::{
    database::MongoDB,
    models::{CreateNoteRequest, DeleteResponse, InsertResponse, Note, NoteResponse, UpdateNoteRequest, UpdateResponse},
    utils::{parse_object_id, AppError},
};

pub async fn create_note(db: &MongoDB, request: CreateNoteRequest) -> Result<InsertResponse, AppError> {
    let note = request.into_note();
    let result = db.notes().insert_one(&note).await?;

    Ok(result.into())
}

pub async fn list_notes(db: &MongoDB, email: Option<&str>) -> Result<Vec<NoteResponse>, AppError> {
    let email = email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("email query parameter is required".to_string()))?;

    let notes: Vec<Note> = db
        .notes()
        .find(doc! { "email": email })
        .sort(doc! { "updatedAt": -1 })
        .await?
        .try_collect()
        .await?;

    Ok(notes.into_iter().map(NoteResponse::from).collect())
}

pub async fn update_note(db: &MongoDB, note_id: &str, request: &UpdateNoteRequest) -> Result<UpdateResponse, AppError> {
    let object_id = parse_object_id(note_id, "note")?;

    let result = db
        .notes()
        .update_one(doc! { "_id": object_id }, request.to_update())
        .await?;

    Ok(result.into())
}

pub async fn delete_note(db: &MongoDB, note_id: &str) -> Result<DeleteResponse, AppError> {
    let object_id = parse_object_id(note_id, "note")?;
    let result = db.notes().delete_one(doc! { "_id": object_id }).await?;

    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{drop_db, live_db, offline_db};

    #[actix_web::test]
    async fn test_owner_is_required() {
        let db = offline_db().await;
        assert!(matches!(list_notes(&db, None).await, Err(AppError::InvalidRequest(_))));
    }

    #[actix_web::test]
    async fn test_malformed_id_is_rejected() {
        let db = offline_db().await;
        assert!(matches!(delete_note(&db, "nope").await, Err(AppError::InvalidRequest(_))));
    }

    fn note(email: &str, title: &str) -> CreateNoteRequest {
        serde_json::from_value(serde_json::json!({
            "email": email,
            "title": title,
            "description": "",
        }))
        .unwrap()
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_delete_removes_exactly_one_note() {
        let db = live_db().await;

        let keep = create_note(&db, note("s@x.com", "keep")).await.unwrap();
        let gone = create_note(&db, note("s@x.com", "gone")).await.unwrap();
        create_note(&db, note("other@x.com", "foreign")).await.unwrap();

        let result = delete_note(&db, &gone.inserted_id).await.unwrap();
        assert_eq!(result.deleted_count, 1);

        let notes = list_notes(&db, Some("s@x.com")).await.unwrap();
        let ids: Vec<_> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec![keep.inserted_id.as_str()]);

        let again = delete_note(&db, &gone.inserted_id).await.unwrap();
        assert_eq!(again.deleted_count, 0);

        drop_db(&db).await;
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_update_changes_title_only() {
        let db = live_db().await;

        let created = create_note(&db, note("s@x.com", "draft")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let request = UpdateNoteRequest {
            title: Some("final".into()),
            description: None,
        };

        let result = update_note(&db, &created.inserted_id, &request).await.unwrap();
        assert_eq!(result.modified_count, 1);

        let notes = list_notes(&db, Some("s@x.com")).await.unwrap();
        assert_eq!(notes[0].title, "final");
        assert_eq!(notes[0].description, "");
        assert_ne!(notes[0].created_at, notes[0].updated_at);

        drop_db(&db).await;
    }
}
