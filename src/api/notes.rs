use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{
    database::MongoDB,
    models::{CreateNoteRequest, DeleteResponse, EmailQuery, InsertResponse, UpdateNoteRequest, UpdateResponse},
    services::note_service,
};

/// POST /notes
#[utoipa::path(
    post,
    path = "/notes",
    tag = "Notes",
    responses((status = 201, description = "Note stored", body = InsertResponse))
)]
pub async fn create_note(db: web::Data<MongoDB>, body: web::Json<CreateNoteRequest>) -> impl Responder {
    log::info!("🗒️  POST /notes - owner {}", body.email);

    match note_service::create_note(&db, body.into_inner()).await {
        Ok(result) => HttpResponse::Created().json(result),
        Err(e) => {
            log::error!("❌ Error creating note: {}", e);
            e.error_response()
        }
    }
}

/// GET /notes?email=
#[utoipa::path(
    get,
    path = "/notes",
    tag = "Notes",
    params(("email" = String, Query, description = "Owner email")),
    responses(
        (status = 200, description = "Notes of the owner, last edited first"),
        (status = 400, description = "Missing email")
    )
)]
pub async fn list_notes(db: web::Data<MongoDB>, query: web::Query<EmailQuery>) -> impl Responder {
    match note_service::list_notes(&db, query.email.as_deref()).await {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => {
            log::error!("❌ Error listing notes: {}", e);
            e.error_response()
        }
    }
}

/// PATCH /notes/{id}
#[utoipa::path(
    patch,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = String, Path, description = "Note ObjectId (24 hex chars)")),
    request_body = UpdateNoteRequest,
    responses((status = 200, description = "Note updated", body = UpdateResponse))
)]
pub async fn update_note(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<UpdateNoteRequest>,
) -> impl Responder {
    let note_id = path.into_inner();

    match note_service::update_note(&db, &note_id, &body).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error updating note {}: {}", note_id, e);
            e.error_response()
        }
    }
}

/// DELETE /notes/{id}
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = String, Path, description = "Note ObjectId (24 hex chars)")),
    responses((status = 200, description = "deletedCount is 1 when the note existed", body = DeleteResponse))
)]
pub async fn delete_note(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let note_id = path.into_inner();

    log::info!("🗑️  DELETE /notes/{}", note_id);

    match note_service::delete_note(&db, &note_id).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error deleting note {}: {}", note_id, e);
            e.error_response()
        }
    }
}
