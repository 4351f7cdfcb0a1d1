use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{
    database::MongoDB,
    models::{
        CreateMaterialRequest, DeleteResponse, InsertResponse, MaterialQuery, UpdateMaterialRequest, UpdateResponse,
    },
    services::material_service,
};

/// POST /materials
#[utoipa::path(
    post,
    path = "/materials",
    tag = "Materials",
    responses((status = 201, description = "Material stored", body = InsertResponse))
)]
pub async fn create_material(db: web::Data<MongoDB>, body: web::Json<CreateMaterialRequest>) -> impl Responder {
    log::info!("📚 POST /materials - session {:?}", body.session_id);

    match material_service::create_material(&db, body.into_inner()).await {
        Ok(result) => HttpResponse::Created().json(result),
        Err(e) => {
            log::error!("❌ Error creating material: {}", e);
            e.error_response()
        }
    }
}

/// GET /materials?sessionId=&tutorEmail=
#[utoipa::path(
    get,
    path = "/materials",
    tag = "Materials",
    params(
        ("sessionId" = Option<String>, Query, description = "Materials of this session"),
        ("tutorEmail" = Option<String>, Query, description = "Materials uploaded by this tutor")
    ),
    responses((status = 200, description = "Materials, newest first"))
)]
pub async fn list_materials(db: web::Data<MongoDB>, query: web::Query<MaterialQuery>) -> impl Responder {
    match material_service::list_materials(&db, &query).await {
        Ok(materials) => HttpResponse::Ok().json(materials),
        Err(e) => {
            log::error!("❌ Error listing materials: {}", e);
            e.error_response()
        }
    }
}

/// PATCH /materials/{id}
#[utoipa::path(
    patch,
    path = "/materials/{id}",
    tag = "Materials",
    params(("id" = String, Path, description = "Material ObjectId (24 hex chars)")),
    request_body = UpdateMaterialRequest,
    responses((status = 200, description = "Material updated", body = UpdateResponse))
)]
pub async fn update_material(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<UpdateMaterialRequest>,
) -> impl Responder {
    let material_id = path.into_inner();

    match material_service::update_material(&db, &material_id, &body).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error updating material {}: {}", material_id, e);
            e.error_response()
        }
    }
}

/// DELETE /materials/{id}
#[utoipa::path(
    delete,
    path = "/materials/{id}",
    tag = "Materials",
    params(("id" = String, Path, description = "Material ObjectId (24 hex chars)")),
    responses((status = 200, description = "Material removed", body = DeleteResponse))
)]
pub async fn delete_material(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let material_id = path.into_inner();

    log::info!("🗑️  DELETE /materials/{}", material_id);

    match material_service::delete_material(&db, &material_id).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error deleting material {}: {}", material_id, e);
            e.error_response()
        }
    }
}
