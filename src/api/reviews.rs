use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{
    database::MongoDB,
    models::{CreateReviewRequest, InsertResponse},
    services::review_service,
};

/// POST /reviews
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    responses((status = 201, description = "Review stored", body = InsertResponse))
)]
pub async fn create_review(db: web::Data<MongoDB>, body: web::Json<CreateReviewRequest>) -> impl Responder {
    log::info!("⭐ POST /reviews - session {} rated {}", body.session_id, body.rating);

    match review_service::create_review(&db, body.into_inner()).await {
        Ok(result) => HttpResponse::Created().json(result),
        Err(e) => {
            log::error!("❌ Error creating review: {}", e);
            e.error_response()
        }
    }
}

/// GET /reviews/{sessionId} - Mais recentes primeiro
#[utoipa::path(
    get,
    path = "/reviews/{sessionId}",
    tag = "Reviews",
    params(("sessionId" = String, Path, description = "Reviewed session id")),
    responses((status = 200, description = "Reviews of the session, newest first"))
)]
pub async fn list_reviews(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let session_id = path.into_inner();

    match review_service::list_reviews(&db, &session_id).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(e) => {
            log::error!("❌ Error listing reviews for {}: {}", session_id, e);
            e.error_response()
        }
    }
}
