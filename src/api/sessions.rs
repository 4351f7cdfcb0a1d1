use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{
    database::MongoDB,
    models::{CreateSessionRequest, EmailQuery, InsertResponse, UpdateResponse},
    services::session_service,
};

/// POST /session - Cria sessão (status padrão: pending)
#[utoipa::path(
    post,
    path = "/session",
    tag = "Sessions",
    responses((status = 201, description = "Session created", body = InsertResponse))
)]
pub async fn create_session(db: web::Data<MongoDB>, body: web::Json<CreateSessionRequest>) -> impl Responder {
    log::info!("📝 POST /session - tutor: {:?}", body.tutor_email);

    match session_service::create_session(&db, body.into_inner()).await {
        Ok(result) => {
            log::info!("✅ Session created: {}", result.inserted_id);
            HttpResponse::Created().json(result)
        }
        Err(e) => {
            log::error!("❌ Error creating session: {}", e);
            e.error_response()
        }
    }
}

/// GET /all-sessions (também /sessions)
#[utoipa::path(
    get,
    path = "/all-sessions",
    tag = "Sessions",
    responses((status = 200, description = "Every session"))
)]
pub async fn list_sessions(db: web::Data<MongoDB>) -> impl Responder {
    match session_service::list_sessions(&db).await {
        Ok(sessions) => HttpResponse::Ok().json(sessions),
        Err(e) => {
            log::error!("❌ Error listing sessions: {}", e);
            e.error_response()
        }
    }
}

/// GET /session/{id} - Sessão + reviews + média
#[utoipa::path(
    get,
    path = "/session/{id}",
    tag = "Sessions",
    params(("id" = String, Path, description = "Session ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "Session with its reviews and averageRating"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No such session")
    )
)]
pub async fn get_session(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let session_id = path.into_inner();

    match session_service::get_session_detail(&db, &session_id).await {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => {
            log::error!("❌ Error fetching session {}: {}", session_id, e);
            e.error_response()
        }
    }
}

/// GET /tutor-sessions?email=
#[utoipa::path(
    get,
    path = "/tutor-sessions",
    tag = "Sessions",
    params(("email" = String, Query, description = "Tutor email")),
    responses((status = 200, description = "Sessions of the tutor"))
)]
pub async fn tutor_sessions(db: web::Data<MongoDB>, query: web::Query<EmailQuery>) -> impl Responder {
    log::info!("📋 GET /tutor-sessions - {:?}", query.email);

    match session_service::list_tutor_sessions(&db, query.email.as_deref()).await {
        Ok(sessions) => HttpResponse::Ok().json(sessions),
        Err(e) => {
            log::error!("❌ Error listing tutor sessions: {}", e);
            e.error_response()
        }
    }
}

/// GET /approved-sessions?email=
#[utoipa::path(
    get,
    path = "/approved-sessions",
    tag = "Sessions",
    params(("email" = String, Query, description = "Tutor email")),
    responses((status = 200, description = "Approved sessions of the tutor"))
)]
pub async fn approved_sessions(db: web::Data<MongoDB>, query: web::Query<EmailQuery>) -> impl Responder {
    match session_service::list_approved_sessions(&db, query.email.as_deref()).await {
        Ok(sessions) => HttpResponse::Ok().json(sessions),
        Err(e) => {
            log::error!("❌ Error listing approved sessions: {}", e);
            e.error_response()
        }
    }
}

/// PATCH /session/resend-request/{id} - rejected → pending
#[utoipa::path(
    patch,
    path = "/session/resend-request/{id}",
    tag = "Sessions",
    params(("id" = String, Path, description = "Session ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "modifiedCount is 0 unless the session was rejected", body = UpdateResponse),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn resend_request(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let session_id = path.into_inner();

    log::info!("↩️  PATCH /session/resend-request/{}", session_id);

    match session_service::resend_request(&db, &session_id).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error resending session {}: {}", session_id, e);
            e.error_response()
        }
    }
}
