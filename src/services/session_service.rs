// ==================== SESSIONS ====================
// Ciclo de vida das sessões de estudo: criação, listagens e reenvio

use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::{
    database::MongoDB,
    models::{
        CreateSessionRequest, InsertResponse, ReviewResponse, Session, SessionDetailResponse,
        SessionResponse, SessionStatus, UpdateResponse,
    },
    services::review_service,
    utils::{now_iso, parse_object_id, AppError},
};

/// Sessions of one tutor, optionally narrowed to a status
pub fn tutor_filter(email: &str, status: Option<SessionStatus>) -> Document {
    let mut filter = doc! { "tutorEmail": email };
    if let Some(status) = status {
        filter.insert("status", status);
    }
    filter
}

/// Only a rejected session can be sent back for review
pub fn resend_filter(id: ObjectId) -> Document {
    doc! { "_id": id, "status": SessionStatus::Rejected }
}

pub fn resend_update() -> Document {
    doc! {
        "$set": {
            "status": SessionStatus::Pending,
            "updatedAt": now_iso(),
        }
    }
}

fn require_email(email: Option<&str>) -> Result<&str, AppError> {
    email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("email query parameter is required".to_string()))
}

pub async fn create_session(db: &MongoDB, request: CreateSessionRequest) -> Result<InsertResponse, AppError> {
    let session = request.into_session();
    let result = db.sessions().insert_one(&session).await?;

    Ok(result.into())
}

async fn find_sessions(db: &MongoDB, filter: Document) -> Result<Vec<SessionResponse>, AppError> {
    let sessions: Vec<Session> = db.sessions().find(filter).await?.try_collect().await?;
    Ok(sessions.into_iter().map(SessionResponse::from).collect())
}

pub async fn list_sessions(db: &MongoDB) -> Result<Vec<SessionResponse>, AppError> {
    find_sessions(db, doc! {}).await
}

pub async fn list_tutor_sessions(db: &MongoDB, email: Option<&str>) -> Result<Vec<SessionResponse>, AppError> {
    let email = require_email(email)?;
    find_sessions(db, tutor_filter(email, None)).await
}

pub async fn list_approved_sessions(db: &MongoDB, email: Option<&str>) -> Result<Vec<SessionResponse>, AppError> {
    let email = require_email(email)?;
    find_sessions(db, tutor_filter(email, Some(SessionStatus::Approved))).await
}

/// Session document joined in-process with its reviews and their average
pub async fn get_session_detail(db: &MongoDB, session_id: &str) -> Result<SessionDetailResponse, AppError> {
    let object_id = parse_object_id(session_id, "session")?;
    let sessions = db.sessions();

    let (session, reviews) = tokio::try_join!(
        async { sessions.find_one(doc! { "_id": object_id }).await.map_err(AppError::from) },
        review_service::fetch_reviews(db, session_id),
    )?;

    let session = session.ok_or_else(|| AppError::NotFound(format!("Session {}", session_id)))?;

    let ratings: Vec<f64> = reviews.iter().map(|r| r.rating).collect();
    let average_rating = review_service::average_rating(&ratings);

    Ok(SessionDetailResponse {
        session: session.into(),
        reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
        average_rating,
    })
}

/// rejected → pending. Any other status is left alone and the result reports
/// zero matched documents.
pub async fn resend_request(db: &MongoDB, session_id: &str) -> Result<UpdateResponse, AppError> {
    let object_id = parse_object_id(session_id, "session")?;

    let result = db
        .sessions()
        .update_one(resend_filter(object_id), resend_update())
        .await?;

    if result.matched_count == 0 {
        log::info!("↩️  Session {} is not rejected, resend ignored", session_id);
    }

    Ok(result.into())
}
