use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::review::ReviewResponse;
use crate::utils::{extra_to_json, id_to_hex, now_iso, sanitize_extra};

/// Estado de aprovação da sessão
///
/// `pending` → `approved` | `rejected` happens outside this service;
/// `rejected` → `pending` is the resend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "pending",
            SessionStatus::Approved => "approved",
            SessionStatus::Rejected => "rejected",
        }
    }
}

impl From<SessionStatus> for Bson {
    fn from(status: SessionStatus) -> Self {
        Bson::String(status.as_str().to_string())
    }
}

/// Sessão de estudo (coleção `session`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor_email: Option<String>,

    #[serde(default)]
    pub status: SessionStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Título, descrição, datas, taxa etc. vêm do cliente sem schema
    #[serde(flatten)]
    pub extra: Document,
}

/// Body of `POST /session`: anything goes, status defaults to pending
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub tutor_email: Option<String>,
    pub status: Option<SessionStatus>,
    #[serde(flatten)]
    pub extra: Document,
}

impl CreateSessionRequest {
    pub fn into_session(self) -> Session {
        Session {
            id: None,
            tutor_email: self.tutor_email,
            status: self.status.unwrap_or_default(),
            created_at: Some(now_iso()),
            updated_at: None,
            extra: sanitize_extra(self.extra, &["createdAt", "updatedAt"]),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub tutor_email: Option<String>,
    pub status: SessionStatus,
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        SessionResponse {
            id: id_to_hex(session.id),
            tutor_email: session.tutor_email,
            status: session.status,
            created_at: session.created_at,
            updated_at: session.updated_at,
            extra: extra_to_json(session.extra),
        }
    }
}

/// `GET /session/{id}`: the session plus everything students said about it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetailResponse {
    #[serde(flatten)]
    pub session: SessionResponse,
    pub reviews: Vec<ReviewResponse>,
    pub average_rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let request: CreateSessionRequest = serde_json::from_value(serde_json::json!({
            "tutorEmail": "t@x.com",
            "title": "Linear Algebra"
        }))
        .unwrap();

        let session = request.into_session();

        assert_eq!(session.status, SessionStatus::Pending);
        assert_eq!(session.tutor_email.as_deref(), Some("t@x.com"));
        assert!(session.created_at.is_some());
        assert_eq!(session.extra.get_str("title").unwrap(), "Linear Algebra");
    }

    #[test]
    fn test_stored_document_without_status_reads_pending() {
        let stored = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "tutorEmail": "t@x.com",
        };

        let session: Session = mongodb::bson::from_document(stored).unwrap();
        assert_eq!(session.status, SessionStatus::Pending);
        assert!(session.extra.is_empty());
    }

    #[test]
    fn test_explicit_status_is_kept() {
        let request: CreateSessionRequest =
            serde_json::from_value(serde_json::json!({ "status": "approved" })).unwrap();

        assert_eq!(request.into_session().status, SessionStatus::Approved);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_value(SessionStatus::Rejected).unwrap(), "rejected");
        assert_eq!(Bson::from(SessionStatus::Pending), Bson::String("pending".into()));
    }

    #[test]
    fn test_detail_response_flattens_session() {
        let session = Session {
            id: Some(ObjectId::new()),
            tutor_email: Some("t@x.com".into()),
            status: SessionStatus::Approved,
            created_at: Some("2026-01-01T00:00:00.000Z".into()),
            updated_at: None,
            extra: mongodb::bson::doc! { "title": "Calculus" },
        };

        let detail = SessionDetailResponse {
            session: session.into(),
            reviews: vec![],
            average_rating: None,
        };
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["title"], "Calculus");
        assert_eq!(json["status"], "approved");
        assert!(json["averageRating"].is_null());
        assert!(json.get("updatedAt").is_none());
    }
}
