use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::utils::{extra_to_json, id_to_hex, now_iso, sanitize_extra};

/// Avaliação de uma sessão (coleção `reviews`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Hex id of the reviewed session, stored as a plain string
    pub session_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_email: Option<String>,

    #[serde(default, deserialize_with = "rating_or_zero")]
    pub rating: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub session_id: String,
    pub student_email: Option<String>,
    #[serde(default, deserialize_with = "rating_or_zero")]
    pub rating: f64,
    pub comment: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Missing or `null` ratings read as 0
fn rating_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl CreateReviewRequest {
    pub fn into_review(self) -> Review {
        Review {
            id: None,
            session_id: self.session_id,
            student_email: self.student_email,
            rating: self.rating,
            comment: self.comment,
            created_at: Some(now_iso()),
            extra: sanitize_extra(self.extra, &["createdAt"]),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub session_id: String,
    pub student_email: Option<String>,
    pub rating: f64,
    pub comment: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        ReviewResponse {
            id: id_to_hex(review.id),
            session_id: review.session_id,
            student_email: review.student_email,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
            extra: extra_to_json(review.extra),
        }
    }
}
