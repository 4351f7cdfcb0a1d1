use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::{extra_to_json, id_to_hex, now_iso, sanitize_extra};

pub const DEFAULT_ROLE: &str = "student";

/// Usuário (armazenado no MongoDB, coleção `users`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Unique per case-insensitive comparison (not enforced by an index)
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_logged_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Campos extras enviados pelo cliente (foto, telefone, ...)
    #[serde(flatten)]
    pub extra: Document,
}

/// Body of `POST /users`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl RegisterUserRequest {
    /// Builds the document stored on first registration.
    pub fn into_user(self) -> User {
        let now = now_iso();

        User {
            id: None,
            email: self.email,
            name: self.name,
            role: Some(self.role.unwrap_or_else(|| DEFAULT_ROLE.to_string())),
            last_logged_at: Some(now.clone()),
            created_at: Some(self.created_at.unwrap_or(now)),
            extra: sanitize_extra(self.extra, &["lastLoggedAt"]),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateRoleRequest {
    pub role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
    pub last_logged_at: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: id_to_hex(user.id),
            email: user.email,
            name: user.name,
            role: user.role,
            last_logged_at: user.last_logged_at,
            created_at: user.created_at,
            extra: extra_to_json(user.extra),
        }
    }
}
