use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::{extra_to_json, id_to_hex, now_iso, sanitize_extra};

/// Material de estudo publicado pelo tutor (coleção `materials`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor_email: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialRequest {
    pub session_id: Option<String>,
    pub tutor_email: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    pub drive_link: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl CreateMaterialRequest {
    pub fn into_material(self) -> Material {
        let now = now_iso();

        Material {
            id: None,
            session_id: self.session_id,
            tutor_email: self.tutor_email,
            title: self.title,
            image_url: self.image_url,
            drive_link: self.drive_link,
            created_at: Some(now.clone()),
            updated_at: Some(now),
            extra: sanitize_extra(self.extra, &["createdAt", "updatedAt"]),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterialRequest {
    pub title: Option<String>,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    pub drive_link: Option<String>,
}

impl UpdateMaterialRequest {
    pub fn to_update(&self) -> Document {
        let mut set = doc! { "updatedAt": now_iso() };
        if let Some(title) = &self.title {
            set.insert("title", title);
        }
        if let Some(image_url) = &self.image_url {
            set.insert("imageURL", image_url);
        }
        if let Some(drive_link) = &self.drive_link {
            set.insert("driveLink", drive_link);
        }
        doc! { "$set": set }
    }
}

/// `GET /materials?sessionId=..&tutorEmail=..`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialQuery {
    pub session_id: Option<String>,
    pub tutor_email: Option<String>,
}

impl MaterialQuery {
    /// Blank parameters count as absent.
    pub fn to_filter(&self) -> Document {
        let mut filter = Document::new();
        if let Some(session_id) = non_blank(&self.session_id) {
            filter.insert("sessionId", session_id);
        }
        if let Some(tutor_email) = non_blank(&self.tutor_email) {
            filter.insert("tutorEmail", tutor_email);
        }
        filter
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub session_id: Option<String>,
    pub tutor_email: Option<String>,
    pub title: String,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    pub drive_link: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Material> for MaterialResponse {
    fn from(material: Material) -> Self {
        MaterialResponse {
            id: id_to_hex(material.id),
            session_id: material.session_id,
            tutor_email: material.tutor_email,
            title: material.title,
            image_url: material.image_url,
            drive_link: material.drive_link,
            created_at: material.created_at,
            updated_at: material.updated_at,
            extra: extra_to_json(material.extra),
        }
    }
}
