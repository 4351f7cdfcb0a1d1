// ==================== MATERIALS ====================

use futures::stream::TryStreamExt;
use mongodb::bson::doc;

use crate::{
    database::MongoDB,
    models::{
        CreateMaterialRequest, DeleteResponse, InsertResponse, Material, MaterialQuery, MaterialResponse,
        UpdateMaterialRequest, UpdateResponse,
    },
    utils::{parse_object_id, AppError},
};

pub async fn create_material(db: &MongoDB, request: CreateMaterialRequest) -> Result<InsertResponse, AppError> {
    let material = request.into_material();
    let result = db.materials().insert_one(&material).await?;

    Ok(result.into())
}

/// Materials of a session and/or tutor; no scope lists everything
pub async fn list_materials(db: &MongoDB, query: &MaterialQuery) -> Result<Vec<MaterialResponse>, AppError> {
    let materials: Vec<Material> = db
        .materials()
        .find(query.to_filter())
        .sort(doc! { "createdAt": -1 })
        .await?
        .try_collect()
        .await?;

    Ok(materials.into_iter().map(MaterialResponse::from).collect())
}

pub async fn update_material(
    db: &MongoDB,
    material_id: &str,
    request: &UpdateMaterialRequest,
) -> Result<UpdateResponse, AppError> {
    let object_id = parse_object_id(material_id, "material")?;

    let result = db
        .materials()
        .update_one(doc! { "_id": object_id }, request.to_update())
        .await?;

    Ok(result.into())
}

pub async fn delete_material(db: &MongoDB, material_id: &str) -> Result<DeleteResponse, AppError> {
    let object_id = parse_object_id(material_id, "material")?;
    let result = db.materials().delete_one(doc! { "_id": object_id }).await?;

    Ok(result.into())
}
