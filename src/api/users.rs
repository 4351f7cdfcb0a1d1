use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{
    database::MongoDB,
    models::{InsertResponse, RegisterUserRequest, UpdateResponse, UpdateRoleRequest, UserSearchQuery},
    services::user_service::{self, UpsertOutcome},
};

/// POST /users - Registro no primeiro acesso, depois apenas marca o login
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    responses(
        (status = 201, description = "New user inserted", body = InsertResponse),
        (status = 200, description = "Existing user, lastLoggedAt updated", body = UpdateResponse)
    )
)]
pub async fn upsert_user(db: web::Data<MongoDB>, body: web::Json<RegisterUserRequest>) -> impl Responder {
    log::info!("👤 POST /users - {}", body.email);

    match user_service::upsert_user(&db, body.into_inner()).await {
        Ok(UpsertOutcome::Inserted(result)) => HttpResponse::Created().json(result),
        Ok(UpsertOutcome::Updated(result)) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error registering user: {}", e);
            e.error_response()
        }
    }
}

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses((status = 200, description = "Every user document"))
)]
pub async fn list_users(db: web::Data<MongoDB>) -> impl Responder {
    match user_service::list_users(&db).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            e.error_response()
        }
    }
}

/// GET /usersForAdmin?search=
#[utoipa::path(
    get,
    path = "/usersForAdmin",
    tag = "Admin",
    params(("search" = Option<String>, Query, description = "Case-insensitive text matched against name or email")),
    responses((status = 200, description = "Matching users, newest first"))
)]
pub async fn search_users(db: web::Data<MongoDB>, query: web::Query<UserSearchQuery>) -> impl Responder {
    log::info!("🔎 GET /usersForAdmin - search: {:?}", query.search);

    match user_service::search_users(&db, query.search.as_deref()).await {
        Ok(users) => {
            log::info!("✅ Found {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error searching users: {}", e);
            e.error_response()
        }
    }
}

/// PATCH /users/role/{id}
#[utoipa::path(
    patch,
    path = "/users/role/{id}",
    tag = "Admin",
    params(("id" = String, Path, description = "User ObjectId (24 hex chars)")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = UpdateResponse),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn update_role(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<UpdateRoleRequest>,
) -> impl Responder {
    let user_id = path.into_inner();

    log::info!("🛡️  PATCH /users/role/{} - role: {}", user_id, body.role);

    match user_service::update_role(&db, &user_id, &body.role).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error updating role: {}", e);
            e.error_response()
        }
    }
}
