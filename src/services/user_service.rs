// ==================== USERS ====================
// Registro/login idempotente por email e gestão de papéis pelo admin

use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use serde::Serialize;

use crate::{
    database::MongoDB,
    models::{InsertResponse, RegisterUserRequest, UpdateResponse, User, UserResponse},
    utils::{contains_regex, exact_match_regex, now_iso, parse_object_id, AppError},
};

/// Result of `POST /users`: either the login stamp or the new document
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UpsertOutcome {
    Updated(UpdateResponse),
    Inserted(InsertResponse),
}

/// Case-insensitive exact match on email
pub fn email_filter(email: &str) -> Document {
    doc! { "email": exact_match_regex(email) }
}

/// Partial, case-insensitive match on name OR email. Blank searches match everything.
pub fn search_filter(search: Option<&str>) -> Document {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => doc! {
            "$or": [
                { "name": contains_regex(text) },
                { "email": contains_regex(text) },
            ]
        },
        None => Document::new(),
    }
}

/// Inserts the user on first registration; afterwards only `lastLoggedAt` moves.
///
/// Check-then-act, not atomic: two concurrent first registrations for the
/// same email can both insert.
pub async fn upsert_user(db: &MongoDB, request: RegisterUserRequest) -> Result<UpsertOutcome, AppError> {
    let collection = db.users();

    let existing = collection.find_one(email_filter(&request.email)).await?;

    match existing {
        Some(user) => {
            // Update the matched document itself, whatever case its email is stored in
            let filter = match user.id {
                Some(id) => doc! { "_id": id },
                None => doc! { "email": &user.email },
            };
            let result = collection
                .update_one(filter, doc! { "$set": { "lastLoggedAt": now_iso() } })
                .await?;

            log::info!("🔑 User {} logged in again", user.email);
            Ok(UpsertOutcome::Updated(result.into()))
        }
        None => {
            let user = request.into_user();
            let result = collection.insert_one(&user).await?;

            log::info!("✅ User {} registered", user.email);
            Ok(UpsertOutcome::Inserted(result.into()))
        }
    }
}

pub async fn list_users(db: &MongoDB) -> Result<Vec<UserResponse>, AppError> {
    let users: Vec<User> = db.users().find(doc! {}).await?.try_collect().await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}

/// Admin listing, newest accounts first
pub async fn search_users(db: &MongoDB, search: Option<&str>) -> Result<Vec<UserResponse>, AppError> {
    let users: Vec<User> = db
        .users()
        .find(search_filter(search))
        .sort(doc! { "createdAt": -1 })
        .await?
        .try_collect()
        .await?;

    Ok(users.into_iter().map(UserResponse::from).collect())
}

pub async fn update_role(db: &MongoDB, user_id: &str, role: &str) -> Result<UpdateResponse, AppError> {
    let object_id = parse_object_id(user_id, "user")?;

    let result = db
        .users()
        .update_one(doc! { "_id": object_id }, doc! { "$set": { "role": role } })
        .await?;

    Ok(result.into())
}
