// ==================== REVIEWS ====================

use futures::stream::TryStreamExt;
use mongodb::bson::doc;

use crate::{
    database::MongoDB,
    models::{CreateReviewRequest, InsertResponse, Review, ReviewResponse},
    utils::AppError,
};

/// Arithmetic mean rounded to one decimal place, `None` without ratings.
pub fn average_rating(ratings: &[f64]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }

    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

pub async fn create_review(db: &MongoDB, request: CreateReviewRequest) -> Result<InsertResponse, AppError> {
    let review = request.into_review();
    let result = db.reviews().insert_one(&review).await?;

    Ok(result.into())
}

/// Reviews of a session, newest first
pub async fn fetch_reviews(db: &MongoDB, session_id: &str) -> Result<Vec<Review>, AppError> {
    let reviews = db
        .reviews()
        .find(doc! { "sessionId": session_id })
        .sort(doc! { "createdAt": -1 })
        .await?
        .try_collect()
        .await?;

    Ok(reviews)
}

pub async fn list_reviews(db: &MongoDB, session_id: &str) -> Result<Vec<ReviewResponse>, AppError> {
    let reviews = fetch_reviews(db, session_id).await?;
    Ok(reviews.into_iter().map(ReviewResponse::from).collect())
}
