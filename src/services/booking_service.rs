// ==================== BOOKINGS ====================

use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};

use crate::{
    database::MongoDB,
    models::{Booking, BookingResponse, CreateBookingRequest, InsertResponse},
    utils::AppError,
};

pub fn student_filter(email: Option<&str>) -> Document {
    match email.map(str::trim).filter(|e| !e.is_empty()) {
        Some(email) => doc! { "studentEmail": email },
        None => Document::new(),
    }
}

pub async fn create_booking(db: &MongoDB, request: CreateBookingRequest) -> Result<InsertResponse, AppError> {
    let booking = request.into_booking();
    let result = db.bookings().insert_one(&booking).await?;

    Ok(result.into())
}

/// All bookings, or only one student's when an email is given
pub async fn list_bookings(db: &MongoDB, email: Option<&str>) -> Result<Vec<BookingResponse>, AppError> {
    let bookings: Vec<Booking> = db
        .bookings()
        .find(student_filter(email))
        .sort(doc! { "bookedAt": -1 })
        .await?
        .try_collect()
        .await?;

    Ok(bookings.into_iter().map(BookingResponse::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{drop_db, live_db};

    #[test]
    fn test_student_filter() {
        assert_eq!(student_filter(Some("s@x.com")), doc! { "studentEmail": "s@x.com" });
        assert!(student_filter(None).is_empty());
        assert!(student_filter(Some("")).is_empty());
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_bookings_scoped_by_student() {
        let db = live_db().await;

        for email in ["a@x.com", "b@x.com", "a@x.com"] {
            let request: CreateBookingRequest = serde_json::from_value(serde_json::json!({
                "studentEmail": email,
                "sessionId": "65f1a2b3c4d5e6f708192a3b",
            }))
            .unwrap();
            create_booking(&db, request).await.unwrap();
        }

        assert_eq!(list_bookings(&db, Some("a@x.com")).await.unwrap().len(), 2);
        assert_eq!(list_bookings(&db, None).await.unwrap().len(), 3);

        drop_db(&db).await;
    }
}
