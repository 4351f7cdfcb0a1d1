use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{
    database::MongoDB,
    models::{CreateBookingRequest, EmailQuery, InsertResponse},
    services::booking_service,
};

/// POST /bookings
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "Bookings",
    responses((status = 201, description = "Booking stored with bookedAt", body = InsertResponse))
)]
pub async fn create_booking(db: web::Data<MongoDB>, body: web::Json<CreateBookingRequest>) -> impl Responder {
    log::info!("🎟️  POST /bookings - student: {:?}", body.student_email);

    match booking_service::create_booking(&db, body.into_inner()).await {
        Ok(result) => HttpResponse::Created().json(result),
        Err(e) => {
            log::error!("❌ Error creating booking: {}", e);
            e.error_response()
        }
    }
}

/// GET /bookings?email=
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "Bookings",
    params(("email" = Option<String>, Query, description = "Only this student's bookings")),
    responses((status = 200, description = "Bookings, most recent first"))
)]
pub async fn list_bookings(db: web::Data<MongoDB>, query: web::Query<EmailQuery>) -> impl Responder {
    match booking_service::list_bookings(&db, query.email.as_deref()).await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(e) => {
            log::error!("❌ Error listing bookings: {}", e);
            e.error_response()
        }
    }
}
