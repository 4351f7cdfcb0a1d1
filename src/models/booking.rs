use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::{extra_to_json, id_to_hex, now_iso, sanitize_extra};

/// Reserva de um aluno (coleção `bookings`). Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_at: Option<String>,

    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub student_email: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl CreateBookingRequest {
    pub fn into_booking(self) -> Booking {
        Booking {
            id: None,
            student_email: self.student_email,
            booked_at: Some(now_iso()),
            extra: sanitize_extra(self.extra, &["bookedAt"]),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub student_email: Option<String>,
    pub booked_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        BookingResponse {
            id: id_to_hex(booking.id),
            student_email: booking.student_email,
            booked_at: booking.booked_at,
            extra: extra_to_json(booking.extra),
        }
    }
}
