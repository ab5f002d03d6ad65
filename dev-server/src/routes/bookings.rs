use actix_web::{HttpResponse, post, web};
use anyhow::anyhow;
use payloads::BookingId;
use payloads::requests::{CreateBooking, earliest_join_date};
use payloads::responses::{BookingConfirmation, BookingStatus};
use uuid::Uuid;

use crate::RoomsFixture;

use super::APIError;

/// Acknowledge a booking request. Nothing is stored, so repeated requests
/// for the same room are all accepted.
#[tracing::instrument(skip(fixture), ret)]
#[post("/bookings")]
pub async fn create_booking(
    details: web::Json<CreateBooking>,
    fixture: web::Data<RoomsFixture>,
) -> Result<HttpResponse, APIError> {
    details.validate(earliest_join_date())?;

    let room = fixture.find_room(&details.room_id).ok_or_else(|| {
        APIError::NotFound(anyhow!("no room with id {}", details.room_id))
    })?;
    if !room.is_available() {
        return Err(APIError::Conflict(anyhow!(
            "room {} is not available ({})",
            room.name,
            room.status
        )));
    }

    let confirmation = BookingConfirmation {
        booking_id: BookingId(Uuid::new_v4()),
        room_id: room.id.clone(),
        status: BookingStatus::Pending,
    };
    tracing::info!(
        booking_id = %confirmation.booking_id,
        room = %room.name,
        duration = details.duration.as_str(),
        "accepted booking request"
    );
    Ok(HttpResponse::Created().json(confirmation))
}
