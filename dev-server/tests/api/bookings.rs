use jiff::ToSpan;
use payloads::requests::{CreateBooking, earliest_join_date};
use payloads::responses::BookingStatus;
use payloads::{BookingFormData, Course, RoomId, StayDuration};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app};

fn booking_for(room_id: &str) -> CreateBooking {
    let form = BookingFormData {
        full_name: "Meera Nair".into(),
        email: "meera@example.com".into(),
        phone: "9812345678".into(),
        college: "Christ University".into(),
        course: Some(Course::Mba),
        join_date: earliest_join_date()
            .checked_add(7.days())
            .unwrap()
            .to_string(),
        duration: StayDuration::SixMonths,
        special_requests: "Lower bunk".into(),
    };
    CreateBooking::from_form(RoomId(room_id.into()), &form, earliest_join_date())
        .unwrap()
}

#[tokio::test]
async fn create_booking_for_available_room() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let confirmation = app.client.create_booking(&booking_for("1")).await?;

    assert_eq!(confirmation.room_id, RoomId("1".into()));
    assert_eq!(confirmation.status, BookingStatus::Pending);

    // nothing is stored, so the room can be requested again
    let second = app.client.create_booking(&booking_for("1")).await?;
    assert_ne!(second.booking_id, confirmation.booking_id);

    Ok(())
}

#[tokio::test]
async fn create_booking_for_unavailable_rooms() -> anyhow::Result<()> {
    let app = spawn_app().await;

    for room_id in ["2", "3", "4", "5"] {
        let result = app.client.create_booking(&booking_for(room_id)).await;
        assert_status_code(result, StatusCode::CONFLICT);
    }

    Ok(())
}

#[tokio::test]
async fn create_booking_for_unknown_room() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.create_booking(&booking_for("404")).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn create_booking_rejects_invalid_details() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut booking = booking_for("1");
    booking.college = "   ".into();
    let result = app.client.create_booking(&booking).await;
    match result {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(text, "Bad request: Please fill in your college");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }

    let mut booking = booking_for("1");
    booking.join_date = earliest_join_date().yesterday()?;
    let result = app.client.create_booking(&booking).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}
