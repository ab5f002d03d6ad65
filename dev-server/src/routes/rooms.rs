use actix_web::{HttpResponse, get, web};

use crate::RoomsFixture;

use super::APIError;

#[tracing::instrument(skip(fixture))]
#[get("/rooms")]
pub async fn list_rooms(
    fixture: web::Data<RoomsFixture>,
) -> Result<HttpResponse, APIError> {
    if !fixture.latency.is_zero() {
        actix_web::rt::time::sleep(fixture.latency).await;
    }

    if let Some(status) = fixture.failure_status {
        tracing::warn!(%status, "simulating rooms service failure");
        return Ok(HttpResponse::build(status)
            .body(format!("Rooms service unavailable ({status})")));
    }

    let body = fixture
        .envelope
        .wrap(&fixture.rooms)
        .map_err(anyhow::Error::from)?;
    tracing::debug!(
        count = fixture.rooms.len(),
        envelope = ?fixture.envelope,
        "serving rooms"
    );
    Ok(HttpResponse::Ok().json(body))
}
