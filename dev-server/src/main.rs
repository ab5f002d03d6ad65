//! Development server for the hostel rooms UI
//!
//! Serves fixture rooms at `/api/rooms` and acknowledges bookings at
//! `/api/bookings`, standing in for the real rooms service.
//!
//! Environment variables can be set directly or loaded from a .env file:
//! - IP_ADDRESS: bind address (default 127.0.0.1)
//! - PORT: port (default 5000)
//! - ALLOWED_ORIGINS: "*" or a comma-separated list of CORS origins
//! - ROOMS_FILE: JSON file with the rooms to serve (default: bundled fixture)
//! - ROOMS_ENVELOPE: rooms | data | result | bare (default rooms)
//! - ROOMS_FAILURE_STATUS: answer /api/rooms with this 4xx/5xx status
//! - ROOMS_LATENCY_MS: delay /api/rooms responses
//!
//! Usage: cargo run -p dev-server
//! Then:  cd ui && trunk serve

use dev_server::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber, log_error},
};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Silently ignored if there is no .env file
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info".into()))?;

    let mut config = Config::from_env()?;
    let server = build(&mut config)?;

    info!(
        rooms = config.rooms.len(),
        envelope = ?config.envelope,
        failure_status = ?config.failure_status,
        latency_ms = config.latency.as_millis() as u64,
        "Rooms dev server listening on http://{}:{}",
        config.ip,
        config.port
    );

    if let Err(e) = server.await {
        log_error(e);
    }
    Ok(())
}
