//! Stand-in for the external rooms service.
//!
//! Serves a fixed set of rooms and acknowledges booking requests without
//! storing them, so the UI can be developed and tested without the real
//! backend.

pub mod routes;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{App, HttpServer, web};
use anyhow::{Context, bail};
use payloads::{ROOM_LIST_KEYS, Room, RoomList};
use std::net::TcpListener;
use std::str::FromStr;
use std::time::Duration;

/// Rooms served when no `ROOMS_FILE` is configured.
const FIXTURE_ROOMS: &str = include_str!("../fixtures/rooms.json");

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config) -> std::io::Result<Server> {
    let fixture = web::Data::new(RoomsFixture {
        rooms: config.rooms.clone(),
        envelope: config.envelope,
        failure_status: config.failure_status,
        latency: config.latency,
    });

    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|origin| origin == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            let mut cors =
                Cors::default().allow_any_method().allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(fixture.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// Shared, read-only state behind the routes.
#[derive(Debug)]
pub struct RoomsFixture {
    pub rooms: Vec<Room>,
    pub envelope: Envelope,
    /// Answer `/api/rooms` with this status instead of the rooms.
    pub failure_status: Option<StatusCode>,
    /// Delay before answering `/api/rooms`.
    pub latency: Duration,
}

impl RoomsFixture {
    pub fn find_room(&self, room_id: &payloads::RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == room_id)
    }
}

/// How the rooms list is wrapped in the `/api/rooms` response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Envelope {
    #[default]
    Rooms,
    Data,
    Result,
    /// A bare JSON array.
    Bare,
}

impl Envelope {
    pub const ALL: [Envelope; 4] =
        [Self::Rooms, Self::Data, Self::Result, Self::Bare];

    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Rooms => Some(ROOM_LIST_KEYS[0]),
            Self::Data => Some(ROOM_LIST_KEYS[1]),
            Self::Result => Some(ROOM_LIST_KEYS[2]),
            Self::Bare => None,
        }
    }

    pub fn wrap(
        &self,
        rooms: &[Room],
    ) -> Result<serde_json::Value, serde_json::Error> {
        let list = serde_json::to_value(rooms)?;
        Ok(match self.key() {
            Some(key) => {
                let mut wrapper = serde_json::Map::new();
                wrapper.insert(key.to_string(), list);
                serde_json::Value::Object(wrapper)
            }
            None => list,
        })
    }
}

impl FromStr for Envelope {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bare" => Ok(Self::Bare),
            other => Self::ALL
                .into_iter()
                .find(|envelope| envelope.key() == Some(other))
                .with_context(|| {
                    format!(
                        "unknown rooms envelope {other:?}, expected one of: \
                         {}, bare",
                        ROOM_LIST_KEYS.join(", ")
                    )
                }),
        }
    }
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin
    pub allowed_origins: Vec<String>,
    pub rooms: Vec<Room>,
    pub envelope: Envelope,
    pub failure_status: Option<StatusCode>,
    pub latency: Duration,
}

impl Config {
    /// Local config on an OS-assigned port serving the given rooms.
    pub fn local(rooms: Vec<Room>) -> Self {
        Config {
            ip: "127.0.0.1".into(),
            port: 0,
            allowed_origins: vec!["*".to_string()],
            rooms,
            envelope: Envelope::default(),
            failure_status: None,
            latency: Duration::ZERO,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let rooms = match var("ROOMS_FILE") {
            Ok(path) => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading ROOMS_FILE {path}"))?;
                parse_rooms(&contents)
                    .with_context(|| format!("parsing ROOMS_FILE {path}"))?
            }
            Err(_) => fixture_rooms()?,
        };

        let envelope = match var("ROOMS_ENVELOPE") {
            Ok(value) => value.parse()?,
            Err(_) => Envelope::default(),
        };

        let failure_status = match var("ROOMS_FAILURE_STATUS") {
            Ok(value) => Some(parse_failure_status(&value)?),
            Err(_) => None,
        };

        let latency = match var("ROOMS_LATENCY_MS") {
            Ok(value) => Duration::from_millis(
                value.parse().context("ROOMS_LATENCY_MS must be a number")?,
            ),
            Err(_) => Duration::ZERO,
        };

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match var("PORT") {
                Ok(port) => port.parse().context("PORT must be a number")?,
                Err(_) => 5000,
            },
            allowed_origins,
            rooms,
            envelope,
            failure_status,
            latency,
        })
    }
}

/// The rooms bundled with the server.
pub fn fixture_rooms() -> anyhow::Result<Vec<Room>> {
    parse_rooms(FIXTURE_ROOMS).context("parsing bundled fixture rooms")
}

/// Parse a rooms document in any shape the UI accepts.
pub fn parse_rooms(contents: &str) -> anyhow::Result<Vec<Room>> {
    let RoomList(rooms) = serde_json::from_str(contents)?;
    Ok(rooms)
}

fn parse_failure_status(value: &str) -> anyhow::Result<StatusCode> {
    let code: u16 = value
        .trim()
        .parse()
        .context("ROOMS_FAILURE_STATUS must be a number")?;
    let status = StatusCode::from_u16(code)
        .with_context(|| format!("invalid status code {code}"))?;
    if !(status.is_client_error() || status.is_server_error()) {
        bail!("ROOMS_FAILURE_STATUS must be a 4xx or 5xx status, got {code}");
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_fixture_parses() {
        let rooms = fixture_rooms().unwrap();
        assert_eq!(rooms.len(), 6);
        assert!(rooms.iter().any(|room| room.is_available()));
        assert!(rooms.iter().any(|room| !room.is_available()));
    }

    #[test]
    fn envelope_names() {
        assert_eq!("rooms".parse::<Envelope>().unwrap(), Envelope::Rooms);
        assert_eq!(" Data ".parse::<Envelope>().unwrap(), Envelope::Data);
        assert_eq!("result".parse::<Envelope>().unwrap(), Envelope::Result);
        assert_eq!("bare".parse::<Envelope>().unwrap(), Envelope::Bare);
        assert!("items".parse::<Envelope>().is_err());
    }

    #[test]
    fn wrapped_rooms_parse_back() {
        let rooms = fixture_rooms().unwrap();
        for envelope in Envelope::ALL {
            let body = envelope.wrap(&rooms).unwrap().to_string();
            assert_eq!(parse_rooms(&body).unwrap(), rooms, "{envelope:?}");
        }
    }

    #[test]
    fn failure_status_must_be_an_error() {
        assert_eq!(
            parse_failure_status("503").unwrap(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert!(parse_failure_status("200").is_err());
        assert!(parse_failure_status("abc").is_err());
    }
}
