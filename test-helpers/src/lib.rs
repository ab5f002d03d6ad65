use dev_server::{Config, telemetry};
use payloads::{Room, RoomId, RoomStatus};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub use dev_server::Envelope;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
}

/// Spawn the dev server with the given config on an OS-assigned port.
pub async fn spawn_app_with(mut config: Config) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    config.ip = "127.0.0.1".into();
    config.port = 0;

    let server = dev_server::build(&mut config).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient::new(format!(
            "http://127.0.0.1:{}",
            config.port
        )),
    }
}

/// Spawn the dev server with the test rooms and default settings.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Config::local(test_rooms())).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn room(id: &str, name: &str, status: RoomStatus) -> Room {
    Room {
        id: RoomId(id.to_string()),
        name: name.to_string(),
        description: format!("Test room {name}"),
        price: "6000".to_string(),
        room_type: "Double".to_string(),
        gender: "Unisex".to_string(),
        status,
        image_url: String::new(),
        amenities: Some(vec!["WiFi".to_string(), "AC".to_string()]),
    }
}

/// One room per status, including an unrecognized one.
pub fn test_rooms() -> Vec<Room> {
    vec![
        room("1", "A1", RoomStatus::Available),
        room("2", "A2", RoomStatus::Booked),
        room("3", "B1", RoomStatus::Reserved),
        room("4", "B2", RoomStatus::Maintenance),
        room("5", "C1", RoomStatus::Other("cleaning".to_string())),
    ]
}
