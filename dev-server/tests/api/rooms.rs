use dev_server::Config;
use payloads::{ClientError, RoomStatus};
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use test_helpers::{
    Envelope, assert_status_code, spawn_app, spawn_app_with, test_rooms,
};

#[tokio::test]
async fn list_rooms_returns_all_rooms() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let rooms = app.client.list_rooms().await?;

    assert_eq!(rooms, test_rooms());
    assert_eq!(rooms.iter().filter(|room| room.is_available()).count(), 1);
    assert_eq!(rooms[4].status, RoomStatus::Other("cleaning".into()));

    Ok(())
}

#[tokio::test]
async fn list_rooms_under_every_envelope() -> anyhow::Result<()> {
    for envelope in Envelope::ALL {
        let app = spawn_app_with(Config {
            envelope,
            ..Config::local(test_rooms())
        })
        .await;

        let rooms = app.client.list_rooms().await?;
        assert_eq!(rooms, test_rooms(), "envelope {envelope:?}");
    }

    Ok(())
}

#[tokio::test]
async fn list_rooms_empty() -> anyhow::Result<()> {
    let app = spawn_app_with(Config::local(vec![])).await;

    let rooms = app.client.list_rooms().await?;
    assert!(rooms.is_empty());

    Ok(())
}

#[tokio::test]
async fn list_rooms_failure_status() -> anyhow::Result<()> {
    let app = spawn_app_with(Config {
        failure_status: Some(
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
        ),
        ..Config::local(test_rooms())
    })
    .await;

    let result = app.client.list_rooms().await;
    match &result {
        Err(e @ ClientError::APIError(..)) => {
            assert_eq!(e.to_string(), "HTTP error! status: 503");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }
    assert_status_code(result, StatusCode::SERVICE_UNAVAILABLE);

    Ok(())
}

#[tokio::test]
async fn list_rooms_waits_for_latency() -> anyhow::Result<()> {
    let latency = Duration::from_millis(200);
    let app = spawn_app_with(Config {
        latency,
        ..Config::local(test_rooms())
    })
    .await;

    let started = Instant::now();
    app.client.list_rooms().await?;
    assert!(started.elapsed() >= latency);

    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    // nothing listens on port 9 of localhost
    let client = payloads::APIClient {
        address: "http://127.0.0.1:9".to_string(),
        ..app.client
    };

    let result = client.list_rooms().await;
    assert!(matches!(result, Err(ClientError::Network(_))));

    Ok(())
}
