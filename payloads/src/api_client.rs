use crate::{Room, RoomList, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Default address of the rooms service.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// An API client for the rooms and booking endpoints.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.address.trim_end_matches('/'))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }
}

/// Methods on the rooms service
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// Fetch the current snapshot of all rooms.
    ///
    /// Accepts a bare list or one wrapped under any of
    /// [`crate::ROOM_LIST_KEYS`].
    pub async fn list_rooms(&self) -> Result<Vec<Room>, ClientError> {
        let response = self.empty_get("rooms").await?;
        let body: RoomList = ok_json(response).await?;
        Ok(body.into())
    }

    /// Submit a booking request for one room.
    pub async fn create_booking(
        &self,
        details: &requests::CreateBooking,
    ) -> Result<responses::BookingConfirmation, ClientError> {
        let response = self.post("bookings", details).await?;
        ok_json(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success response, containing the response text.
    #[error("HTTP error! status: {}", .0.as_u16())]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// The response body did not have the expected shape.
    #[error("Unexpected response from server: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Text to show the user: the server's explanation when it gave one,
    /// otherwise the error itself.
    pub fn details(&self) -> String {
        match self {
            Self::APIError(_, text) if !text.trim().is_empty() => text.clone(),
            _ => self.to_string(),
        }
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error. Bodies that don't match `T` are reported as
/// malformed rather than as network failures.
pub async fn ok_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    let text = response.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| ClientError::MalformedResponse(e.to_string()))
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
