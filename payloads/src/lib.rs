pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Identifier assigned to a room by the rooms service.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct RoomId(pub String);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct BookingId(pub Uuid);

/// Image shown for rooms without an image reference.
pub const DEFAULT_ROOM_IMAGE: &str = "/default-room.jpg";

/// A snapshot of one room as reported by the rooms service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: RoomId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Monthly price, displayed verbatim.
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub room_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    pub status: RoomStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// The image to render, falling back to the default room image.
    pub fn image_src(&self) -> &str {
        if self.image_url.trim().is_empty() {
            DEFAULT_ROOM_IMAGE
        } else {
            &self.image_url
        }
    }
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Some services send prices as numbers, some as strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number for price, got {other}"
        ))),
    }
}

/// Bookability of a room. Values outside the known set are preserved so
/// they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomStatus {
    Available,
    Booked,
    Maintenance,
    Reserved,
    Other(String),
}

impl RoomStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Maintenance => "maintenance",
            Self::Reserved => "reserved",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<String> for RoomStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "available" => Self::Available,
            "booked" => Self::Booked,
            "maintenance" => Self::Maintenance,
            "reserved" => Self::Reserved,
            _ => Self::Other(raw),
        }
    }
}

impl From<RoomStatus> for String {
    fn from(status: RoomStatus) -> Self {
        match status {
            RoomStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys under which a rooms response may nest its list, in lookup order.
pub const ROOM_LIST_KEYS: [&str; 3] = ["rooms", "data", "result"];

/// The list of rooms returned by the rooms endpoint.
///
/// The endpoint either returns a bare array or wraps it in an object under
/// one of [`ROOM_LIST_KEYS`]. The first key that is present and not null
/// wins. Serializes as a bare array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct RoomList(pub Vec<Room>);

impl TryFrom<serde_json::Value> for RoomList {
    type Error = String;

    fn try_from(body: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match body {
            Value::Array(_) => serde_json::from_value(body)
                .map(RoomList)
                .map_err(|e| format!("invalid room list: {e}")),
            Value::Object(mut fields) => {
                for key in ROOM_LIST_KEYS {
                    match fields.remove(key) {
                        None | Some(Value::Null) => continue,
                        Some(list @ Value::Array(_)) => {
                            return serde_json::from_value(list)
                                .map(RoomList)
                                .map_err(|e| {
                                    format!("invalid `{key}` list: {e}")
                                });
                        }
                        Some(_) => {
                            return Err(format!(
                                "expected `{key}` to be a list of rooms"
                            ));
                        }
                    }
                }
                Err(format!(
                    "expected a list of rooms or an object with one of: {}",
                    ROOM_LIST_KEYS.join(", ")
                ))
            }
            _ => Err("expected a list of rooms".to_string()),
        }
    }
}

impl From<RoomList> for Vec<Room> {
    fn from(list: RoomList) -> Self {
        list.0
    }
}

/// Academic programme offered on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "B.Tech")]
    BTech,
    #[serde(rename = "MBA")]
    Mba,
    #[serde(rename = "B.Sc")]
    BSc,
    #[serde(rename = "B.Com")]
    BCom,
    #[serde(rename = "BA")]
    Ba,
    Other,
}

impl Course {
    pub const ALL: [Course; 6] = [
        Self::BTech,
        Self::Mba,
        Self::BSc,
        Self::BCom,
        Self::Ba,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BTech => "B.Tech",
            Self::Mba => "MBA",
            Self::BSc => "B.Sc",
            Self::BCom => "B.Com",
            Self::Ba => "BA",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Course {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|course| course.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Length of stay offered on the booking form.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum StayDuration {
    #[serde(rename = "3 months")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6 months")]
    SixMonths,
    #[serde(rename = "12 months")]
    TwelveMonths,
}

impl StayDuration {
    pub const ALL: [StayDuration; 3] =
        [Self::ThreeMonths, Self::SixMonths, Self::TwelveMonths];

    /// Form value and wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeMonths => "3 months",
            Self::SixMonths => "6 months",
            Self::TwelveMonths => "12 months",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::TwelveMonths => "12 Months",
        }
    }
}

impl FromStr for StayDuration {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|duration| duration.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown option: {0:?}")]
pub struct UnknownOption(pub String);

/// A field on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BookingField {
    #[display("full name")]
    FullName,
    #[display("email")]
    Email,
    #[display("phone")]
    Phone,
    #[display("college")]
    College,
    #[display("course")]
    Course,
    #[display("join date")]
    JoinDate,
    #[display("duration")]
    Duration,
    #[display("special requests")]
    SpecialRequests,
}

impl BookingField {
    /// The `name` attribute of the matching form control.
    pub fn input_name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::College => "college",
            Self::Course => "course",
            Self::JoinDate => "joinDate",
            Self::Duration => "duration",
            Self::SpecialRequests => "specialRequests",
        }
    }
}

/// Values of the booking form while it is being filled in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingFormData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    /// `None` until a course is picked.
    pub course: Option<Course>,
    /// Raw `YYYY-MM-DD` value of the date input.
    pub join_date: String,
    pub duration: StayDuration,
    pub special_requests: String,
}

impl BookingFormData {
    /// Merge one changed input into the form, leaving every other field
    /// untouched.
    ///
    /// Unrecognized course values clear the selection. Unrecognized
    /// durations are ignored.
    pub fn set(&mut self, field: BookingField, value: String) {
        match field {
            BookingField::FullName => self.full_name = value,
            BookingField::Email => self.email = value,
            BookingField::Phone => self.phone = value,
            BookingField::College => self.college = value,
            BookingField::Course => self.course = value.parse().ok(),
            BookingField::JoinDate => self.join_date = value,
            BookingField::Duration => {
                if let Ok(duration) = value.parse() {
                    self.duration = duration;
                }
            }
            BookingField::SpecialRequests => self.special_requests = value,
        }
    }

    /// Current value of a field, as the form control displays it.
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::FullName => &self.full_name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::College => &self.college,
            BookingField::Course => {
                self.course.as_ref().map(Course::as_str).unwrap_or("")
            }
            BookingField::JoinDate => &self.join_date,
            BookingField::Duration => self.duration.as_str(),
            BookingField::SpecialRequests => &self.special_requests,
        }
    }
}
