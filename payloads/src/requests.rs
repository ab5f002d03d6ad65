use crate::{BookingField, BookingFormData, Course, RoomId, StayDuration};
use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};

pub const EMAIL_MAX_LEN: usize = 255;
pub const SPECIAL_REQUESTS_MAX_LEN: usize = 2000;

/// Earliest join date that can be booked: the current UTC date.
pub fn earliest_join_date() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

/// A booking request for one room, as sent to the booking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub room_id: RoomId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub course: Course,
    pub join_date: Date,
    pub duration: StayDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("Please fill in your {0}")]
    Blank(BookingField),
    #[error("Please select a course")]
    CourseNotSelected,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid join date")]
    InvalidJoinDate,
    #[error("Join date cannot be before {today}")]
    JoinDateInPast { today: Date },
    #[error(
        "Special requests must be at most {} characters",
        SPECIAL_REQUESTS_MAX_LEN
    )]
    SpecialRequestsTooLong,
}

impl CreateBooking {
    /// Build a request from the form values for the selected room.
    ///
    /// Text fields are trimmed. Blank special requests are omitted.
    pub fn from_form(
        room_id: RoomId,
        form: &BookingFormData,
        today: Date,
    ) -> Result<Self, BookingValidationError> {
        let course = form
            .course
            .ok_or(BookingValidationError::CourseNotSelected)?;
        let join_date_input = form.join_date.trim();
        if join_date_input.is_empty() {
            return Err(BookingValidationError::Blank(BookingField::JoinDate));
        }
        let join_date: Date = join_date_input
            .parse()
            .map_err(|_| BookingValidationError::InvalidJoinDate)?;
        let special_requests = form.special_requests.trim();

        let request = CreateBooking {
            room_id,
            full_name: form.full_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            college: form.college.trim().to_string(),
            course,
            join_date,
            duration: form.duration,
            special_requests: (!special_requests.is_empty())
                .then(|| special_requests.to_string()),
        };
        request.validate(today)?;
        Ok(request)
    }

    /// Check the request contents. `today` is the earliest allowed join
    /// date.
    pub fn validate(&self, today: Date) -> Result<(), BookingValidationError> {
        let required = [
            (BookingField::FullName, &self.full_name),
            (BookingField::Email, &self.email),
            (BookingField::Phone, &self.phone),
            (BookingField::College, &self.college),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BookingValidationError::Blank(field));
            }
        }

        if !is_plausible_email(&self.email) {
            return Err(BookingValidationError::InvalidEmail);
        }

        if self.join_date < today {
            return Err(BookingValidationError::JoinDateInPast { today });
        }

        if let Some(requests) = &self.special_requests
            && requests.chars().count() > SPECIAL_REQUESTS_MAX_LEN
        {
            return Err(BookingValidationError::SpecialRequestsTooLong);
        }

        Ok(())
    }
}

/// Same level of checking as an `<input type="email">`: something on each
/// side of a single `@`, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.len() > EMAIL_MAX_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn filled_form() -> BookingFormData {
        BookingFormData {
            full_name: "  Ravi Kumar ".into(),
            email: "ravi@example.com".into(),
            phone: "9876543210".into(),
            college: "IIT Delhi".into(),
            course: Some(Course::BTech),
            join_date: "2025-07-01".into(),
            duration: StayDuration::TwelveMonths,
            special_requests: "   ".into(),
        }
    }

    #[test]
    fn from_form_builds_trimmed_request() {
        let request = CreateBooking::from_form(
            RoomId("r1".into()),
            &filled_form(),
            date(2025, 6, 1),
        )
        .unwrap();
        assert_eq!(request.full_name, "Ravi Kumar");
        assert_eq!(request.join_date, date(2025, 7, 1));
        assert_eq!(request.duration, StayDuration::TwelveMonths);
        assert_eq!(request.special_requests, None);
    }

    #[test]
    fn join_date_today_is_allowed() {
        let result = CreateBooking::from_form(
            RoomId("r1".into()),
            &filled_form(),
            date(2025, 7, 1),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn from_form_reports_first_problem() {
        let today = date(2025, 6, 1);
        let room = || RoomId("r1".into());

        let mut form = filled_form();
        form.course = None;
        assert_eq!(
            CreateBooking::from_form(room(), &form, today),
            Err(BookingValidationError::CourseNotSelected)
        );

        let mut form = filled_form();
        form.college = " ".into();
        let err = CreateBooking::from_form(room(), &form, today).unwrap_err();
        assert_eq!(err, BookingValidationError::Blank(BookingField::College));
        assert_eq!(err.to_string(), "Please fill in your college");

        let mut form = filled_form();
        form.email = "ravi.example.com".into();
        assert_eq!(
            CreateBooking::from_form(room(), &form, today),
            Err(BookingValidationError::InvalidEmail)
        );

        let mut form = filled_form();
        form.join_date = "01/07/2025".into();
        assert_eq!(
            CreateBooking::from_form(room(), &form, today),
            Err(BookingValidationError::InvalidJoinDate)
        );

        let mut form = filled_form();
        form.join_date = "2025-05-31".into();
        let err = CreateBooking::from_form(room(), &form, today).unwrap_err();
        assert_eq!(err, BookingValidationError::JoinDateInPast { today });
    }

    #[test]
    fn special_requests_are_capped() {
        let today = date(2025, 6, 1);
        let mut form = filled_form();
        form.special_requests = "é".repeat(SPECIAL_REQUESTS_MAX_LEN);
        let request =
            CreateBooking::from_form(RoomId("r1".into()), &form, today).unwrap();
        assert_eq!(
            request.special_requests.map(|r| r.chars().count()),
            Some(SPECIAL_REQUESTS_MAX_LEN)
        );

        form.special_requests.push('x');
        let err = CreateBooking::from_form(RoomId("r1".into()), &form, today)
            .unwrap_err();
        assert_eq!(err, BookingValidationError::SpecialRequestsTooLong);
        assert_eq!(
            err.to_string(),
            "Special requests must be at most 2000 characters"
        );
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let request = CreateBooking::from_form(
            RoomId("r1".into()),
            &BookingFormData {
                special_requests: "Ground floor please".into(),
                ..filled_form()
            },
            date(2025, 6, 1),
        )
        .unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["roomId"], "r1");
        assert_eq!(value["fullName"], "Ravi Kumar");
        assert_eq!(value["course"], "B.Tech");
        assert_eq!(value["joinDate"], "2025-07-01");
        assert_eq!(value["duration"], "12 months");
        assert_eq!(value["specialRequests"], "Ground floor please");
    }
}
