//! View model for the rooms page.
//!
//! The base view and the two overlays (booking form, success
//! confirmation) change only through [`RoomsAction`]s.

use payloads::{BookingField, BookingFormData, Room, RoomId};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RoomsView {
    /// The initial fetch is in flight.
    #[default]
    Loading,
    Error(String),
    Empty,
    Populated(Vec<Room>),
}

/// An open booking form for one room.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSession {
    pub room: Room,
    pub submitting: bool,
    /// Why the last submission failed, if it did.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomsPageState {
    pub view: RoomsView,
    pub booking: Option<BookingSession>,
    pub success_open: bool,
    /// Outlives a single booking session: cancelling keeps the values.
    pub form: BookingFormData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoomsAction {
    RoomsLoaded(Result<Vec<Room>, String>),
    BookRequested(RoomId),
    FieldChanged(BookingField, String),
    CloseBooking,
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
    CloseSuccess,
}

impl RoomsPageState {
    /// Rooms from the last successful fetch.
    pub fn rooms(&self) -> &[Room] {
        match &self.view {
            RoomsView::Populated(rooms) => rooms,
            _ => &[],
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.booking.as_ref().is_some_and(|session| session.submitting)
    }

    /// True when a booking form is open and not already being submitted.
    pub fn can_submit(&self) -> bool {
        self.booking.is_some() && !self.is_submitting()
    }

    pub fn apply(&mut self, action: RoomsAction) {
        match action {
            RoomsAction::RoomsLoaded(Ok(rooms)) => {
                self.view = if rooms.is_empty() {
                    RoomsView::Empty
                } else {
                    RoomsView::Populated(rooms)
                };
            }
            RoomsAction::RoomsLoaded(Err(message)) => {
                self.view = RoomsView::Error(message);
            }
            RoomsAction::BookRequested(room_id) => {
                // availability as of the last fetch
                let room = self
                    .rooms()
                    .iter()
                    .find(|room| room.id == room_id && room.is_available())
                    .cloned();
                match room {
                    Some(room) => {
                        tracing::debug!(room = %room.name, "opening booking form");
                        self.booking = Some(BookingSession {
                            room,
                            submitting: false,
                            error: None,
                        });
                    }
                    None => {
                        tracing::debug!(%room_id, "ignoring booking request");
                    }
                }
            }
            RoomsAction::FieldChanged(field, value) => {
                self.form.set(field, value);
                if let Some(session) = &mut self.booking {
                    session.error = None;
                }
            }
            RoomsAction::CloseBooking => {
                if !self.is_submitting() {
                    self.booking = None;
                }
            }
            RoomsAction::SubmitStarted => {
                if let Some(session) = &mut self.booking {
                    session.submitting = true;
                    session.error = None;
                }
            }
            RoomsAction::SubmitSucceeded => {
                self.booking = None;
                self.success_open = true;
                self.form = BookingFormData::default();
            }
            RoomsAction::SubmitFailed(message) => {
                if let Some(session) = &mut self.booking {
                    session.submitting = false;
                    session.error = Some(message);
                }
            }
            RoomsAction::CloseSuccess => {
                self.success_open = false;
            }
        }
    }
}

/// Tracks whether a booking submission task is running, independently of
/// when the page next renders.
#[derive(Debug, Default)]
pub struct SubmissionLatch {
    in_flight: bool,
}

impl SubmissionLatch {
    /// Claims the latch. Returns false if a submission is already running.
    pub fn try_begin(&mut self) -> bool {
        !std::mem::replace(&mut self.in_flight, true)
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

impl Reducible for RoomsPageState {
    type Action = RoomsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{Course, RoomStatus, StayDuration};

    fn room(id: &str, name: &str, status: RoomStatus) -> Room {
        Room {
            id: RoomId(id.into()),
            name: name.into(),
            description: String::new(),
            price: "5000".into(),
            room_type: "Single".into(),
            gender: "Male".into(),
            status,
            image_url: String::new(),
            amenities: None,
        }
    }

    fn populated() -> RoomsPageState {
        let mut state = RoomsPageState::default();
        state.apply(RoomsAction::RoomsLoaded(Ok(vec![
            room("1", "A1", RoomStatus::Available),
            room("2", "A2", RoomStatus::Booked),
        ])));
        state
    }

    fn fill_form(state: &mut RoomsPageState) {
        let fields = [
            (BookingField::FullName, "Priya Shah"),
            (BookingField::Email, "priya@example.com"),
            (BookingField::Phone, "9000000001"),
            (BookingField::College, "NIT Trichy"),
            (BookingField::Course, "B.Tech"),
            (BookingField::JoinDate, "2030-01-15"),
            (BookingField::Duration, "3 months"),
            (BookingField::SpecialRequests, "Near the stairs"),
        ];
        for (field, value) in fields {
            state.apply(RoomsAction::FieldChanged(field, value.into()));
        }
    }

    #[test]
    fn starts_loading() {
        let state = RoomsPageState::default();
        assert_eq!(state.view, RoomsView::Loading);
        assert!(state.booking.is_none());
        assert!(!state.success_open);
    }

    #[test]
    fn fetch_outcomes() {
        let state = populated();
        assert_eq!(state.rooms().len(), 2);

        let mut state = RoomsPageState::default();
        state.apply(RoomsAction::RoomsLoaded(Ok(vec![])));
        assert_eq!(state.view, RoomsView::Empty);
        assert!(state.rooms().is_empty());

        let mut state = RoomsPageState::default();
        state.apply(RoomsAction::RoomsLoaded(Err("Failed to fetch".into())));
        assert_eq!(state.view, RoomsView::Error("Failed to fetch".into()));
    }

    #[test]
    fn booking_only_opens_for_available_rooms() {
        let mut state = populated();

        state.apply(RoomsAction::BookRequested(RoomId("2".into())));
        assert!(state.booking.is_none());

        state.apply(RoomsAction::BookRequested(RoomId("missing".into())));
        assert!(state.booking.is_none());

        state.apply(RoomsAction::BookRequested(RoomId("1".into())));
        let session = state.booking.as_ref().unwrap();
        assert_eq!(session.room.name, "A1");
        assert!(!session.submitting);
    }

    #[test]
    fn booking_ignored_while_loading() {
        let mut state = RoomsPageState::default();
        state.apply(RoomsAction::BookRequested(RoomId("1".into())));
        assert!(state.booking.is_none());
    }

    #[test]
    fn cancel_keeps_form_values() {
        let mut state = populated();
        state.apply(RoomsAction::BookRequested(RoomId("1".into())));
        fill_form(&mut state);

        state.apply(RoomsAction::CloseBooking);
        assert!(state.booking.is_none());
        assert_eq!(state.form.full_name, "Priya Shah");
        assert_eq!(state.form.duration, StayDuration::ThreeMonths);
        assert_eq!(state.view, populated().view);
    }

    #[test]
    fn successful_submit_resets_form_and_shows_success() {
        let mut state = populated();
        state.apply(RoomsAction::BookRequested(RoomId("1".into())));
        fill_form(&mut state);
        assert_eq!(state.form.course, Some(Course::BTech));
        assert!(state.can_submit());

        state.apply(RoomsAction::SubmitStarted);
        assert!(state.is_submitting());
        assert!(!state.can_submit());

        // the form can't be dismissed mid-submission
        state.apply(RoomsAction::CloseBooking);
        assert!(state.booking.is_some());

        state.apply(RoomsAction::SubmitSucceeded);
        assert!(state.booking.is_none());
        assert!(state.success_open);
        assert_eq!(state.form, BookingFormData::default());
        assert_eq!(state.form.duration, StayDuration::SixMonths);

        state.apply(RoomsAction::CloseSuccess);
        assert!(!state.success_open);
        assert_eq!(state.view, populated().view);
    }

    #[test]
    fn failed_submit_keeps_form_open() {
        let mut state = populated();
        state.apply(RoomsAction::BookRequested(RoomId("1".into())));
        fill_form(&mut state);

        state.apply(RoomsAction::SubmitStarted);
        state.apply(RoomsAction::SubmitFailed("Room is taken".into()));
        let session = state.booking.as_ref().unwrap();
        assert!(!session.submitting);
        assert_eq!(session.error.as_deref(), Some("Room is taken"));
        assert!(!state.success_open);
        assert_eq!(state.form.full_name, "Priya Shah");

        // editing clears the stale error
        state.apply(RoomsAction::FieldChanged(
            BookingField::Phone,
            "9000000002".into(),
        ));
        assert_eq!(state.booking.as_ref().unwrap().error, None);
    }

    #[test]
    fn reducer_leaves_previous_state_untouched() {
        let before = Rc::new(populated());
        let after = before
            .clone()
            .reduce(RoomsAction::BookRequested(RoomId("1".into())));
        assert!(before.booking.is_none());
        assert!(after.booking.is_some());
    }

    #[test]
    fn latch_admits_one_submission_at_a_time() {
        let mut latch = SubmissionLatch::default();
        assert!(latch.try_begin());
        // a second submit before the first completes is dropped
        assert!(!latch.try_begin());
        latch.finish();
        assert!(latch.try_begin());
    }
}
