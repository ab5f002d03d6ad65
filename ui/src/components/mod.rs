pub mod booking_form;
pub mod modal;
pub mod room_card;
pub mod success_modal;

pub use booking_form::BookingForm;
pub use modal::Modal;
pub use room_card::RoomCard;
pub use success_modal::SuccessModal;
