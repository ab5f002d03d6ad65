pub mod not_found;
pub mod rooms;

pub use not_found::NotFoundPage;
pub use rooms::RoomsPage;
