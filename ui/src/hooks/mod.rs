pub mod use_rooms_page;

pub use use_rooms_page::use_rooms_page;
