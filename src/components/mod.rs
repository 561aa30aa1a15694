pub mod modal;

pub use modal::{close_booking_modal, open_booking_modal, BookingModal};
