//! Booking endpoints: create, list, clear

pub mod dto;
pub mod handlers;

pub use dto::{BookingDto, CardDetailsDto, CreateBookingRequest};
pub use handlers::{clear_bookings, create_booking, list_bookings, BookingAppState};
