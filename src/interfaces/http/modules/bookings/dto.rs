//! Booking DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::ports::CardDetails;
use crate::domain::{Booking, Charger};

use super::super::chargers::ChargerDto;

/// Card details as submitted with a booking request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CardDetailsDto {
    /// Card number, digits with optional spaces
    #[validate(length(min = 12, max = 23, message = "card number is required"))]
    pub number: String,
    /// Expiry month, 1-12
    #[validate(range(min = 1, max = 12, message = "expiry month must be 1-12"))]
    pub exp_month: u32,
    /// Four-digit expiry year
    #[validate(range(min = 2000, max = 2100, message = "expiry year must be four digits"))]
    pub exp_year: i32,
    /// Security code, 3-4 digits
    #[validate(length(min = 3, max = 4, message = "security code must be 3-4 digits"))]
    pub cvc: String,
    /// Optional cardholder name
    pub holder: Option<String>,
}

impl From<CardDetailsDto> for CardDetails {
    fn from(dto: CardDetailsDto) -> Self {
        Self {
            number: dto.number,
            exp_month: dto.exp_month,
            exp_year: dto.exp_year,
            cvc: dto.cvc,
            holder: dto.holder,
        }
    }
}

/// Request to reserve a charging slot.
///
/// The charger snapshot is carried as returned by `GET /api/v1/chargers`;
/// the booking keeps the pricing in effect at reservation time.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    pub charger: Charger,
    #[validate(nested)]
    pub card: CardDetailsDto,
    /// Optional future reservation time (RFC 3339); defaults to now
    pub booking_date: Option<String>,
}

/// Booking in API responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub transaction_id: String,
    /// Reservation time, RFC 3339
    pub booking_date: String,
    pub charger: ChargerDto,
}

impl BookingDto {
    pub fn from_booking(booking: Booking, currency: &str) -> Self {
        Self {
            transaction_id: booking.transaction_id,
            booking_date: booking.booking_date.to_rfc3339(),
            charger: ChargerDto::from_charger(booking.charger, currency),
        }
    }
}
