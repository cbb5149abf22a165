//! Booking flow: tokenize the card, then persist the reservation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::application::ports::{CardDetails, PaymentGateway};
use crate::domain::{Booking, BookingError, Charger};

use super::store::BookingStore;

/// Orchestrates one reservation: payment tokenization first, storage second.
///
/// A declined card never reaches the store; a storage failure after a
/// successful tokenization fails the flow (nothing was charged, the token
/// is discarded either way).
pub struct BookingService {
    gateway: Arc<dyn PaymentGateway>,
    store: Arc<BookingStore>,
}

impl BookingService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, store: Arc<BookingStore>) -> Self {
        Self { gateway, store }
    }

    pub async fn book(
        &self,
        charger: Charger,
        card: &CardDetails,
        date: Option<DateTime<Utc>>,
    ) -> Result<Booking, BookingError> {
        let token = match self.gateway.tokenize(card).await {
            Ok(token) => token,
            Err(e) => {
                metrics::counter!("payments_declined_total").increment(1);
                warn!("Payment tokenization failed: {}", e);
                return Err(e.into());
            }
        };

        // The token is logged and discarded; no charge is submitted.
        info!(token_id = %token.id, charger_id = %charger.id, "Payment method tokenized");

        let booking = self.store.save(charger, date).await?;
        metrics::counter!("bookings_created_total").increment(1);
        Ok(booking)
    }
}

// ── Tests ──────────────────────────────────────────────────────
