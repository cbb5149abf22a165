//! Outbound ports — interfaces the booking flow depends on
//!
//! [`PaymentGateway`] decouples the booking service from the concrete
//! card-validation implementation. The production implementation is
//! [`SimulatedCardGateway`](crate::infrastructure::payment::SimulatedCardGateway);
//! nothing is ever charged anywhere, the gateway only validates and
//! tokenizes card details.

use async_trait::async_trait;

use crate::domain::PaymentError;

/// Card details as entered by the user.
#[derive(Debug, Clone)]
pub struct CardDetails {
    /// Card number, digits with optional spaces
    pub number: String,
    /// Expiry month, 1-12
    pub exp_month: u32,
    /// Four-digit expiry year
    pub exp_year: i32,
    /// Security code, 3-4 digits
    pub cvc: String,
    /// Optional cardholder name
    pub holder: Option<String>,
}

/// Opaque payment-method token returned on successful tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentToken {
    pub id: String,
}

/// Validate and tokenize entered card details.
///
/// Resolves with a token or rejects with a user-facing decline message;
/// `PaymentError::Declined` messages are surfaced to the user verbatim.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn tokenize(&self, card: &CardDetails) -> Result<PaymentToken, PaymentError>;
}
