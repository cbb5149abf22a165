//! Simulated card gateway
//!
//! Stands in for the hosted payment widget: validates card details, waits a
//! fixed settlement delay, and resolves a payment-method token. No charge is
//! ever submitted to anything. Validation runs before the delay; only the
//! success path pays it.

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use rand::Rng;
use tokio::time::Duration;
use tracing::debug;

use crate::application::ports::{CardDetails, PaymentGateway, PaymentToken};
use crate::config::PaymentConfig;
use crate::domain::PaymentError;

/// Token prefix, followed by 24 hex chars of random material.
const TOKEN_PREFIX: &str = "tok_";

/// The one production [`PaymentGateway`] implementation.
pub struct SimulatedCardGateway {
    settlement_delay: Duration,
}

impl SimulatedCardGateway {
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            settlement_delay: Duration::from_millis(config.settlement_delay_ms),
        }
    }

    /// Decline messages are user-facing and surfaced verbatim.
    fn validate(card: &CardDetails) -> Result<(), PaymentError> {
        let digits: String = card.number.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.len() < 12 || digits.len() > 19 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaymentError::Declined("Invalid card number".into()));
        }
        if !luhn_valid(&digits) {
            return Err(PaymentError::Declined("Invalid card number".into()));
        }

        if !(1..=12).contains(&card.exp_month) {
            return Err(PaymentError::Declined("Invalid expiry date".into()));
        }
        // Valid through the end of the expiry month.
        let now = Utc::now();
        if (card.exp_year, card.exp_month) < (now.year(), now.month()) {
            return Err(PaymentError::Declined("Card has expired".into()));
        }

        if !(3..=4).contains(&card.cvc.len()) || !card.cvc.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaymentError::Declined("Invalid security code".into()));
        }

        Ok(())
    }
}

#[async_trait]
impl PaymentGateway for SimulatedCardGateway {
    async fn tokenize(&self, card: &CardDetails) -> Result<PaymentToken, PaymentError> {
        Self::validate(card)?;

        // Fixed delay standing in for settlement, not a real confirmation.
        tokio::time::sleep(self.settlement_delay).await;

        let material: [u8; 12] = rand::thread_rng().gen();
        let token = PaymentToken {
            id: format!("{}{}", TOKEN_PREFIX, hex::encode(material)),
        };
        debug!(token_id = %token.id, "Card tokenized");
        Ok(token)
    }
}

/// Luhn checksum over an all-digit string.
fn luhn_valid(digits: &str) -> bool {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> SimulatedCardGateway {
        // no settlement delay in tests
        SimulatedCardGateway::new(&PaymentConfig {
            settlement_delay_ms: 0,
        })
    }

    fn valid_card() -> CardDetails {
        CardDetails {
            number: "4242 4242 4242 4242".into(),
            exp_month: 12,
            exp_year: Utc::now().year() + 2,
            cvc: "123".into(),
            holder: Some("Ada Lovelace".into()),
        }
    }

    fn decline_message(result: Result<PaymentToken, PaymentError>) -> String {
        match result {
            Err(PaymentError::Declined(msg)) => msg,
            other => panic!("expected a decline, got {:?}", other.map(|t| t.id)),
        }
    }

    #[test]
    fn luhn_accepts_known_test_numbers() {
        assert!(luhn_valid("4242424242424242"));
        assert!(luhn_valid("5555555555554444"));
        assert!(!luhn_valid("4242424242424241"));
    }

    #[tokio::test]
    async fn valid_card_gets_a_prefixed_token() {
        let token = gateway().tokenize(&valid_card()).await.unwrap();
        assert!(token.id.starts_with("tok_"));
        assert_eq!(token.id.len(), 4 + 24);
    }

    #[tokio::test]
    async fn tokens_are_unique() {
        let gw = gateway();
        let a = gw.tokenize(&valid_card()).await.unwrap();
        let b = gw.tokenize(&valid_card()).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn malformed_number_is_declined() {
        let mut card = valid_card();
        card.number = "1234".into();
        assert_eq!(
            decline_message(gateway().tokenize(&card).await),
            "Invalid card number"
        );

        card.number = "4242424242424241".into(); // fails Luhn
        assert_eq!(
            decline_message(gateway().tokenize(&card).await),
            "Invalid card number"
        );
    }

    #[tokio::test]
    async fn past_expiry_is_declined() {
        let mut card = valid_card();
        card.exp_year = 2020;
        assert_eq!(
            decline_message(gateway().tokenize(&card).await),
            "Card has expired"
        );
    }

    #[tokio::test]
    async fn current_month_is_still_valid() {
        let now = Utc::now();
        let mut card = valid_card();
        card.exp_month = now.month();
        card.exp_year = now.year();
        assert!(gateway().tokenize(&card).await.is_ok());
    }

    #[tokio::test]
    async fn bad_expiry_month_is_declined() {
        let mut card = valid_card();
        card.exp_month = 13;
        assert_eq!(
            decline_message(gateway().tokenize(&card).await),
            "Invalid expiry date"
        );
    }

    #[tokio::test]
    async fn bad_cvc_is_declined() {
        let mut card = valid_card();
        card.cvc = "12".into();
        assert_eq!(
            decline_message(gateway().tokenize(&card).await),
            "Invalid security code"
        );

        card.cvc = "12a".into();
        assert_eq!(
            decline_message(gateway().tokenize(&card).await),
            "Invalid security code"
        );
    }
}
