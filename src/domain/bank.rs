use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire shape sent to the acquiring bank.
///
/// Field names are the bank's snake_case contract; `expiry_date` is
/// rendered `MM/YYYY`. Debug output redacts the card number and security
/// code.
#[derive(Clone, PartialEq, Serialize)]
pub struct BankPaymentRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl fmt::Debug for BankPaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankPaymentRequest")
            .field("card_number", &"[REDACTED]")
            .field("expiry_date", &self.expiry_date)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &"[REDACTED]")
            .finish()
    }
}

/// Wire shape returned by the bank on a processed call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankPaymentResponse {
    pub authorized: bool,
    #[serde(default)]
    pub authorization_code: Option<String>,
}

/// Classified result of one bank call.
///
/// Infrastructure faults (no response, undecodable body, a status outside
/// the classification table) are not outcomes; they propagate as
/// [`crate::error::PaymentError`].
#[derive(Debug, Clone, PartialEq)]
pub enum BankOutcome {
    /// The bank processed the request and rendered an authorization
    /// decision.
    Processed(BankPaymentResponse),
    /// The bank rejected the call itself with a classifiable HTTP status.
    Rejected(BankRejection),
}

/// A business-classified bank rejection. Nothing is persisted for these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankRejection {
    pub status: u16,
    pub kind: FailureKind,
}

/// Whether an unmodified retry of a rejected call may later succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transient,
    Permanent,
}

impl FailureKind {
    pub fn is_transient(self) -> bool {
        matches!(self, Self::Transient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_snake_case_fields() {
        let request = BankPaymentRequest {
            card_number: "4111111111111111".to_owned(),
            expiry_date: "04/2030".to_owned(),
            currency: "EUR".to_owned(),
            amount: 250,
            cvv: "9876".to_owned(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["card_number"], "4111111111111111");
        assert_eq!(json["expiry_date"], "04/2030");
        assert_eq!(json["amount"], 250);
        assert_eq!(json["cvv"], "9876");
    }

    #[test]
    fn response_tolerates_a_missing_authorization_code() {
        let response: BankPaymentResponse =
            serde_json::from_str(r#"{"authorized":false}"#).unwrap();
        assert!(!response.authorized);
        assert!(response.authorization_code.is_none());
    }

    #[test]
    fn request_debug_redacts_sensitive_fields() {
        let request = BankPaymentRequest {
            card_number: "4111111111111111".to_owned(),
            expiry_date: "04/2030".to_owned(),
            currency: "EUR".to_owned(),
            amount: 250,
            cvv: "9876".to_owned(),
        };

        let rendered = format!("{request:?}");
        assert!(!rendered.contains("4111111111111111"));
        assert!(!rendered.contains("9876"));
    }
}
