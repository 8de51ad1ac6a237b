use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller-supplied payment request, exactly as received.
///
/// Every field is optional: absence is a validation concern, not a parsing
/// concern. The full card number and security code live only here and in
/// the outbound bank request; they are never persisted, and the `Debug`
/// impl redacts them so they cannot reach a log line.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub card_number: Option<String>,
    pub expiry_month: Option<u32>,
    pub expiry_year: Option<i32>,
    pub currency: Option<String>,
    pub amount: Option<i64>,
    pub cvv: Option<String>,
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("card_number", &self.card_number.as_ref().map(|_| "[REDACTED]"))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &self.cvv.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// A submission that passed every validation rule.
///
/// Produced only by [`crate::validation::validate`]; downstream transforms
/// rely on its fields being present and well-formed (digits-only card
/// number of 14 to 19 characters, month in 1..=12, positive amount).
#[derive(Clone, PartialEq)]
pub struct ValidSubmission {
    pub card_number: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl fmt::Debug for ValidSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidSubmission")
            .field("card_number", &"[REDACTED]")
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_card_number_and_cvv() {
        let submission = Submission {
            card_number: Some("4111111111111111".to_owned()),
            expiry_month: Some(12),
            expiry_year: Some(2030),
            currency: Some("GBP".to_owned()),
            amount: Some(1050),
            cvv: Some("123".to_owned()),
        };

        let rendered = format!("{submission:?}");
        assert!(!rendered.contains("4111111111111111"));
        assert!(!rendered.contains("123"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn null_fields_deserialize_as_absent() {
        let raw = r#"{"card_number":null,"expiry_month":null,"expiry_year":null,
                      "currency":null,"amount":null,"cvv":null}"#;
        let submission: Submission = serde_json::from_str(raw).unwrap();
        assert!(submission.card_number.is_none());
        assert!(submission.amount.is_none());
    }
}
