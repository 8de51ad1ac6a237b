use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The outcome of one processed submission. A closed two-value set: no
/// pending or intermediate state is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Authorized,
    Declined,
}

/// The immutable record of one payment attempt.
///
/// Created once by the orchestrator after a successful bank round-trip,
/// owned exclusively by the merchant that created it, and never mutated.
/// Only the last four digits of the card number survive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub status: PaymentStatus,
    /// `None` whenever the payment was declined, and `None` when the bank
    /// returned an empty code even if it authorized.
    pub bank_authorization_code: Option<String>,
    pub card_number_last_four: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}
