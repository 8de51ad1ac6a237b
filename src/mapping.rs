//! Pure transforms between the submission, the bank protocol and the
//! stored record. None of these perform I/O, and all are total over a
//! [`ValidSubmission`]: they are only reached after validation has
//! succeeded and the bank has processed the call.

use crate::domain::bank::{BankPaymentRequest, BankPaymentResponse};
use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::submission::ValidSubmission;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outbound representation of a recorded payment attempt.
///
/// A projection of [`Payment`] minus the bank authorization code, which is
/// never exposed to the merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDto {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

/// Builds the bank wire request, rendering the expiry pair as `MM/YYYY`.
pub fn to_bank_request(submission: &ValidSubmission) -> BankPaymentRequest {
    BankPaymentRequest {
        card_number: submission.card_number.clone(),
        expiry_date: format!("{:02}/{:04}", submission.expiry_month, submission.expiry_year),
        currency: submission.currency.clone(),
        amount: submission.amount,
        cvv: submission.cvv.clone(),
    }
}

/// Builds the persisted record from a processed bank response.
///
/// A fresh id is generated here, on successful completion of the bank call
/// and nowhere else. The authorization code survives only when the bank
/// authorized the payment and returned a non-empty code.
pub fn to_payment(submission: &ValidSubmission, response: &BankPaymentResponse) -> Payment {
    let status = if response.authorized {
        PaymentStatus::Authorized
    } else {
        PaymentStatus::Declined
    };

    let bank_authorization_code = match (status, response.authorization_code.as_deref()) {
        (PaymentStatus::Authorized, Some(code)) if !code.is_empty() => Some(code.to_owned()),
        _ => None,
    };

    // Validation guarantees at least 14 ASCII digits.
    let last_four = submission.card_number[submission.card_number.len() - 4..].to_owned();

    Payment {
        id: Uuid::new_v4(),
        status,
        bank_authorization_code,
        card_number_last_four: last_four,
        expiry_month: submission.expiry_month,
        expiry_year: submission.expiry_year,
        currency: submission.currency.clone(),
        amount: submission.amount,
    }
}

/// Projects a recorded attempt into its outbound representation.
pub fn to_payment_dto(payment: &Payment) -> PaymentDto {
    PaymentDto {
        id: payment.id,
        status: payment.status,
        card_number_last_four: payment.card_number_last_four.clone(),
        expiry_month: payment.expiry_month,
        expiry_year: payment.expiry_year,
        currency: payment.currency.clone(),
        amount: payment.amount,
    }
}
