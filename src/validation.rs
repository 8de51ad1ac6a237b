use crate::domain::submission::{Submission, ValidSubmission};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Currencies this gateway accepts.
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["CHF", "EUR", "GBP"];

/// Accumulated validation violations for one submission.
///
/// `field_errors` is keyed by the wire field name; `request_errors` carries
/// violations that belong to no single field (the expiry combination rule).
/// Guaranteed non-empty whenever [`validate`] returns it.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ValidationErrors {
    pub field_errors: BTreeMap<&'static str, Vec<String>>,
    pub request_errors: Vec<String>,
}

impl ValidationErrors {
    fn push_field(&mut self, field: &'static str, message: impl Into<String>) {
        self.field_errors.entry(field).or_default().push(message.into());
    }

    fn push_request(&mut self, message: impl Into<String>) {
        self.request_errors.push(message.into());
    }

    pub fn field(&self, field: &str) -> Option<&Vec<String>> {
        self.field_errors.get(field)
    }

    pub fn len(&self) -> usize {
        self.field_errors.values().map(Vec::len).sum::<usize>() + self.request_errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty() && self.request_errors.is_empty()
    }
}

/// Checks every rule and collects every violation; no short-circuiting and
/// no I/O. The valid case is a parse: the returned [`ValidSubmission`]
/// carries non-optional fields so downstream transforms are total.
pub fn validate(submission: &Submission) -> Result<ValidSubmission, ValidationErrors> {
    validate_at(submission, first_of_current_month())
}

fn first_of_current_month() -> NaiveDate {
    let today = Utc::now().date_naive();
    today.with_day(1).unwrap_or(today)
}

pub(crate) fn validate_at(
    submission: &Submission,
    current_month: NaiveDate,
) -> Result<ValidSubmission, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let card_number = match submission.card_number.as_deref() {
        None | Some("") => {
            errors.push_field("card_number", "Card number is required");
            None
        }
        Some(value) => {
            if !value.chars().all(|c| c.is_ascii_digit()) {
                errors.push_field("card_number", "Card number must contain only digits");
            }
            if value.len() < 14 || value.len() > 19 {
                errors.push_field(
                    "card_number",
                    "Card number must be between 14 and 19 digits long",
                );
            }
            Some(value.to_owned())
        }
    };

    let expiry_month = match submission.expiry_month {
        None => {
            errors.push_field("expiry_month", "Expiry month is required");
            None
        }
        Some(month) if !(1..=12).contains(&month) => {
            errors.push_field("expiry_month", "Expiry month must be between 1 and 12");
            None
        }
        Some(month) => Some(month),
    };

    let expiry_year = match submission.expiry_year {
        None => {
            errors.push_field("expiry_year", "Expiry year is required");
            None
        }
        Some(year) => Some(year),
    };

    // The pair must form a calendar month strictly after the current one; a
    // card expiring this month is already invalid. Reported against the
    // request rather than either field, and also fires when no date can be
    // formed from the pair at all.
    let expiry = expiry_month
        .zip(expiry_year)
        .and_then(|(month, year)| NaiveDate::from_ymd_opt(year, month, 1));
    match expiry {
        Some(date) if date > current_month => {}
        _ => errors.push_request("Expiry month and year must be in the future"),
    }

    let currency = match submission.currency.as_deref() {
        None | Some("") => {
            errors.push_field("currency", "Currency is required");
            None
        }
        Some(value) => {
            if !SUPPORTED_CURRENCIES.contains(&value) {
                errors.push_field(
                    "currency",
                    format!(
                        "'{value}' is not a supported currency. It must be one of: {}",
                        SUPPORTED_CURRENCIES.join(", ")
                    ),
                );
            }
            Some(value.to_owned())
        }
    };

    let amount = match submission.amount {
        None => {
            errors.push_field("amount", "Amount is required");
            None
        }
        Some(amount) if amount <= 0 => {
            errors.push_field("amount", "Amount must be greater than zero");
            None
        }
        Some(amount) => Some(amount),
    };

    let cvv = match submission.cvv.as_deref() {
        None | Some("") => {
            errors.push_field("cvv", "CVV is required");
            None
        }
        Some(value) => {
            if !value.chars().all(|c| c.is_ascii_digit()) {
                errors.push_field("cvv", "CVV must contain only digits");
            }
            if value.len() < 3 || value.len() > 4 {
                errors.push_field("cvv", "CVV must be between 3 and 4 digits long");
            }
            Some(value.to_owned())
        }
    };

    match (card_number, expiry_month, expiry_year, currency, amount, cvv) {
        (
            Some(card_number),
            Some(expiry_month),
            Some(expiry_year),
            Some(currency),
            Some(amount),
            Some(cvv),
        ) if errors.is_empty() => Ok(ValidSubmission {
            card_number,
            expiry_month,
            expiry_year,
            currency,
            amount,
            cvv,
        }),
        _ => Err(errors),
    }
}
