use crate::domain::bank::{BankOutcome, BankRejection};
use crate::domain::payment::Payment;
use crate::domain::ports::{AcquiringBankArc, PaymentStoreArc};
use crate::domain::submission::Submission;
use crate::error::{PaymentError, Result};
use crate::mapping;
use crate::validation::{self, ValidationErrors};
use uuid::Uuid;

/// Terminal outcome of one submission.
///
/// Every caller-fixable or retry-informing failure is a value here; only
/// infrastructure faults leave `create_payment` as an `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum CreatePaymentOutcome {
    Created(Payment),
    RejectedValidation(ValidationErrors),
    BankRejected(BankRejection),
}

/// Sequences one submission through validation, the bank call and
/// persistence. The only component with cross-cutting knowledge; its
/// collaborators are handed over at construction.
pub struct PaymentService {
    bank: AcquiringBankArc,
    store: PaymentStoreArc,
}

impl PaymentService {
    pub fn new(bank: AcquiringBankArc, store: PaymentStoreArc) -> Self {
        Self { bank, store }
    }

    /// Processes one submission end to end.
    ///
    /// A validation rejection returns before the bank or the store is
    /// touched, and a classified bank rejection persists nothing. Once the
    /// bank has processed the call, the record is written even if the
    /// caller has gone away: an authorized payment must never go
    /// unrecorded.
    pub async fn create_payment(
        &self,
        merchant: &str,
        submission: &Submission,
    ) -> Result<CreatePaymentOutcome> {
        let valid = match validation::validate(submission) {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(
                    merchant,
                    violations = errors.len(),
                    "submission rejected by validation"
                );
                return Ok(CreatePaymentOutcome::RejectedValidation(errors));
            }
        };

        let request = mapping::to_bank_request(&valid);
        let response = match self.bank.submit(request).await? {
            BankOutcome::Rejected(rejection) => {
                return Ok(CreatePaymentOutcome::BankRejected(rejection));
            }
            BankOutcome::Processed(response) => response,
        };

        let payment = mapping::to_payment(&valid, &response);

        // Detached task: dropping the caller's future must not abandon the
        // write after the bank has already rendered a decision.
        let store = self.store.clone();
        let owner = merchant.to_owned();
        let record = payment.clone();
        tokio::spawn(async move { store.add(&owner, record).await })
            .await
            .map_err(|e| PaymentError::Storage(e.to_string()))??;

        tracing::info!(
            merchant,
            payment_id = %payment.id,
            status = ?payment.status,
            "payment attempt recorded"
        );
        Ok(CreatePaymentOutcome::Created(payment))
    }

    /// Point lookup of a previously recorded attempt, scoped to its owner.
    /// Never touches the validator or the bank.
    pub async fn get_payment(&self, merchant: &str, id: Uuid) -> Result<Option<Payment>> {
        self.store.get_by_id(merchant, id).await
    }
}
