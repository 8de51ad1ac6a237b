use async_trait::async_trait;
use chrono::Datelike;
use payment_gateway::domain::bank::{
    BankOutcome, BankPaymentRequest, BankPaymentResponse, BankRejection, FailureKind,
};
use payment_gateway::domain::payment::Payment;
use payment_gateway::domain::ports::{AcquiringBank, PaymentStore};
use payment_gateway::domain::submission::Submission;
use payment_gateway::error::{PaymentError, Result};
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

pub fn next_year() -> i32 {
    chrono::Utc::now().year() + 1
}

pub fn valid_submission() -> Submission {
    Submission {
        card_number: Some("4111111111111111".to_owned()),
        expiry_month: Some(12),
        expiry_year: Some(next_year()),
        currency: Some("GBP".to_owned()),
        amount: Some(1050),
        cvv: Some("123".to_owned()),
    }
}

/// What the stubbed bank should do with every call it receives.
pub enum Script {
    Authorize(Option<&'static str>),
    Decline,
    Reject(u16, FailureKind),
    Fail,
}

/// Scripted acquiring bank that records how often it was called.
pub struct StubBank {
    script: Script,
    calls: AtomicUsize,
}

impl StubBank {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AcquiringBank for StubBank {
    async fn submit(&self, _request: BankPaymentRequest) -> Result<BankOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Authorize(code) => Ok(BankOutcome::Processed(BankPaymentResponse {
                authorized: true,
                authorization_code: code.map(str::to_owned),
            })),
            Script::Decline => Ok(BankOutcome::Processed(BankPaymentResponse {
                authorized: false,
                authorization_code: None,
            })),
            Script::Reject(status, kind) => Ok(BankOutcome::Rejected(BankRejection {
                status: *status,
                kind: *kind,
            })),
            Script::Fail => Err(PaymentError::UnexpectedBankStatus(301)),
        }
    }
}

/// In-memory store wrapper that counts writes.
#[derive(Default)]
pub struct CountingStore {
    inner: InMemoryPaymentStore,
    adds: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_count(&self) -> usize {
        self.adds.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentStore for CountingStore {
    async fn add(&self, merchant: &str, payment: Payment) -> Result<()> {
        self.adds.fetch_add(1, Ordering::SeqCst);
        self.inner.add(merchant, payment).await
    }

    async fn get_by_id(&self, merchant: &str, id: Uuid) -> Result<Option<Payment>> {
        self.inner.get_by_id(merchant, id).await
    }
}
