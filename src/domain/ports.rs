use super::bank::{BankOutcome, BankPaymentRequest};
use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Outbound port to the external authorization service.
#[async_trait]
pub trait AcquiringBank: Send + Sync {
    /// Issues exactly one authorization call; no internal retry.
    async fn submit(&self, request: BankPaymentRequest) -> Result<BankOutcome>;
}

/// Merchant-partitioned store of payment attempts.
///
/// Every call takes the owning merchant explicitly. An id that exists under
/// a different merchant must be indistinguishable from one that does not
/// exist at all.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn add(&self, merchant: &str, payment: Payment) -> Result<()>;
    async fn get_by_id(&self, merchant: &str, id: Uuid) -> Result<Option<Payment>>;
}

pub type AcquiringBankArc = Arc<dyn AcquiringBank>;
pub type PaymentStoreArc = Arc<dyn PaymentStore>;
