use crate::domain::payment::Payment;
use crate::domain::ports::PaymentStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A thread-safe, process-lifetime store of payment attempts.
///
/// Uses `Arc<RwLock<HashMap<..>>>` for shared concurrent access, partitioned
/// merchant-first: `merchant -> payment id -> Payment`. A lookup under the
/// wrong merchant is indistinguishable from a missing id. A production
/// replacement must preserve both properties.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<String, HashMap<Uuid, Payment>>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn add(&self, merchant: &str, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments
            .entry(merchant.to_owned())
            .or_default()
            .insert(payment.id, payment);
        Ok(())
    }

    async fn get_by_id(&self, merchant: &str, id: Uuid) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments
            .get(merchant)
            .and_then(|partition| partition.get(&id))
            .cloned())
    }
}
