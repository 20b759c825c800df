use crate::domain::payment::Payment;
use crate::domain::ports::{PaymentStore, StallStore};
use crate::domain::stall::{Address, Stall, StallId};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for stalls.
///
/// Uses `Arc<RwLock<HashMap<StallId, Stall>>>` for shared concurrent access.
/// The ledger has no persistence layer beyond this state.
#[derive(Default, Clone)]
pub struct InMemoryStallStore {
    stalls: Arc<RwLock<HashMap<StallId, Stall>>>,
}

impl InMemoryStallStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StallStore for InMemoryStallStore {
    async fn store(&self, stall: Stall) -> Result<()> {
        let mut stalls = self.stalls.write().await;
        stalls.insert(stall.id, stall);
        Ok(())
    }

    async fn get(&self, id: StallId) -> Result<Option<Stall>> {
        let stalls = self.stalls.read().await;
        Ok(stalls.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Stall>> {
        let stalls = self.stalls.read().await;
        Ok(stalls.values().cloned().collect())
    }
}

/// A thread-safe in-memory store for payments, keyed by `(stall, buyer)`.
///
/// Refunded payments stay in the map as zeroed records.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<(StallId, Address), Payment>>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn store(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.insert((payment.stall, payment.buyer.clone()), payment);
        Ok(())
    }

    async fn get(&self, stall: StallId, buyer: &Address) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(&(stall, buyer.clone())).cloned())
    }
}
