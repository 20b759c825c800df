use super::payment::Payment;
use super::stall::{Address, Stall, StallId};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait StallStore: Send + Sync {
    async fn store(&self, stall: Stall) -> Result<()>;
    async fn get(&self, id: StallId) -> Result<Option<Stall>>;
    async fn get_all(&self) -> Result<Vec<Stall>>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn store(&self, payment: Payment) -> Result<()>;
    async fn get(&self, stall: StallId, buyer: &Address) -> Result<Option<Payment>>;
}

pub type StallStoreBox = Box<dyn StallStore>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;
