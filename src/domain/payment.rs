use super::money::Balance;
use super::stall::{Address, StallId};
use serde::{Deserialize, Serialize};

/// A buyer's accumulated contribution to one stall, keyed by
/// `(stall, buyer)`.
///
/// A refund zeroes the record instead of deleting it, so a refunded buyer
/// still reads back as zero.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub stall: StallId,
    pub buyer: Address,
    pub amount: Balance,
}

impl Payment {
    pub fn new(stall: StallId, buyer: Address) -> Self {
        Self {
            stall,
            buyer,
            amount: Balance::ZERO,
        }
    }

    /// Adds a further payment by the same buyer.
    pub fn add(&mut self, amount: Balance) {
        self.amount += amount;
    }

    /// Zeroes the record and returns the amount handed back to the buyer.
    pub fn refund(&mut self) -> Balance {
        let refunded = self.amount;
        self.amount = Balance::ZERO;
        refunded
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}
