use super::money::Balance;
use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential stall identifier, assigned from 1 upwards by the ledger.
pub type StallId = u64;

/// Account identity. Every ledger operation takes the caller's address as an
/// explicit parameter instead of relying on ambient execution context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered vendor stall.
///
/// Tracks the registering owner, an opaque category code, the uncollected
/// balance and whether funds have ever been withdrawn. The `withdrawn` flag
/// latches: a later payment credits the balance but does not clear it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Stall {
    pub id: StallId,
    pub owner: Address,
    pub category: u32,
    pub balance: Balance,
    pub withdrawn: bool,
}

impl Stall {
    pub fn new(id: StallId, owner: Address, category: u32) -> Self {
        Self {
            id,
            owner,
            category,
            balance: Balance::ZERO,
            withdrawn: false,
        }
    }

    /// Credits a payment to the uncollected balance.
    pub fn credit(&mut self, amount: Balance) {
        self.balance += amount;
    }

    /// Removes a refunded amount from the uncollected balance.
    pub fn debit(&mut self, amount: Balance) -> Result<()> {
        if self.balance >= amount {
            self.balance -= amount;
            Ok(())
        } else {
            Err(LedgerError::InsufficientBalance {
                stall: self.id,
                needed: amount.0,
            })
        }
    }

    /// Empties the balance for payout and latches the withdrawn flag.
    pub fn withdraw_all(&mut self) -> Balance {
        let amount = self.balance;
        self.balance = Balance::ZERO;
        self.withdrawn = true;
        amount
    }
}
