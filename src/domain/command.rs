use super::money::Amount;
use super::stall::{Address, StallId};
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Register,
    Pay,
    Refund,
    Withdraw,
}

/// One row of the command CSV
/// (`op, caller, stall, category, buyer, amount`).
///
/// Per-operation fields are optional at the row level; dispatch rejects rows
/// missing a field their operation needs.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub op: CommandKind,
    pub caller: Address,
    pub stall: Option<StallId>,
    pub category: Option<u32>,
    pub buyer: Option<Address>,
    pub amount: Option<Decimal>,
}

impl Command {
    pub fn stall_id(&self) -> Result<StallId> {
        self.stall
            .ok_or_else(|| LedgerError::MalformedCommand("missing stall id".to_string()))
    }

    pub fn category(&self) -> Result<u32> {
        self.category
            .ok_or_else(|| LedgerError::MalformedCommand("missing category".to_string()))
    }

    pub fn buyer(&self) -> Result<Address> {
        self.buyer
            .clone()
            .ok_or_else(|| LedgerError::MalformedCommand("missing buyer".to_string()))
    }

    pub fn amount(&self) -> Result<Amount> {
        let value = self
            .amount
            .ok_or_else(|| LedgerError::MalformedCommand("missing amount".to_string()))?;
        Amount::new(value)
    }
}
