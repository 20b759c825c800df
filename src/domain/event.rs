use super::money::Balance;
use super::stall::{Address, StallId};
use rust_decimal::Decimal;
use serde::Serialize;

/// Domain events emitted by ledger operations.
///
/// The ledger appends events to an internal list that callers drain in
/// emission order, making notifications explicit data rather than a side
/// channel.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    RefundIssued {
        stall: StallId,
        buyer: Address,
        amount: Balance,
    },
    FundsWithdrawn {
        stall: StallId,
        recipient: Address,
        amount: Balance,
    },
}

/// Flat CSV row shape for event output
/// (`event,stall,account,amount`).
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct EventRecord {
    pub event: &'static str,
    pub stall: StallId,
    pub account: Address,
    pub amount: Decimal,
}

impl LedgerEvent {
    pub fn to_record(&self) -> EventRecord {
        match self {
            LedgerEvent::RefundIssued {
                stall,
                buyer,
                amount,
            } => EventRecord {
                event: "RefundIssued",
                stall: *stall,
                account: buyer.clone(),
                amount: amount.0.normalize(),
            },
            LedgerEvent::FundsWithdrawn {
                stall,
                recipient,
                amount,
            } => EventRecord {
                event: "FundsWithdrawn",
                stall: *stall,
                account: recipient.clone(),
                amount: amount.0.normalize(),
            },
        }
    }
}
