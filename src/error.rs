use crate::domain::stall::{Address, StallId};
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("stall {0} does not exist")]
    StallNotFound(StallId),
    #[error("caller {0} is not the ledger administrator")]
    Unauthorized(Address),
    #[error("payment amount must be positive, got {0}")]
    InvalidAmount(Decimal),
    #[error("no payment on record for buyer {buyer} at stall {stall}")]
    NoPaymentOnRecord { stall: StallId, buyer: Address },
    #[error("stall {0} has no funds to withdraw")]
    NothingToWithdraw(StallId),
    #[error("stall {stall} balance cannot cover a refund of {needed}")]
    InsufficientBalance { stall: StallId, needed: Decimal },
    #[error("malformed command: {0}")]
    MalformedCommand(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
