use crate::domain::event::LedgerEvent;
use crate::domain::stall::{Address, Stall, StallId};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// Output row for final stall state
/// (`stall,owner,category,balance,withdrawn`).
#[derive(Debug, Serialize)]
struct StallRecord {
    stall: StallId,
    owner: Address,
    category: u32,
    balance: Decimal,
    withdrawn: bool,
}

impl From<&Stall> for StallRecord {
    fn from(stall: &Stall) -> Self {
        Self {
            stall: stall.id,
            owner: stall.owner.clone(),
            category: stall.category,
            // Normalized so 2.0 prints as 2, matching the event output.
            balance: stall.balance.0.normalize(),
            withdrawn: stall.withdrawn,
        }
    }
}

/// Writes final stall state as CSV.
pub struct StallWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StallWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_stalls(&mut self, stalls: Vec<Stall>) -> Result<()> {
        for stall in &stalls {
            self.writer.serialize(StallRecord::from(stall))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes drained ledger events as CSV (`event,stall,account,amount`).
pub struct EventWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> EventWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_events(&mut self, events: Vec<LedgerEvent>) -> Result<()> {
        for event in &events {
            self.writer.serialize(event.to_record())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
