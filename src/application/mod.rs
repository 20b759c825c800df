//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `StallLedger` which acts as the primary entry
//! point for ledger operations. It owns the storage backends and executes
//! each operation as one atomic state transition.

pub mod engine;
