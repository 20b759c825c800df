//! Domain layer: value objects, entities, events and storage ports.

pub mod command;
pub mod event;
pub mod money;
pub mod payment;
pub mod ports;
pub mod stall;
