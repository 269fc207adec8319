//! vend-core: Core library for the vend stock simulator
//!
//! This crate provides:
//! - Typed stock events and the vending machine fleet they act on
//! - A synchronous, re-entrant-safe pub/sub dispatcher with a journal
//! - The built-in subscribers that close the stock feedback loop

pub mod dispatch;
pub mod event;
pub mod fleet;
pub mod subscribers;

// Re-exports
pub use dispatch::{Dispatcher, Journal, JournalRecord, Publish, Subscriber, SubscriberRef};
pub use event::{Event, EventKind, MachineId};
pub use fleet::{Fleet, FleetError, Machine, SharedFleet};

// Re-export subscribers
pub use subscribers::{
    wire_stock_pipeline, AlertLogger, AlertSink, ConsoleSink, RecordingSink, RefillHandler,
    SaleHandler, StockPipeline, ThresholdWatcher, DEFAULT_THRESHOLD,
};
