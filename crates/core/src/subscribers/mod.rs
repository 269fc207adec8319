// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in subscribers closing the stock feedback loop
//!
//! This module provides:
//! - `SaleHandler` / `RefillHandler` - Apply commercial events to the fleet
//! - `ThresholdWatcher` - Edge-triggered low stock detection
//! - `AlertLogger` - Human-readable alert lines via an `AlertSink`
//!
//! `wire_stock_pipeline` registers them in the order the loop requires.

mod alert;
mod stock;
mod threshold;

pub use alert::{AlertLogger, AlertSink, ConsoleSink, RecordingSink};
pub use stock::{RefillHandler, SaleHandler};
pub use threshold::{ThresholdWatcher, DEFAULT_THRESHOLD};

use crate::dispatch::Dispatcher;
use crate::event::EventKind;
use crate::fleet::SharedFleet;
use std::rc::Rc;

/// Handles to the wired subscribers, kept for later unsubscription
pub struct StockPipeline {
    pub sales: Rc<SaleHandler>,
    pub refills: Rc<RefillHandler>,
    pub watcher: Rc<ThresholdWatcher>,
    pub alerts: Rc<AlertLogger>,
}

/// Register the standard stock pipeline on a dispatcher
///
/// The watcher reads post-mutation stock, so for each commercial kind
/// the mutation handler must be registered before the watcher. This
/// function is the one place that ordering lives.
pub fn wire_stock_pipeline(
    dispatcher: &Dispatcher,
    fleet: SharedFleet,
    threshold: i64,
    sink: Rc<dyn AlertSink>,
) -> StockPipeline {
    let sales = Rc::new(SaleHandler::new(fleet.clone()));
    let refills = Rc::new(RefillHandler::new(fleet.clone()));
    let watcher = Rc::new(ThresholdWatcher::new(fleet, threshold));
    let alerts = Rc::new(AlertLogger::new(sink));

    dispatcher.subscribe(EventKind::Sale, sales.clone());
    dispatcher.subscribe(EventKind::Sale, watcher.clone());
    dispatcher.subscribe(EventKind::Refill, refills.clone());
    dispatcher.subscribe(EventKind::Refill, watcher.clone());
    dispatcher.subscribe(EventKind::LowStockWarning, alerts.clone());
    dispatcher.subscribe(EventKind::StockLevelOk, alerts.clone());

    StockPipeline {
        sales,
        refills,
        watcher,
        alerts,
    }
}
