// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stock mutation handlers
//!
//! `SaleHandler` and `RefillHandler` are the only writers of fleet
//! stock. Events naming an unknown machine are dropped with a debug
//! line rather than treated as errors.

use crate::dispatch::{Publish, Subscriber};
use crate::event::Event;
use crate::fleet::SharedFleet;

/// Applies `Sale` events to the fleet
pub struct SaleHandler {
    fleet: SharedFleet,
}

impl SaleHandler {
    pub fn new(fleet: SharedFleet) -> Self {
        SaleHandler { fleet }
    }
}

impl Subscriber for SaleHandler {
    fn handle(&self, event: &Event, _bus: &dyn Publish) {
        let Event::Sale { machine, quantity } = event else {
            return;
        };
        let adjusted = self
            .fleet
            .borrow_mut()
            .adjust(machine, -i64::from(*quantity));
        if adjusted.is_none() {
            tracing::debug!(machine = %machine, "sale for unknown machine ignored");
        }
    }

    fn name(&self) -> &'static str {
        "sales"
    }
}

/// Applies `Refill` events to the fleet
pub struct RefillHandler {
    fleet: SharedFleet,
}

impl RefillHandler {
    pub fn new(fleet: SharedFleet) -> Self {
        RefillHandler { fleet }
    }
}

impl Subscriber for RefillHandler {
    fn handle(&self, event: &Event, _bus: &dyn Publish) {
        let Event::Refill { machine, quantity } = event else {
            return;
        };
        let adjusted = self.fleet.borrow_mut().adjust(machine, i64::from(*quantity));
        if adjusted.is_none() {
            tracing::debug!(machine = %machine, "refill for unknown machine ignored");
        }
    }

    fn name(&self) -> &'static str {
        "refills"
    }
}

#[cfg(test)]
#[path = "stock_tests.rs"]
mod tests;
