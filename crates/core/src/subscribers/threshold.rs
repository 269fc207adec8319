// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Edge-triggered low stock watcher

use crate::dispatch::{Publish, Subscriber};
use crate::event::{Event, MachineId};
use crate::fleet::SharedFleet;
use std::cell::RefCell;
use std::collections::HashSet;

/// Default low stock threshold
pub const DEFAULT_THRESHOLD: i64 = 3;

/// Publishes `LowStockWarning` and `StockLevelOk` on threshold crossings
///
/// The watcher is edge-triggered: it remembers which machines are below
/// and only publishes on a transition, so ten consecutive sales under
/// the threshold raise one warning, not ten. It reads stock after the
/// mutation handlers have run, which is why `wire_stock_pipeline`
/// registers it last for each commercial kind.
pub struct ThresholdWatcher {
    fleet: SharedFleet,
    threshold: i64,
    below: RefCell<HashSet<MachineId>>,
}

impl ThresholdWatcher {
    /// Build a watcher, seeding its memory from current stock levels
    pub fn new(fleet: SharedFleet, threshold: i64) -> Self {
        let below = fleet
            .borrow()
            .machines()
            .filter(|m| m.stock < threshold)
            .map(|m| m.id.clone())
            .collect();
        ThresholdWatcher {
            fleet,
            threshold,
            below: RefCell::new(below),
        }
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Whether the watcher currently considers a machine low
    pub fn is_below(&self, machine: &MachineId) -> bool {
        self.below.borrow().contains(machine)
    }
}

impl Subscriber for ThresholdWatcher {
    fn handle(&self, event: &Event, bus: &dyn Publish) {
        let machine = match event {
            Event::Sale { machine, .. } | Event::Refill { machine, .. } => machine,
            _ => return,
        };
        let Some(stock) = self.fleet.borrow().stock_of(machine) else {
            return;
        };

        let was_below = self.below.borrow().contains(machine);
        match (was_below, stock < self.threshold) {
            (false, true) => {
                self.below.borrow_mut().insert(machine.clone());
                bus.publish(Event::LowStockWarning {
                    machine: machine.clone(),
                });
            }
            (true, false) => {
                self.below.borrow_mut().remove(machine);
                bus.publish(Event::StockLevelOk {
                    machine: machine.clone(),
                });
            }
            _ => {}
        }
    }

    fn name(&self) -> &'static str {
        "threshold-watcher"
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
