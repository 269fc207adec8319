// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alert rendering
//!
//! Turns alert events into human-readable lines through an `AlertSink`.
//! `ConsoleSink` prints to stdout; `RecordingSink` captures lines so
//! tests can assert on them.

use crate::dispatch::{Publish, Subscriber};
use crate::event::Event;
use std::cell::RefCell;
use std::rc::Rc;

/// Destination for rendered alert lines
pub trait AlertSink {
    fn alert(&self, line: &str);
}

/// Prints alert lines to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl AlertSink for ConsoleSink {
    fn alert(&self, line: &str) {
        println!("{}", line);
    }
}

/// Captures alert lines in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl AlertSink for RecordingSink {
    fn alert(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Renders alert events; purely an observer, never publishes
pub struct AlertLogger {
    sink: Rc<dyn AlertSink>,
}

impl AlertLogger {
    pub fn new(sink: Rc<dyn AlertSink>) -> Self {
        AlertLogger { sink }
    }
}

impl Subscriber for AlertLogger {
    fn handle(&self, event: &Event, _bus: &dyn Publish) {
        match event {
            Event::LowStockWarning { machine } => {
                self.sink.alert(&format!(
                    "LOW STOCK WARNING: machine {} is below threshold",
                    machine
                ));
            }
            Event::StockLevelOk { machine } => {
                self.sink
                    .alert(&format!("STOCK LEVEL OK: machine {} is restocked", machine));
            }
            _ => {}
        }
    }

    fn name(&self) -> &'static str {
        "alerts"
    }
}

#[cfg(test)]
#[path = "alert_tests.rs"]
mod tests;
