// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory journal of dispatched events

use crate::event::Event;

/// A dispatched event with metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalRecord {
    /// Monotonic sequence number, starting at 1
    pub sequence: u64,
    /// The event name
    pub name: &'static str,
    /// The full event data
    pub event: Event,
}

/// Ordered record of every event the dispatcher delivered
///
/// Events are journaled as they leave the queue, so the journal order
/// is dispatch order, cascades included.
#[derive(Debug, Default)]
pub struct Journal {
    records: Vec<JournalRecord>,
    sequence: u64,
}

impl Journal {
    pub fn new() -> Self {
        Journal {
            records: Vec::new(),
            sequence: 0,
        }
    }

    /// Append an event to the journal
    pub fn append(&mut self, event: &Event) {
        self.sequence += 1;
        self.records.push(JournalRecord {
            sequence: self.sequence,
            name: event.name(),
            event: event.clone(),
        });
    }

    pub fn records(&self) -> &[JournalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "journal_tests.rs"]
mod tests;
