// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous pub/sub dispatcher
//!
//! One thread, one FIFO queue, one drain loop. Publishing from inside a
//! handler appends to the queue already being drained, which gives
//! cascading events breadth-first order instead of recursive dispatch.

use super::journal::{Journal, JournalRecord};
use super::subscriber::{Publish, Subscriber, SubscriberRef};
use crate::event::{Event, EventKind};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

/// Single-threaded event dispatcher
///
/// All methods take `&self`; interior mutability keeps every operation
/// legal from inside a running handler. Table changes made mid-drain
/// apply from the next event on, never to the event being delivered.
pub struct Dispatcher {
    table: RefCell<HashMap<EventKind, Vec<SubscriberRef>>>,
    queue: RefCell<VecDeque<Event>>,
    draining: Cell<bool>,
    faults: Cell<u64>,
    journal: RefCell<Journal>,
}

/// Clears the draining flag when the drain loop exits, unwinds included
struct DrainGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> DrainGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        DrainGuard { flag }
    }
}

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {
            table: RefCell::new(HashMap::new()),
            queue: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
            faults: Cell::new(0),
            journal: RefCell::new(Journal::new()),
        }
    }

    /// Register a subscriber for one event kind
    ///
    /// Subscribers for a kind run in registration order. Registering the
    /// same handle twice means two invocations per event.
    pub fn subscribe(&self, kind: EventKind, subscriber: SubscriberRef) {
        self.table
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(subscriber);
    }

    /// Remove every registration of `subscriber` for `kind`
    ///
    /// Matching is by pointer identity; a handle registered twice is
    /// gone after one call. Handles that were never registered are a
    /// no-op, and a kind whose last subscriber leaves loses its table
    /// entry.
    pub fn unsubscribe(&self, kind: EventKind, subscriber: &SubscriberRef) {
        let mut table = self.table.borrow_mut();
        let Some(subs) = table.get_mut(&kind) else {
            return;
        };
        subs.retain(|s| !Rc::ptr_eq(s, subscriber));
        if subs.is_empty() {
            table.remove(&kind);
        }
    }

    /// Number of current registrations for a kind
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.table.borrow().get(&kind).map_or(0, Vec::len)
    }

    /// Handler faults swallowed so far
    pub fn faults(&self) -> u64 {
        self.faults.get()
    }

    /// Snapshot of the dispatch journal
    pub fn journal(&self) -> Vec<JournalRecord> {
        self.journal.borrow().records().to_vec()
    }

    /// Deliver queued events until the queue is empty
    ///
    /// Each event is journaled, then delivered to a snapshot of its
    /// kind's subscriber list taken as the event leaves the queue. A
    /// panicking handler is counted and skipped; the remaining
    /// subscribers still run.
    fn drain(&self) {
        let _guard = DrainGuard::engage(&self.draining);

        loop {
            let event = match self.queue.borrow_mut().pop_front() {
                Some(event) => event,
                None => break,
            };

            self.journal.borrow_mut().append(&event);

            let snapshot: Vec<SubscriberRef> = self
                .table
                .borrow()
                .get(&event.kind())
                .cloned()
                .unwrap_or_default();

            for subscriber in &snapshot {
                // No table or queue borrow is held here, so the handler
                // may publish, subscribe, or unsubscribe freely.
                let result = catch_unwind(AssertUnwindSafe(|| {
                    subscriber.handle(&event, self);
                }));
                if result.is_err() {
                    self.faults.set(self.faults.get() + 1);
                    tracing::warn!(
                        subscriber = subscriber.name(),
                        event = event.name(),
                        "subscriber panicked during dispatch"
                    );
                }
            }
        }
    }
}

impl Publish for Dispatcher {
    /// Queue an event, then drain unless a drain is already running
    fn publish(&self, event: Event) {
        self.queue.borrow_mut().push_back(event);
        if !self.draining.get() {
            self.drain();
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
