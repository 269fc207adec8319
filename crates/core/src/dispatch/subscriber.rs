// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriber and publish capabilities

use crate::event::Event;
use std::rc::Rc;

/// Shared handle to a registered subscriber
///
/// Registration and removal use pointer identity, so the same handle
/// that went into `subscribe` must be presented to `unsubscribe`.
pub type SubscriberRef = Rc<dyn Subscriber>;

/// Capability to enqueue an event for dispatch
///
/// Handlers get this rather than the full dispatcher; publishing from
/// inside a running drain only appends to the pending queue.
pub trait Publish {
    fn publish(&self, event: Event);
}

/// A handler invoked for every event of a kind it subscribed to
pub trait Subscriber {
    /// React to one event. Follow-up events go through `bus`.
    fn handle(&self, event: &Event, bus: &dyn Publish);

    /// Label used in logs when this subscriber faults
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
