// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event dispatch for the simulator
//!
//! This module provides:
//! - `Dispatcher` - Route events to kind-keyed subscribers in FIFO order
//! - `Subscriber` / `Publish` - The handler-side capabilities
//! - `Journal` - Ordered record of everything dispatched

mod dispatcher;
mod journal;
mod subscriber;

pub use dispatcher::Dispatcher;
pub use journal::{Journal, JournalRecord};
pub use subscriber::{Publish, Subscriber, SubscriberRef};
