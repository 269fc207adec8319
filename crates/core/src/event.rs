// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stock events and their classification
//!
//! Every change in the system is expressed as an `Event`: commercial
//! movements (`Sale`, `Refill`) and the alerts derived from them
//! (`LowStockWarning`, `StockLevelOk`). Subscribers register against an
//! `EventKind`, never against individual machines.

/// Unique identifier for a vending machine
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MachineId(pub String);

impl std::fmt::Display for MachineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MachineId {
    fn from(s: String) -> Self {
        MachineId(s)
    }
}

impl From<&str> for MachineId {
    fn from(s: &str) -> Self {
        MachineId(s.to_string())
    }
}

/// Discriminant keying subscriber registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Sale,
    Refill,
    LowStockWarning,
    StockLevelOk,
}

/// A single stock movement or alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A purchase removed `quantity` units from a machine
    Sale { machine: MachineId, quantity: u32 },

    /// A restock added `quantity` units to a machine
    Refill { machine: MachineId, quantity: u32 },

    /// Stock dropped below the configured threshold
    LowStockWarning { machine: MachineId },

    /// Stock climbed back to or above the threshold
    StockLevelOk { machine: MachineId },
}

impl Event {
    /// Kind used to look up subscribers for this event
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Sale { .. } => EventKind::Sale,
            Event::Refill { .. } => EventKind::Refill,
            Event::LowStockWarning { .. } => EventKind::LowStockWarning,
            Event::StockLevelOk { .. } => EventKind::StockLevelOk,
        }
    }

    /// The machine this event concerns
    pub fn machine(&self) -> &MachineId {
        match self {
            Event::Sale { machine, .. }
            | Event::Refill { machine, .. }
            | Event::LowStockWarning { machine }
            | Event::StockLevelOk { machine } => machine,
        }
    }

    /// Units moved, for commercial events
    pub fn quantity(&self) -> Option<u32> {
        match self {
            Event::Sale { quantity, .. } | Event::Refill { quantity, .. } => Some(*quantity),
            Event::LowStockWarning { .. } | Event::StockLevelOk { .. } => None,
        }
    }

    /// Event name for logs and the journal (e.g., "machine:sale")
    pub fn name(&self) -> &'static str {
        match self {
            Event::Sale { .. } => "machine:sale",
            Event::Refill { .. } => "machine:refill",
            Event::LowStockWarning { .. } => "stock:low",
            Event::StockLevelOk { .. } => "stock:ok",
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
