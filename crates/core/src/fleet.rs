// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vending machine fleet state
//!
//! The fleet is the only mutable state in the system. Stock handlers
//! reach it through a `SharedFleet` handle; everything else reads it
//! after the event queue has drained.

use crate::event::MachineId;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

/// Shared handle the stock subscribers mutate through
pub type SharedFleet = Rc<RefCell<Fleet>>;

/// Errors that can occur while loading a fleet definition
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("fleet defines no machines")]
    Empty,
    #[error("duplicate machine id: {0}")]
    DuplicateMachine(String),
    #[error("machine {id}: initial stock must not be negative (got {stock})")]
    NegativeStock { id: String, stock: i64 },
}

/// A single vending machine's observable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    pub id: MachineId,
    pub stock: i64,
}

impl Machine {
    pub fn new(id: impl Into<MachineId>, stock: i64) -> Self {
        Machine {
            id: id.into(),
            stock,
        }
    }
}

/// All machines under simulation, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    machines: BTreeMap<MachineId, Machine>,
}

#[derive(Debug, Deserialize)]
struct FleetDoc {
    #[serde(default)]
    machine: Vec<MachineDoc>,
}

#[derive(Debug, Deserialize)]
struct MachineDoc {
    id: String,
    stock: i64,
}

impl Fleet {
    pub fn new() -> Self {
        Fleet {
            machines: BTreeMap::new(),
        }
    }

    /// Build a fleet of `count` machines with ids "001".. and the same
    /// starting stock on each
    pub fn with_uniform(count: u32, stock: i64) -> Self {
        let mut fleet = Fleet::new();
        for n in 1..=count {
            fleet.insert(Machine::new(format!("{:03}", n), stock));
        }
        fleet
    }

    /// Parse a fleet definition from TOML
    ///
    /// ```toml
    /// [[machine]]
    /// id = "001"
    /// stock = 10
    /// ```
    pub fn parse(input: &str) -> Result<Self, FleetError> {
        let doc: FleetDoc = toml::from_str(input)?;
        if doc.machine.is_empty() {
            return Err(FleetError::Empty);
        }

        let mut fleet = Fleet::new();
        for m in doc.machine {
            if m.stock < 0 {
                return Err(FleetError::NegativeStock {
                    id: m.id,
                    stock: m.stock,
                });
            }
            let id = MachineId::from(m.id);
            if fleet.machines.contains_key(&id) {
                return Err(FleetError::DuplicateMachine(id.0));
            }
            fleet.insert(Machine { id, stock: m.stock });
        }
        Ok(fleet)
    }

    pub fn insert(&mut self, machine: Machine) {
        self.machines.insert(machine.id.clone(), machine);
    }

    pub fn get(&self, id: &MachineId) -> Option<&Machine> {
        self.machines.get(id)
    }

    pub fn stock_of(&self, id: &MachineId) -> Option<i64> {
        self.machines.get(id).map(|m| m.stock)
    }

    /// Apply a signed stock delta. Returns the new level, or `None` for
    /// an unknown machine.
    pub fn adjust(&mut self, id: &MachineId, delta: i64) -> Option<i64> {
        let machine = self.machines.get_mut(id)?;
        machine.stock = machine.stock.saturating_add(delta);
        Some(machine.stock)
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    /// Machines in id order
    pub fn machines(&self) -> impl Iterator<Item = &Machine> {
        self.machines.values()
    }

    pub fn ids(&self) -> Vec<MachineId> {
        self.machines.keys().cloned().collect()
    }

    pub fn into_shared(self) -> SharedFleet {
        Rc::new(RefCell::new(self))
    }
}

#[cfg(test)]
#[path = "fleet_tests.rs"]
mod tests;
