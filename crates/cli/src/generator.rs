// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random stock event generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vend_core::{Event, MachineId};

/// Infinite stream of seeded random commercial events
///
/// Sales outnumber refills two to one, quantities are 1..=3, and the
/// target machine is uniform across the fleet. Same seed, same stream.
pub struct EventGenerator {
    machines: Vec<MachineId>,
    rng: StdRng,
}

impl EventGenerator {
    pub fn new(machines: Vec<MachineId>, seed: u64) -> Self {
        EventGenerator {
            machines,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Iterator for EventGenerator {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if self.machines.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.machines.len());
        let machine = self.machines[index].clone();
        let quantity = self.rng.random_range(1..=3);

        if self.rng.random_range(0..3) < 2 {
            Some(Event::Sale { machine, quantity })
        } else {
            Some(Event::Refill { machine, quantity })
        }
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
