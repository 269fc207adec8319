// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed demonstration scenario

use vend_core::{Event, Fleet, Machine, MachineId};

/// Machine the scripted scenario runs against
pub const TEST_MACHINE: &str = "001";

/// One machine, ten units
pub fn fleet() -> Fleet {
    let mut fleet = Fleet::new();
    fleet.insert(Machine::new(TEST_MACHINE, 10));
    fleet
}

/// Four sales of two units, then a refill of three
///
/// Starting from ten, stock crosses the default threshold on the
/// fourth sale (one warning) and recovers on the refill (one ok),
/// ending at five.
pub fn scripted_events() -> Vec<Event> {
    let machine = MachineId::from(TEST_MACHINE);
    vec![
        Event::Sale {
            machine: machine.clone(),
            quantity: 2,
        },
        Event::Sale {
            machine: machine.clone(),
            quantity: 2,
        },
        Event::Sale {
            machine: machine.clone(),
            quantity: 2,
        },
        Event::Sale {
            machine: machine.clone(),
            quantity: 2,
        },
        Event::Refill {
            machine,
            quantity: 3,
        },
    ]
}
