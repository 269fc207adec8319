// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vend - Vending machine stock simulator CLI

mod generator;
mod scenario;

use anyhow::Result;
use clap::Parser;
use generator::EventGenerator;
use rand::Rng;
use std::path::PathBuf;
use std::rc::Rc;
use vend_core::{
    wire_stock_pipeline, ConsoleSink, Dispatcher, Fleet, MachineId, Publish, SharedFleet,
    DEFAULT_THRESHOLD,
};

/// Starting stock for generated machines
const DEFAULT_STOCK: i64 = 10;

#[derive(Parser)]
#[command(name = "vend", version, about = "Vending machine stock simulator")]
struct Cli {
    /// Run the fixed demonstration scenario instead of random events
    #[arg(long, conflicts_with_all = ["events", "machines", "seed", "fleet"])]
    test: bool,

    /// Number of random events to publish
    #[arg(long, default_value = "12")]
    events: u32,

    /// Number of machines in the generated fleet
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u32).range(1..))]
    machines: u32,

    /// Low stock threshold
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: i64,

    /// Random seed (picked from OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Fleet definition file (TOML), replaces the generated fleet
    #[arg(long, value_name = "PATH", conflicts_with = "machines")]
    fleet: Option<PathBuf>,
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let fleet = if cli.test {
        scenario::fleet()
    } else {
        build_fleet(&cli)?
    }
    .into_shared();

    let dispatcher = Dispatcher::new();
    wire_stock_pipeline(&dispatcher, fleet.clone(), cli.threshold, Rc::new(ConsoleSink));
    tracing::debug!(
        machines = fleet.borrow().len(),
        threshold = cli.threshold,
        "stock pipeline wired"
    );

    if cli.test {
        run_scripted(&dispatcher, &fleet);
    } else {
        run_random(&cli, &dispatcher, &fleet);
    }

    if dispatcher.faults() > 0 {
        tracing::warn!(faults = dispatcher.faults(), "subscriber faults during run");
    }

    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_fleet(cli: &Cli) -> Result<Fleet> {
    let Some(path) = &cli.fleet else {
        return Ok(Fleet::with_uniform(cli.machines, DEFAULT_STOCK));
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read fleet file {}: {}", path.display(), e))?;
    Fleet::parse(&content)
        .map_err(|e| anyhow::anyhow!("invalid fleet file {}: {}", path.display(), e))
}

fn run_scripted(dispatcher: &Dispatcher, fleet: &SharedFleet) {
    for event in scenario::scripted_events() {
        dispatcher.publish(event);
    }

    let machine = MachineId::from(scenario::TEST_MACHINE);
    if let Some(stock) = fleet.borrow().stock_of(&machine) {
        println!("machine {} final stock: {}", machine, stock);
    }
}

fn run_random(cli: &Cli, dispatcher: &Dispatcher, fleet: &SharedFleet) {
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    println!("seed: {}", seed);

    let generator = EventGenerator::new(fleet.borrow().ids(), seed);
    for event in generator.take(cli.events as usize) {
        dispatcher.publish(event);
    }

    println!("final stock:");
    for machine in fleet.borrow().machines() {
        println!("machine {}: {}", machine.id, machine.stock);
    }
}
