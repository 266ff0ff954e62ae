#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Path Defence level without a display.

mod scenario;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use path_defence_core::{Command, Event};
use path_defence_world::{apply, query, Level};

use scenario::{Placement, Scenario};

#[derive(Debug, Parser)]
#[command(name = "path-defence")]
#[command(about = "Simulates a Path Defence level headlessly and reports the outcome")]
struct Args {
    /// Scenario JSON holding `config`, `catalog` and `map`. Defaults to the bundled demo.
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Upper bound on the number of simulated ticks.
    #[arg(long, default_value_t = 20_000)]
    ticks: u32,
    /// Tower placed before the first tick, written as `KIND@X,Y`. Repeatable.
    #[arg(long = "place", value_name = "KIND@X,Y")]
    placements: Vec<Placement>,
}

/// Running totals gathered from the level's events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Tally {
    ticks: u32,
    fired: u32,
    killed: u32,
    passed: u32,
    rejected: u32,
    missing: u32,
}

impl Tally {
    fn record(&mut self, event: &Event) {
        match event {
            Event::BulletFired { .. } => self.fired += 1,
            Event::EnemyDied { .. } => self.killed += 1,
            Event::EnemyPassed { .. } => self.passed += 1,
            Event::TowerPlacementRejected {
                kind,
                position,
                reason,
            } => {
                self.rejected += 1;
                log::warn!("tower {kind} at {position} was not placed: {reason}");
            }
            Event::EnemyKindMissing { wave, kind } => {
                self.missing += 1;
                log::warn!("wave {wave} names unknown enemy kind {kind}");
            }
            _ => {}
        }
    }
}

/// Entry point for the Path Defence command-line interface.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::demo()?,
    };
    let mut events = Vec::new();
    let mut level = Level::new(scenario.config, scenario.catalog, scenario.map, &mut events);
    let tally = run(&mut level, events, &args.placements, args.ticks);

    let scoreboard = query::scoreboard(&level);
    println!("{:?} after {} ticks", scoreboard.status, tally.ticks);
    println!(
        "wave {}  lives {}  money {}",
        scoreboard.wave, scoreboard.lives, scoreboard.money
    );
    println!(
        "{} bullets fired, {} enemies killed, {} passed",
        tally.fired, tally.killed, tally.passed
    );
    if tally.rejected > 0 {
        println!("{} placements rejected", tally.rejected);
    }
    if tally.missing > 0 {
        println!("{} spawn rules skipped for unknown enemy kinds", tally.missing);
    }
    for tower in query::tower_view(&level).iter() {
        println!(
            "  tower #{} (kind {}) at {}: {} kills",
            tower.id.get(),
            tower.kind,
            tower.position,
            tower.kills
        );
    }

    Ok(())
}

/// Applies `placements`, then ticks until the level ends or `max_ticks` is reached.
///
/// `events` holds anything raised while the level was built.
fn run(
    level: &mut Level,
    mut events: Vec<Event>,
    placements: &[Placement],
    max_ticks: u32,
) -> Tally {
    let mut tally = Tally::default();

    for placement in placements {
        apply(level, placement.command(), &mut events);
    }

    while tally.ticks < max_ticks && !query::status(level).is_terminal() {
        apply(level, Command::Tick, &mut events);
        tally.ticks += 1;
        for event in events.drain(..) {
            tally.record(&event);
        }
    }
    for event in events.drain(..) {
        tally.record(&event);
    }

    tally
}
