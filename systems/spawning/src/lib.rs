#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system that expands wave tables into spawn orders.

use path_defence_core::{EnemyKindId, SpawnRule};

/// Single enemy queued by a wave, in the order the wave table lists it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnOrder {
    /// Kind of enemy to create.
    pub kind: EnemyKindId,
    /// Wave tick at which the enemy becomes active.
    pub spawn_delay: u32,
}

/// Pure system that owns a map's wave schedule.
#[derive(Clone, Debug)]
pub struct Spawning {
    waves: Vec<Vec<SpawnRule>>,
}

impl Spawning {
    /// Creates a spawning system for the provided wave tables.
    #[must_use]
    pub fn new(waves: Vec<Vec<SpawnRule>>) -> Self {
        Self { waves }
    }

    /// Number of waves in the schedule.
    #[must_use]
    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }

    /// Reports whether `wave` is the final wave of the schedule.
    #[must_use]
    pub fn is_last_wave(&self, wave: usize) -> bool {
        wave + 1 >= self.wave_count()
    }

    /// Appends one spawn order per enemy of `wave` to `out`.
    ///
    /// Rules are expanded in table order; the n-th enemy of a rule spawns at
    /// `delay + n * interval`. Returns `false` when the wave does not exist.
    pub fn handle(&self, wave: usize, out: &mut Vec<SpawnOrder>) -> bool {
        let Some(rules) = self.waves.get(wave) else {
            return false;
        };

        let total = rules
            .iter()
            .fold(0u32, |total, rule| total.saturating_add(rule.count));
        out.reserve(usize::try_from(total).unwrap_or(0));

        for rule in rules {
            for index in 0..rule.count {
                out.push(SpawnOrder {
                    kind: rule.kind,
                    spawn_delay: rule
                        .delay
                        .saturating_add(index.saturating_mul(rule.interval)),
                });
            }
        }

        true
    }
}
