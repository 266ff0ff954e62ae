//! Enemy registry and the per-tick enemy lifecycle.

use std::collections::BTreeMap;

use path_defence_core::{
    geometry::{point_along_path, PathLengths},
    BulletId, Damage, EnemyId, EnemyKind, EnemyKindId, EnemySnapshot, EnemyStatus, EnemyView,
    Event, Health, Vec2, ENEMY_DEATH_TICKS,
};

/// Multiplier applied to an enemy's base speed.
pub(crate) type Modifier = f32;

/// Authoritative state of a single enemy.
#[derive(Clone, Debug)]
pub(crate) struct EnemyState {
    pub(crate) id: EnemyId,
    pub(crate) kind: EnemyKindId,
    pub(crate) spawn_delay: u32,
    pub(crate) modifiers: Vec<Modifier>,
    pub(crate) position: Vec2,
    pub(crate) distance: f32,
    pub(crate) health: Health,
    pub(crate) base_speed: f32,
    pub(crate) size: f32,
    pub(crate) money: u32,
    pub(crate) status: EnemyStatus,
    pub(crate) death_frame: u32,
    pub(crate) last_bullet: Option<BulletId>,
}

impl EnemyState {
    /// Base speed scaled by every active modifier.
    pub(crate) fn speed(&self) -> f32 {
        self.modifiers.iter().product::<Modifier>() * self.base_speed
    }

    pub(crate) fn snapshot(&self) -> EnemySnapshot {
        EnemySnapshot {
            id: self.id,
            kind: self.kind,
            position: self.position,
            distance: self.distance,
            health: self.health,
            speed: self.speed(),
            size: self.size,
            money: self.money,
            status: self.status,
            death_frame: self.death_frame,
        }
    }
}

/// Enemy whose health ran out during the current tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Death {
    pub(crate) enemy: EnemyId,
    pub(crate) bullet: Option<BulletId>,
    pub(crate) money: u32,
}

/// Registry that stores enemies and manages identifier allocation.
#[derive(Debug)]
pub(crate) struct EnemyRegistry {
    entries: BTreeMap<EnemyId, EnemyState>,
    next_enemy_id: EnemyId,
}

impl EnemyRegistry {
    /// Creates an empty enemy registry with a reset identifier counter.
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_enemy_id: EnemyId::new(0),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get(&self, enemy: EnemyId) -> Option<&EnemyState> {
        self.entries.get(&enemy)
    }

    /// Queues a not-yet-spawned enemy at the start of the path.
    pub(crate) fn queue(
        &mut self,
        kind: EnemyKindId,
        stats: &EnemyKind,
        spawn_delay: u32,
        origin: Vec2,
    ) -> EnemyId {
        let id = self.next_enemy_id;
        self.next_enemy_id = EnemyId::new(id.get().saturating_add(1));

        let _ = self.entries.insert(
            id,
            EnemyState {
                id,
                kind,
                spawn_delay,
                modifiers: Vec::new(),
                position: origin,
                distance: 0.0,
                health: stats.health,
                base_speed: stats.speed,
                size: stats.size,
                money: stats.money,
                status: EnemyStatus::NotSpawned,
                death_frame: 0,
                last_bullet: None,
            },
        );
        id
    }

    /// Advances every running death animation by one tick.
    pub(crate) fn advance_death_animations(&mut self) {
        for enemy in self.entries.values_mut() {
            if enemy.status != EnemyStatus::DeathStart {
                continue;
            }

            enemy.death_frame = enemy.death_frame.saturating_add(1);
            if enemy.death_frame >= ENEMY_DEATH_TICKS {
                enemy.death_frame = ENEMY_DEATH_TICKS;
                enemy.status = EnemyStatus::Dead;
            }
        }
    }

    /// Activates every queued enemy whose spawn delay has elapsed.
    pub(crate) fn activate_due(&mut self, frame: i64, out_events: &mut Vec<Event>) {
        for enemy in self.entries.values_mut() {
            if enemy.status == EnemyStatus::NotSpawned && i64::from(enemy.spawn_delay) <= frame {
                enemy.status = EnemyStatus::Active;
                out_events.push(Event::EnemySpawned { enemy: enemy.id });
            }
        }
    }

    /// Starts the death animation of every active enemy without health.
    pub(crate) fn resolve_deaths(&mut self) -> Vec<Death> {
        self.entries
            .values_mut()
            .filter(|enemy| enemy.status == EnemyStatus::Active && enemy.health.is_depleted())
            .map(|enemy| {
                enemy.status = EnemyStatus::DeathStart;
                enemy.death_frame = 0;
                Death {
                    enemy: enemy.id,
                    bullet: enemy.last_bullet,
                    money: enemy.money,
                }
            })
            .collect()
    }

    /// Walks every active enemy along the path.
    ///
    /// Returns the number of enemies that reached the path end this tick.
    pub(crate) fn advance(
        &mut self,
        path: &[Vec2],
        lengths: &PathLengths,
        out_events: &mut Vec<Event>,
    ) -> u32 {
        let mut passed = 0u32;

        for enemy in self.entries.values_mut() {
            if enemy.status != EnemyStatus::Active {
                continue;
            }

            enemy.distance += enemy.speed();
            if enemy.distance >= lengths.total() {
                enemy.status = EnemyStatus::Passed;
                passed = passed.saturating_add(1);
                out_events.push(Event::EnemyPassed { enemy: enemy.id });
                continue;
            }

            enemy.position = point_along_path(path, lengths, enemy.distance);
        }

        passed
    }

    /// Applies bullet damage and records the bullet for kill attribution.
    ///
    /// Returns `false` when the enemy is no longer tracked.
    pub(crate) fn apply_hit(&mut self, enemy: EnemyId, amount: Damage, bullet: BulletId) -> bool {
        let Some(state) = self.entries.get_mut(&enemy) else {
            return false;
        };

        state.health = state.health.after(amount);
        state.last_bullet = Some(bullet);
        true
    }

    /// Drops enemies that passed the path end or finished dying.
    pub(crate) fn remove_finished(&mut self, out_events: &mut Vec<Event>) {
        self.entries.retain(|id, enemy| {
            let finished = matches!(enemy.status, EnemyStatus::Passed | EnemyStatus::Dead);
            if finished {
                out_events.push(Event::EnemyRemoved { enemy: *id });
            }
            !finished
        });
    }

    /// Captures a read-only view of every tracked enemy.
    pub(crate) fn view(&self) -> EnemyView {
        EnemyView::from_snapshots(self.entries.values().map(EnemyState::snapshot).collect())
    }
}
