#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that computes deterministic tower targets from level snapshots.
//!
//! Towers prefer the enemy that travelled furthest along the path, which is
//! the one closest to breaching. Equal distances fall back to the smaller
//! enemy identifier so repeated runs always pick the same target.

use std::cmp::Ordering;

use path_defence_core::{
    geometry::within_circle, EnemyId, EnemySnapshot, EnemyStatus, EnemyView, GameStatus, TowerId,
    TowerTarget, TowerView, Vec2,
};

/// Tower targeting system that reuses scratch buffers to avoid repeated allocations.
#[derive(Debug, Default)]
pub struct TowerTargeting {
    tower_workspace: Vec<TowerWorkspace>,
    enemy_workspace: Vec<EnemyCandidate>,
}

impl TowerTargeting {
    /// Creates a new tower targeting system with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes targets for every ready tower with an active enemy in range.
    ///
    /// The output buffer is cleared before populating it with the latest
    /// assignments, ordered by tower identifier.
    pub fn handle(
        &mut self,
        status: GameStatus,
        towers: &TowerView,
        enemies: &EnemyView,
        out: &mut Vec<TowerTarget>,
    ) {
        out.clear();

        if !status.allows_ticks() {
            return;
        }

        self.prepare_tower_workspace(towers);
        if self.tower_workspace.is_empty() {
            return;
        }

        self.prepare_enemy_workspace(enemies);
        if self.enemy_workspace.is_empty() {
            return;
        }

        for tower in &self.tower_workspace {
            let mut best: Option<EnemyCandidate> = None;

            for candidate in &self.enemy_workspace {
                if !within_circle(candidate.position, tower.position, tower.range) {
                    continue;
                }

                match &mut best {
                    Some(existing) => {
                        if candidate.precedes(existing) {
                            *existing = *candidate;
                        }
                    }
                    None => best = Some(*candidate),
                }
            }

            if let Some(best_candidate) = best {
                out.push(TowerTarget {
                    tower: tower.id,
                    enemy: best_candidate.id,
                    tower_position: tower.position,
                    enemy_position: best_candidate.position,
                });
            }
        }
    }

    fn prepare_tower_workspace(&mut self, towers: &TowerView) {
        self.tower_workspace.clear();
        self.tower_workspace.extend(
            towers
                .iter()
                .filter(|snapshot| snapshot.ready && snapshot.range > 0.0)
                .map(|snapshot| TowerWorkspace {
                    id: snapshot.id,
                    position: snapshot.position,
                    range: snapshot.range,
                }),
        );
    }

    fn prepare_enemy_workspace(&mut self, enemies: &EnemyView) {
        self.enemy_workspace.clear();
        self.enemy_workspace
            .extend(enemies.active().map(EnemyCandidate::from_snapshot));
    }
}

/// Selects the active enemy furthest along the path, if any.
///
/// Used to retarget homing bullets, which ignore tower range.
pub fn select_furthest<'a, I>(enemies: I) -> Option<&'a EnemySnapshot>
where
    I: IntoIterator<Item = &'a EnemySnapshot>,
{
    enemies
        .into_iter()
        .filter(|snapshot| snapshot.status == EnemyStatus::Active)
        .fold(None, |best: Option<&EnemySnapshot>, snapshot| match best {
            Some(existing)
                if !EnemyCandidate::from_snapshot(snapshot)
                    .precedes(&EnemyCandidate::from_snapshot(existing)) =>
            {
                Some(existing)
            }
            _ => Some(snapshot),
        })
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TowerWorkspace {
    id: TowerId,
    position: Vec2,
    range: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct EnemyCandidate {
    id: EnemyId,
    position: Vec2,
    distance: f32,
}

impl EnemyCandidate {
    fn from_snapshot(snapshot: &EnemySnapshot) -> Self {
        Self {
            id: snapshot.id,
            position: snapshot.position,
            distance: snapshot.distance,
        }
    }

    fn precedes(&self, other: &Self) -> bool {
        match self.distance.total_cmp(&other.distance) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.id < other.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_defence_core::{EnemyKindId, Health};

    fn enemy(id: u32, distance: f32, status: EnemyStatus) -> EnemySnapshot {
        EnemySnapshot {
            id: EnemyId::new(id),
            kind: EnemyKindId::new(0),
            position: Vec2::new(distance, 0.0),
            distance,
            health: Health::new(1),
            speed: 1.0,
            size: 10.0,
            money: 1,
            status,
            death_frame: 0,
        }
    }

    #[test]
    fn furthest_skips_inactive_enemies() {
        let enemies = [
            enemy(1, 10.0, EnemyStatus::Active),
            enemy(2, 50.0, EnemyStatus::DeathStart),
            enemy(3, 30.0, EnemyStatus::Active),
        ];
        let best = select_furthest(&enemies).expect("active enemy");
        assert_eq!(best.id, EnemyId::new(3));
    }

    #[test]
    fn furthest_prefers_smaller_id_on_ties() {
        let enemies = [
            enemy(7, 10.0, EnemyStatus::Active),
            enemy(4, 10.0, EnemyStatus::Active),
        ];
        let best = select_furthest(&enemies).expect("active enemy");
        assert_eq!(best.id, EnemyId::new(4));
    }

    #[test]
    fn furthest_of_nothing_is_none() {
        let enemies = [enemy(1, 10.0, EnemyStatus::NotSpawned)];
        assert!(select_furthest(&enemies).is_none());
    }
}
