//! Authoritative tower state management utilities.

use std::collections::BTreeMap;

use path_defence_core::{
    BulletTemplate, TowerId, TowerKind, TowerKindId, TowerSnapshot, TowerView, Vec2,
};

/// Snapshot of a tower stored inside the level.
#[derive(Clone, Debug)]
pub(crate) struct TowerState {
    /// Identifier allocated by the level for the tower.
    pub(crate) id: TowerId,
    /// Static kind of the tower.
    pub(crate) kind: TowerKindId,
    /// Playfield position of the tower.
    pub(crate) position: Vec2,
    /// Radius of the targeting circle.
    pub(crate) range: f32,
    /// Ticks between consecutive shots.
    pub(crate) delay: u32,
    /// Ticks left until the tower may fire again.
    pub(crate) cooldown: u32,
    /// Projectile copied from the tower table.
    pub(crate) bullet: Option<BulletTemplate>,
    /// Whether the tower is the current selection.
    pub(crate) selected: bool,
    /// Enemies killed by this tower's bullets.
    pub(crate) kills: u32,
}

impl TowerState {
    pub(crate) fn snapshot(&self) -> TowerSnapshot {
        TowerSnapshot {
            id: self.id,
            kind: self.kind,
            position: self.position,
            range: self.range,
            selected: self.selected,
            kills: self.kills,
            ready: self.cooldown == 0,
        }
    }
}

/// Registry that stores towers and manages identifier allocation.
#[derive(Debug)]
pub(crate) struct TowerRegistry {
    entries: BTreeMap<TowerId, TowerState>,
    next_tower_id: TowerId,
}

impl TowerRegistry {
    /// Creates an empty tower registry with a reset identifier counter.
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_tower_id: TowerId::new(0),
        }
    }

    pub(crate) fn get(&self, tower: TowerId) -> Option<&TowerState> {
        self.entries.get(&tower)
    }

    /// Stores a new tower built from its static kind.
    pub(crate) fn insert(
        &mut self,
        kind: TowerKindId,
        stats: &TowerKind,
        position: Vec2,
    ) -> TowerId {
        let id = self.next_tower_id;
        self.next_tower_id = TowerId::new(id.get().saturating_add(1));

        let _ = self.entries.insert(
            id,
            TowerState {
                id,
                kind,
                position,
                range: stats.range,
                delay: stats.delay,
                cooldown: 0,
                bullet: stats.bullet.clone(),
                selected: false,
                kills: 0,
            },
        );
        id
    }

    /// Makes `tower` the only selected tower, or clears the selection.
    ///
    /// Returns the tower that ended up selected; unknown ids clear the selection.
    pub(crate) fn select(&mut self, tower: Option<TowerId>) -> Option<TowerId> {
        let mut selected = None;
        for state in self.entries.values_mut() {
            state.selected = Some(state.id) == tower;
            if state.selected {
                selected = Some(state.id);
            }
        }
        selected
    }

    /// Counts one tick off every running fire countdown.
    pub(crate) fn tick_cooldowns(&mut self) {
        for state in self.entries.values_mut() {
            state.cooldown = state.cooldown.saturating_sub(1);
        }
    }

    /// Restarts the fire countdown of a tower that just fired.
    pub(crate) fn mark_fired(&mut self, tower: TowerId) {
        if let Some(state) = self.entries.get_mut(&tower) {
            state.cooldown = state.delay;
        }
    }

    /// Credits a kill to the tower. Returns `false` for unknown towers.
    pub(crate) fn credit_kill(&mut self, tower: TowerId) -> bool {
        let Some(state) = self.entries.get_mut(&tower) else {
            return false;
        };
        state.kills = state.kills.saturating_add(1);
        true
    }

    /// Captures a read-only view of every placed tower.
    pub(crate) fn view(&self) -> TowerView {
        TowerView::from_snapshots(self.entries.values().map(TowerState::snapshot).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cannon() -> TowerKind {
        TowerKind {
            sprite: "C".to_owned(),
            cost: 5,
            range: 60.0,
            delay: 3,
            bullet: None,
        }
    }

    #[test]
    fn registry_starts_empty_with_zero_identifier() {
        let registry = TowerRegistry::new();
        assert!(registry.entries.is_empty());
        assert_eq!(registry.next_tower_id.get(), 0);
    }

    #[test]
    fn tower_state_preserves_kind_fields() {
        let mut registry = TowerRegistry::new();
        let id = registry.insert(TowerKindId::new(2), &cannon(), Vec2::new(4.0, 5.0));
        let state = registry.get(id).expect("tower");

        assert_eq!(state.id, TowerId::new(0));
        assert_eq!(state.kind, TowerKindId::new(2));
        assert_eq!(state.range, 60.0);
        assert_eq!(state.delay, 3);
        assert!(state.snapshot().ready);
    }

    #[test]
    fn selecting_clears_previous_selection() {
        let mut registry = TowerRegistry::new();
        let first = registry.insert(TowerKindId::new(0), &cannon(), Vec2::ZERO);
        let second = registry.insert(TowerKindId::new(0), &cannon(), Vec2::ZERO);

        assert_eq!(registry.select(Some(first)), Some(first));
        assert_eq!(registry.select(Some(second)), Some(second));

        let selected: Vec<TowerId> = registry
            .view()
            .iter()
            .filter(|snapshot| snapshot.selected)
            .map(|snapshot| snapshot.id)
            .collect();
        assert_eq!(selected, vec![second]);

        assert_eq!(registry.select(Some(TowerId::new(40))), None);
        assert!(registry.view().iter().all(|snapshot| !snapshot.selected));
    }

    #[test]
    fn cooldown_counts_down_after_firing() {
        let mut registry = TowerRegistry::new();
        let id = registry.insert(TowerKindId::new(0), &cannon(), Vec2::ZERO);

        registry.mark_fired(id);
        for _ in 0..2 {
            registry.tick_cooldowns();
            assert!(!registry.get(id).expect("tower").snapshot().ready);
        }
        registry.tick_cooldowns();
        assert!(registry.get(id).expect("tower").snapshot().ready);
    }
}
