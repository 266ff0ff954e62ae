#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative level state management for Path Defence.
//!
//! A [`Level`] owns the path, the wave schedule and the live enemy, tower and
//! bullet collections. Every mutation flows through [`apply`]; a
//! [`Command::Tick`] advances the whole simulation one fixed step in this
//! order:
//!
//! 1. wave bookkeeping (next wave, victory, spawning the queued wave),
//! 2. enemy spawning, deaths and movement,
//! 3. tower targeting and firing,
//! 4. bullet flight, followed by hits, deaths and bullet removal,
//! 5. removal of passed and fully animated enemies,
//! 6. the defeat check.
//!
//! Nothing advances unless the game status is [`GameStatus::Running`].

mod bullets;
mod enemies;
mod towers;

use path_defence_core::{
    geometry::{path_lengths, PathLengths},
    Catalog, Command, Event, GameStatus, LevelConfig, MapDefinition, PlacementError, TowerId,
    TowerKindId, TowerTarget, Vec2,
};
use path_defence_system_spawning::{SpawnOrder, Spawning};
use path_defence_system_tower_targeting::TowerTargeting;

use bullets::{BulletRegistry, Hit};
use enemies::EnemyRegistry;
use towers::TowerRegistry;

/// Represents the authoritative state of a single playable level.
#[derive(Debug)]
pub struct Level {
    config: LevelConfig,
    catalog: Catalog,
    path: Vec<Vec2>,
    path_lengths: PathLengths,
    spawning: Spawning,
    targeting: TowerTargeting,
    status: GameStatus,
    wave: usize,
    wave_queued: bool,
    frame: i64,
    money: u32,
    lives: u32,
    enemies: EnemyRegistry,
    towers: TowerRegistry,
    bullets: BulletRegistry,
    spawn_orders: Vec<SpawnOrder>,
    targets: Vec<TowerTarget>,
    hits: Vec<Hit>,
}

impl Level {
    /// Creates a level in its starting state with the first wave queued.
    ///
    /// Events raised while queueing the first wave, such as
    /// [`Event::EnemyKindMissing`], are appended to `out_events`.
    #[must_use]
    pub fn new(
        config: LevelConfig,
        catalog: Catalog,
        map: MapDefinition,
        out_events: &mut Vec<Event>,
    ) -> Self {
        let path_lengths = path_lengths(&map.path);
        let mut level = Self {
            config,
            catalog,
            path: map.path,
            path_lengths,
            spawning: Spawning::new(map.waves),
            targeting: TowerTargeting::new(),
            status: GameStatus::Running,
            wave: 0,
            wave_queued: false,
            frame: 0,
            money: 0,
            lives: 0,
            enemies: EnemyRegistry::new(),
            towers: TowerRegistry::new(),
            bullets: BulletRegistry::new(),
            spawn_orders: Vec::new(),
            targets: Vec::new(),
            hits: Vec::new(),
        };
        level.reset(out_events);
        level
    }

    fn reset(&mut self, out_events: &mut Vec<Event>) {
        self.status = GameStatus::Running;
        self.wave = 0;
        self.frame = self.wave_delay();
        self.money = self.config.starting_money;
        self.lives = self.config.starting_lives;
        self.enemies = EnemyRegistry::new();
        self.towers = TowerRegistry::new();
        self.bullets = BulletRegistry::new();
        self.queue_wave(out_events);
    }

    fn wave_delay(&self) -> i64 {
        -i64::from(self.config.wave_delay_ticks)
    }

    fn queue_wave(&mut self, out_events: &mut Vec<Event>) {
        self.wave_queued = true;
        self.spawn_orders.clear();
        if !self.spawning.handle(self.wave, &mut self.spawn_orders) {
            return;
        }

        let origin = self.path.first().copied().unwrap_or(Vec2::ZERO);
        let mut queued = 0usize;
        for order in &self.spawn_orders {
            match self.catalog.enemy(order.kind) {
                Ok(stats) => {
                    let _ = self
                        .enemies
                        .queue(order.kind, stats, order.spawn_delay, origin);
                    queued += 1;
                }
                Err(error) => {
                    log::warn!("wave {} skips an enemy: {error}", self.wave + 1);
                    out_events.push(Event::EnemyKindMissing {
                        wave: self.wave,
                        kind: order.kind,
                    });
                }
            }
        }

        log::info!("wave {} queued with {queued} enemies", self.wave + 1);
        out_events.push(Event::WaveStarted {
            wave: self.wave,
            enemies: queued,
        });
    }

    fn tick(&mut self, out_events: &mut Vec<Event>) {
        if !self.status.allows_ticks() {
            return;
        }

        if self.enemies.is_empty() {
            if self.frame > 0 {
                if self.spawning.is_last_wave(self.wave) {
                    self.finish(GameStatus::Victory, out_events);
                    return;
                }
                self.wave += 1;
                self.wave_queued = false;
                self.frame = self.wave_delay();
            }
            if self.frame == 0 && !self.wave_queued {
                self.queue_wave(out_events);
            }
        }

        self.frame += 1;

        self.enemies.advance_death_animations();
        self.enemies.activate_due(self.frame, out_events);
        self.resolve_deaths(out_events);
        let passed = self
            .enemies
            .advance(&self.path, &self.path_lengths, out_events);

        self.fire_towers(out_events);

        let enemy_view = self.enemies.view();
        let mut hits = std::mem::take(&mut self.hits);
        hits.clear();
        self.bullets
            .advance(&enemy_view, &self.config.playfield, &mut hits, out_events);
        for hit in hits.drain(..) {
            if self.enemies.apply_hit(hit.enemy, hit.amount, hit.bullet) {
                out_events.push(Event::EnemyHit {
                    enemy: hit.enemy,
                    amount: hit.amount,
                    bullet: hit.bullet,
                });
            }
        }
        self.hits = hits;
        self.resolve_deaths(out_events);
        self.bullets.remove_expired(out_events);

        self.enemies.remove_finished(out_events);

        match self.lives.checked_sub(passed) {
            Some(lives) => self.lives = lives,
            None => {
                self.lives = 0;
                self.finish(GameStatus::Defeat, out_events);
            }
        }
    }

    fn fire_towers(&mut self, out_events: &mut Vec<Event>) {
        self.towers.tick_cooldowns();

        let tower_view = self.towers.view();
        let enemy_view = self.enemies.view();
        self.targeting
            .handle(self.status, &tower_view, &enemy_view, &mut self.targets);

        for target in &self.targets {
            let Some(template) = self
                .towers
                .get(target.tower)
                .and_then(|tower| tower.bullet.as_ref())
            else {
                continue;
            };

            let bullet = self.bullets.fire(
                target.tower,
                target.tower_position,
                target.enemy,
                target.enemy_position,
                template,
            );
            self.towers.mark_fired(target.tower);
            out_events.push(Event::BulletFired {
                bullet,
                target: target.enemy,
            });
        }
    }

    fn resolve_deaths(&mut self, out_events: &mut Vec<Event>) {
        for death in self.enemies.resolve_deaths() {
            let tower = death.bullet.map(|bullet| bullet.tower());
            let reward = if tower.is_some() { death.money } else { 0 };
            if let Some(tower) = tower {
                let _ = self.towers.credit_kill(tower);
            }
            self.money = self.money.saturating_add(reward);
            out_events.push(Event::EnemyDied {
                enemy: death.enemy,
                tower,
                reward,
            });
        }
    }

    fn finish(&mut self, status: GameStatus, out_events: &mut Vec<Event>) {
        log::info!("level finished with {status:?} on wave {}", self.wave + 1);
        self.status = status;
        out_events.push(Event::StatusChanged { status });
    }

    fn place_tower(&mut self, kind: TowerKindId, position: Vec2, out_events: &mut Vec<Event>) {
        let stats = match self.catalog.tower(kind) {
            Ok(stats) => stats,
            Err(error) => {
                log::warn!("rejected tower placement: {error}");
                out_events.push(Event::TowerPlacementRejected {
                    kind,
                    position,
                    reason: PlacementError::UnknownKind(kind),
                });
                return;
            }
        };

        if self.money < stats.cost {
            log::debug!(
                "tower {kind} costs {} but only {} is available",
                stats.cost,
                self.money
            );
            out_events.push(Event::TowerPlacementRejected {
                kind,
                position,
                reason: PlacementError::Unaffordable {
                    cost: stats.cost,
                    available: self.money,
                },
            });
            return;
        }

        self.money -= stats.cost;
        let tower = self.towers.insert(kind, stats, position);
        log::debug!("placed tower {} of kind {kind} at {position}", tower.get());
        out_events.push(Event::TowerPlaced {
            tower,
            kind,
            position,
            cost: stats.cost,
        });
    }

    fn select_tower(&mut self, tower: Option<TowerId>, out_events: &mut Vec<Event>) {
        let selected = self.towers.select(tower);
        out_events.push(Event::TowerSelected { tower: selected });
    }

    fn request_status(&mut self, requested: GameStatus, out_events: &mut Vec<Event>) {
        match self.status.transition(requested) {
            Ok(status) if status == self.status => {}
            Ok(status) => {
                log::debug!("status changed from {:?} to {status:?}", self.status);
                self.status = status;
                out_events.push(Event::StatusChanged { status });
            }
            Err(reason) => {
                log::debug!("rejected status request {requested:?}: {reason}");
                out_events.push(Event::StatusChangeRejected { requested, reason });
            }
        }
    }
}

/// Applies the provided command to the level, mutating state deterministically.
pub fn apply(level: &mut Level, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick => level.tick(out_events),
        Command::SetStatus { status } => level.request_status(status, out_events),
        Command::PlaceTower { kind, position } => level.place_tower(kind, position, out_events),
        Command::SelectTower { tower } => level.select_tower(tower, out_events),
        Command::Restart => {
            log::info!("restarting level");
            level.reset(out_events);
            out_events.push(Event::StatusChanged {
                status: GameStatus::Running,
            });
        }
    }
}

/// Query functions that provide read-only access to the level state.
pub mod query {
    use path_defence_core::{
        geometry::PathLengths, BulletSnapshot, BulletStatus, EnemyId, EnemySnapshot,
        EnemyStatus, EnemyView, GameStatus, Scoreboard, TowerSnapshot, TowerView, Vec2,
    };

    use super::Level;

    /// Current game status.
    #[must_use]
    pub fn status(level: &Level) -> GameStatus {
        level.status
    }

    /// Tick counter of the current wave. Negative during the pre-wave delay.
    #[must_use]
    pub fn tick_counter(level: &Level) -> i64 {
        level.frame
    }

    /// Zero-based index of the current wave.
    #[must_use]
    pub fn wave_index(level: &Level) -> usize {
        level.wave
    }

    /// Money available to the player.
    #[must_use]
    pub fn money(level: &Level) -> u32 {
        level.money
    }

    /// Lives remaining.
    #[must_use]
    pub fn lives(level: &Level) -> u32 {
        level.lives
    }

    /// Scoreboard fields displayed alongside the playfield.
    #[must_use]
    pub fn scoreboard(level: &Level) -> Scoreboard {
        Scoreboard {
            wave: level.wave + 1,
            lives: level.lives,
            money: level.money,
            status: level.status,
        }
    }

    /// Route walked by every enemy.
    #[must_use]
    pub fn path(level: &Level) -> &[Vec2] {
        &level.path
    }

    /// Cumulative arc lengths of the path.
    #[must_use]
    pub fn path_lengths(level: &Level) -> &PathLengths {
        &level.path_lengths
    }

    /// Captures a read-only view of every tracked enemy, queued ones included.
    #[must_use]
    pub fn enemy_view(level: &Level) -> EnemyView {
        level.enemies.view()
    }

    /// Looks up a single enemy.
    #[must_use]
    pub fn enemy(level: &Level, enemy: EnemyId) -> Option<EnemySnapshot> {
        level.enemies.get(enemy).map(|state| state.snapshot())
    }

    /// Captures a read-only view of every placed tower.
    #[must_use]
    pub fn tower_view(level: &Level) -> TowerView {
        level.towers.view()
    }

    /// Snapshot of the selected tower, if any.
    #[must_use]
    pub fn selected_tower(level: &Level) -> Option<TowerSnapshot> {
        level
            .towers
            .view()
            .into_vec()
            .into_iter()
            .find(|snapshot| snapshot.selected)
    }

    /// Snapshots of every live bullet in fire order.
    #[must_use]
    pub fn bullets(level: &Level) -> Vec<BulletSnapshot> {
        level.bullets.snapshots()
    }

    /// Everything a presentation layer needs to draw the current tick.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Frame {
        /// Enemies walking the path or playing their death animation.
        pub enemies: Vec<EnemySnapshot>,
        /// Every placed tower, with selection and kill counts.
        pub towers: Vec<TowerSnapshot>,
        /// Bullets in flight or fading out.
        pub bullets: Vec<BulletSnapshot>,
        /// Wave, lives, money and status.
        pub scoreboard: Scoreboard,
    }

    /// Captures the renderable state of the level.
    #[must_use]
    pub fn frame(level: &Level) -> Frame {
        let enemies = level
            .enemies
            .view()
            .into_vec()
            .into_iter()
            .filter(|snapshot| {
                matches!(snapshot.status, EnemyStatus::Active | EnemyStatus::DeathStart)
            })
            .collect();
        let bullets = level
            .bullets
            .snapshots()
            .into_iter()
            .filter(|snapshot| snapshot.status != BulletStatus::DeathEnd)
            .collect();

        Frame {
            enemies,
            towers: level.towers.view().into_vec(),
            bullets,
            scoreboard: scoreboard(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_defence_core::{
        BulletTemplate, Damage, EnemyKind, EnemyKindId, EnemyStatus, Health, SpawnRule, TowerKind,
    };

    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        let _ = catalog.enemies.insert(
            EnemyKindId::new(0),
            EnemyKind {
                health: Health::new(10),
                speed: 2.0,
                sprite: "e".to_owned(),
                size: 20.0,
                money: 4,
            },
        );
        let _ = catalog.towers.insert(
            TowerKindId::new(0),
            TowerKind {
                sprite: "t".to_owned(),
                cost: 10,
                range: 100.0,
                delay: 5,
                bullet: Some(BulletTemplate {
                    sprite: "*".to_owned(),
                    color: None,
                    sprite_size: 8.0,
                    speed: 10.0,
                    damage: Damage::new(5),
                    hits: 1,
                    splash: false,
                    splash_radius: None,
                    homing: false,
                }),
            },
        );
        catalog
    }

    fn map() -> MapDefinition {
        MapDefinition {
            waves: vec![vec![SpawnRule {
                kind: EnemyKindId::new(0),
                delay: 0,
                interval: 10,
                count: 2,
            }]],
            path: vec![Vec2::new(-100.0, 0.0), Vec2::new(100.0, 0.0)],
        }
    }

    #[test]
    fn new_level_queues_the_first_wave() {
        let level = Level::new(LevelConfig::default(), catalog(), map(), &mut Vec::new());

        assert_eq!(query::tick_counter(&level), -300);
        assert_eq!(query::money(&level), 10);
        assert_eq!(query::lives(&level), 100);
        let enemies = query::enemy_view(&level).into_vec();
        assert_eq!(enemies.len(), 2);
        assert!(enemies
            .iter()
            .all(|enemy| enemy.status == EnemyStatus::NotSpawned));
        assert!(enemies
            .iter()
            .all(|enemy| enemy.position == Vec2::new(-100.0, 0.0)));
    }

    #[test]
    fn placement_debits_money() {
        let mut level = Level::new(LevelConfig::default(), catalog(), map(), &mut Vec::new());
        let mut events = Vec::new();

        apply(
            &mut level,
            Command::PlaceTower {
                kind: TowerKindId::new(0),
                position: Vec2::new(0.0, 30.0),
            },
            &mut events,
        );

        assert_eq!(query::money(&level), 0);
        assert_eq!(
            events,
            vec![Event::TowerPlaced {
                tower: TowerId::new(0),
                kind: TowerKindId::new(0),
                position: Vec2::new(0.0, 30.0),
                cost: 10,
            }]
        );
    }

    #[test]
    fn unknown_tower_kind_is_rejected() {
        let mut level = Level::new(LevelConfig::default(), catalog(), map(), &mut Vec::new());
        let mut events = Vec::new();

        apply(
            &mut level,
            Command::PlaceTower {
                kind: TowerKindId::new(5),
                position: Vec2::ZERO,
            },
            &mut events,
        );

        assert_eq!(query::money(&level), 10);
        assert!(query::tower_view(&level).into_vec().is_empty());
        assert_eq!(
            events,
            vec![Event::TowerPlacementRejected {
                kind: TowerKindId::new(5),
                position: Vec2::ZERO,
                reason: PlacementError::UnknownKind(TowerKindId::new(5)),
            }]
        );
    }

    #[test]
    fn unknown_enemy_kind_is_not_spawned() {
        let mut map = map();
        map.waves[0].push(SpawnRule {
            kind: EnemyKindId::new(3),
            delay: 0,
            interval: 1,
            count: 1,
        });
        let mut events = Vec::new();
        let level = Level::new(LevelConfig::default(), catalog(), map, &mut events);

        assert_eq!(query::enemy_view(&level).into_vec().len(), 2);
        assert_eq!(
            events,
            vec![
                Event::EnemyKindMissing {
                    wave: 0,
                    kind: EnemyKindId::new(3),
                },
                Event::WaveStarted {
                    wave: 0,
                    enemies: 2,
                },
            ]
        );
    }

    #[test]
    fn restart_resets_counters_and_collections() {
        let mut level = Level::new(LevelConfig::default(), catalog(), map(), &mut Vec::new());
        let mut events = Vec::new();
        apply(
            &mut level,
            Command::PlaceTower {
                kind: TowerKindId::new(0),
                position: Vec2::ZERO,
            },
            &mut events,
        );
        for _ in 0..320 {
            apply(&mut level, Command::Tick, &mut events);
        }

        events.clear();
        apply(&mut level, Command::Restart, &mut events);

        assert_eq!(query::money(&level), 10);
        assert_eq!(query::tick_counter(&level), -300);
        assert!(query::tower_view(&level).into_vec().is_empty());
        assert!(query::bullets(&level).is_empty());
        let ids: Vec<u32> = query::enemy_view(&level)
            .iter()
            .map(|enemy| enemy.id.get())
            .collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(
            events.last(),
            Some(&Event::StatusChanged {
                status: GameStatus::Running
            })
        );
    }
}
