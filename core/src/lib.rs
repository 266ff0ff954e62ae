#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Path Defence engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative level, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the level executes those commands via its
//! `apply` entry point, and then reports [`Event`] values describing what
//! changed. Static tables ([`Catalog`], [`MapDefinition`]) are supplied
//! already parsed and are never mutated by the simulation.

pub mod geometry;

use std::{collections::BTreeMap, fmt};

pub use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of ticks a dying enemy remains visible before removal.
pub const ENEMY_DEATH_TICKS: u32 = 10;

/// Number of ticks a splash bullet's blast fades before removal.
pub const SPLASH_FADE_TICKS: u32 = 10;

/// Commands that express all permissible level mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation by one fixed step.
    Tick,
    /// Requests a game status change. Only RUNNING and PAUSED may swap.
    SetStatus {
        /// Status the caller would like to activate.
        status: GameStatus,
    },
    /// Requests placement of a tower at the provided position.
    PlaceTower {
        /// Static kind of the tower to construct.
        kind: TowerKindId,
        /// Playfield position of the tower.
        position: Vec2,
    },
    /// Selects a tower, or clears the selection when `None`.
    SelectTower {
        /// Tower that becomes the only selected tower.
        tower: Option<TowerId>,
    },
    /// Resets the level to its starting state.
    Restart,
}

/// Events reported by the level after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Announces that the game status changed.
    StatusChanged {
        /// Status that became active.
        status: GameStatus,
    },
    /// Reports that a status change request was refused.
    StatusChangeRejected {
        /// Status the caller asked for.
        requested: GameStatus,
        /// Specific reason the request failed.
        reason: StatusError,
    },
    /// Announces that the enemies of a wave were queued for spawning.
    WaveStarted {
        /// Zero-based index of the wave.
        wave: usize,
        /// Number of enemies queued.
        enemies: usize,
    },
    /// Reports a spawn rule referencing an enemy kind missing from the catalog.
    EnemyKindMissing {
        /// Zero-based index of the wave containing the rule.
        wave: usize,
        /// Kind that could not be resolved.
        kind: EnemyKindId,
    },
    /// Confirms that a queued enemy became active on the path.
    EnemySpawned {
        /// Identifier of the enemy.
        enemy: EnemyId,
    },
    /// Reports damage applied to an enemy by a bullet.
    EnemyHit {
        /// Enemy that received the damage.
        enemy: EnemyId,
        /// Damage applied.
        amount: Damage,
        /// Bullet responsible for the damage.
        bullet: BulletId,
    },
    /// Announces that an enemy's health was depleted.
    EnemyDied {
        /// Identifier of the enemy.
        enemy: EnemyId,
        /// Tower credited with the kill, if a bullet landed the damage.
        tower: Option<TowerId>,
        /// Money awarded to the player.
        reward: u32,
    },
    /// Announces that an enemy reached the end of the path.
    EnemyPassed {
        /// Identifier of the enemy.
        enemy: EnemyId,
    },
    /// Confirms that an enemy left the live collection.
    EnemyRemoved {
        /// Identifier of the enemy.
        enemy: EnemyId,
    },
    /// Confirms that a tower fired a bullet.
    BulletFired {
        /// Identifier of the new bullet.
        bullet: BulletId,
        /// Enemy the bullet was aimed at.
        target: EnemyId,
    },
    /// Reports a splash blast that damaged every enemy within its radius.
    Splash {
        /// Bullet that produced the blast.
        bullet: BulletId,
        /// Impact point.
        center: Vec2,
        /// Radius of the blast.
        radius: f32,
    },
    /// Confirms that a bullet left the live collection.
    BulletExpired {
        /// Identifier of the bullet.
        bullet: BulletId,
        /// Why the bullet expired.
        reason: BulletExpiry,
    },
    /// Confirms that a tower was placed.
    TowerPlaced {
        /// Identifier assigned to the tower.
        tower: TowerId,
        /// Static kind of the tower.
        kind: TowerKindId,
        /// Playfield position of the tower.
        position: Vec2,
        /// Money debited for the placement.
        cost: u32,
    },
    /// Reports that a tower placement request was rejected.
    TowerPlacementRejected {
        /// Kind requested for placement.
        kind: TowerKindId,
        /// Position provided in the request.
        position: Vec2,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Announces the tower that is now selected, if any.
    TowerSelected {
        /// Selected tower, or `None` when the selection was cleared.
        tower: Option<TowerId>,
    },
}

/// Top-level game status gating the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The simulation advances every tick.
    Running,
    /// The simulation is frozen and can resume.
    Paused,
    /// Lives ran out. Terminal.
    Defeat,
    /// Every wave was cleared. Terminal.
    Victory,
}

impl GameStatus {
    /// Reports whether the simulation may advance.
    #[must_use]
    pub const fn allows_ticks(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Reports whether the status can no longer change without a restart.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Defeat | Self::Victory)
    }

    /// Resolves a status change requested from outside the simulation.
    ///
    /// Only RUNNING and PAUSED may swap; requesting the current status is a
    /// no-op that succeeds.
    pub fn transition(self, requested: GameStatus) -> Result<GameStatus, StatusError> {
        if self.is_terminal() {
            return Err(StatusError::Terminal { current: self });
        }

        match (self, requested) {
            (current, requested) if current == requested => Ok(current),
            (Self::Running, Self::Paused) | (Self::Paused, Self::Running) => Ok(requested),
            (current, _) => Err(StatusError::Forbidden { current }),
        }
    }
}

/// Reasons a status change request may be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum StatusError {
    /// The game already ended.
    #[error("game already ended with {current:?}")]
    Terminal {
        /// Status the game ended with.
        current: GameStatus,
    },
    /// Requests may only toggle between running and paused.
    #[error("cannot request that status while {current:?}")]
    Forbidden {
        /// Status active when the request arrived.
        current: GameStatus,
    },
}

/// Reasons a tower placement request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum PlacementError {
    /// The player cannot afford the tower.
    #[error("tower costs {cost} but only {available} is available")]
    Unaffordable {
        /// Cost of the requested kind.
        cost: u32,
        /// Money held by the player.
        available: u32,
    },
    /// The requested kind does not exist in the catalog.
    #[error("tower kind {0} is not defined")]
    UnknownKind(TowerKindId),
}

/// Configuration-integrity faults raised when resolving static tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LevelError {
    /// No enemy kind with this identifier exists.
    #[error("enemy kind {0} is not defined")]
    UnknownEnemyKind(EnemyKindId),
    /// No tower kind with this identifier exists.
    #[error("tower kind {0} is not defined")]
    UnknownTowerKind(TowerKindId),
}

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TowerId(u32);

impl TowerId {
    /// Creates a new tower identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the tower identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier of a bullet, tagged with the tower that fired it.
///
/// Ordering follows the fire serial, so bullets iterate in the order they
/// were fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BulletId {
    serial: u32,
    tower: TowerId,
}

impl BulletId {
    /// Creates a bullet identifier from a fire serial and the owning tower.
    #[must_use]
    pub const fn new(serial: u32, tower: TowerId) -> Self {
        Self { serial, tower }
    }

    /// Level-wide fire serial of the bullet.
    #[must_use]
    pub const fn serial(&self) -> u32 {
        self.serial
    }

    /// Tower that fired the bullet.
    #[must_use]
    pub const fn tower(&self) -> TowerId {
        self.tower
    }
}

/// Key of an enemy kind in the static catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyKindId(u32);

impl EnemyKindId {
    /// Creates a new enemy kind key.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric key.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EnemyKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key of a tower kind in the static catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TowerKindId(u32);

impl TowerKindId {
    /// Creates a new tower kind key.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric key.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TowerKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remaining hit points of an enemy. Values at or below zero mean dead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Health(i32);

impl Health {
    /// Creates a new health value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Retrieves the raw hit points.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Reports whether no hit points remain.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.0 <= 0
    }

    /// Health left after applying `damage`.
    #[must_use]
    pub fn after(self, damage: Damage) -> Self {
        let damage = i32::try_from(damage.get()).unwrap_or(i32::MAX);
        Self(self.0.saturating_sub(damage))
    }
}

/// Damage dealt by a single bullet hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Damage(u32);

impl Damage {
    /// Creates a new damage amount.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the raw damage amount.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Static statistics shared by every enemy of a kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyKind {
    /// Starting hit points.
    pub health: Health,
    /// Distance walked along the path per tick.
    pub speed: f32,
    /// Glyph used by presentation layers.
    pub sprite: String,
    /// Side length of the square collision footprint.
    pub size: f32,
    /// Money awarded when a bullet kills the enemy.
    pub money: u32,
}

/// Projectile fired by a tower, as described in the tower table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletTemplate {
    /// Glyph used by presentation layers.
    pub sprite: String,
    /// Optional tint used by presentation layers.
    #[serde(default)]
    pub color: Option<String>,
    /// Font size used by presentation layers.
    #[serde(default)]
    pub sprite_size: f32,
    /// Distance travelled per tick.
    pub speed: f32,
    /// Damage applied to each enemy hit.
    pub damage: Damage,
    /// Number of hits the bullet survives.
    pub hits: u32,
    /// Whether hits damage every enemy around the impact point.
    #[serde(default)]
    pub splash: bool,
    /// Radius of the splash blast.
    #[serde(default)]
    pub splash_radius: Option<f32>,
    /// Whether the bullet re-aims at a live enemy every tick.
    #[serde(default)]
    pub homing: bool,
}

impl BulletTemplate {
    /// Resolves the closed behavior profile described by the template flags.
    ///
    /// Splash requires both the flag and a radius.
    #[must_use]
    pub fn behavior(&self) -> BulletBehavior {
        let radius = self.splash_radius.filter(|_| self.splash);
        match (radius, self.homing) {
            (None, false) => BulletBehavior::Plain,
            (None, true) => BulletBehavior::Homing,
            (Some(radius), false) => BulletBehavior::Splash { radius },
            (Some(radius), true) => BulletBehavior::SplashHoming { radius },
        }
    }
}

/// Closed set of bullet behaviors selected when a bullet is fired.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BulletBehavior {
    /// Flies a fixed heading and damages only the enemy it touches.
    Plain,
    /// Flies a fixed heading and damages everything around the impact point.
    Splash {
        /// Radius of the blast.
        radius: f32,
    },
    /// Re-aims at a live enemy every tick.
    Homing,
    /// Re-aims every tick and damages everything around the impact point.
    SplashHoming {
        /// Radius of the blast.
        radius: f32,
    },
}

impl BulletBehavior {
    /// Radius of the splash blast, if the behavior splashes.
    #[must_use]
    pub const fn splash_radius(self) -> Option<f32> {
        match self {
            Self::Splash { radius } | Self::SplashHoming { radius } => Some(radius),
            Self::Plain | Self::Homing => None,
        }
    }

    /// Reports whether the bullet re-aims every tick.
    #[must_use]
    pub const fn is_homing(self) -> bool {
        matches!(self, Self::Homing | Self::SplashHoming { .. })
    }
}

/// Static statistics shared by every tower of a kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TowerKind {
    /// Glyph used by presentation layers.
    pub sprite: String,
    /// Money debited when the tower is placed.
    pub cost: u32,
    /// Radius of the targeting circle.
    pub range: f32,
    /// Ticks between consecutive shots.
    pub delay: u32,
    /// Projectile fired by the tower, if any.
    #[serde(default)]
    pub bullet: Option<BulletTemplate>,
}

/// Read-only enemy and tower tables keyed by kind id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Enemy kinds available to wave tables.
    pub enemies: BTreeMap<EnemyKindId, EnemyKind>,
    /// Tower kinds available for placement.
    pub towers: BTreeMap<TowerKindId, TowerKind>,
}

impl Catalog {
    /// Looks up an enemy kind.
    pub fn enemy(&self, kind: EnemyKindId) -> Result<&EnemyKind, LevelError> {
        self.enemies
            .get(&kind)
            .ok_or(LevelError::UnknownEnemyKind(kind))
    }

    /// Looks up a tower kind.
    pub fn tower(&self, kind: TowerKindId) -> Result<&TowerKind, LevelError> {
        self.towers
            .get(&kind)
            .ok_or(LevelError::UnknownTowerKind(kind))
    }
}

/// Entry of a wave table describing a run of identical enemies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnRule {
    /// Kind of every enemy in the run.
    pub kind: EnemyKindId,
    /// Tick offset of the first enemy within the wave.
    pub delay: u32,
    /// Ticks between consecutive enemies.
    pub interval: u32,
    /// Number of enemies in the run.
    pub count: u32,
}

/// Static description of a playable map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapDefinition {
    /// Waves in play order; each wave is a list of spawn rules.
    pub waves: Vec<Vec<SpawnRule>>,
    /// Route walked by every enemy.
    pub path: Vec<Vec2>,
}

/// Bounds of the playable area, centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    width: f32,
    height: f32,
    width_margin: f32,
    height_margin: f32,
}

impl Playfield {
    /// Creates a playfield from its visible size and extra margins.
    #[must_use]
    pub const fn new(width: f32, height: f32, width_margin: f32, height_margin: f32) -> Self {
        Self {
            width,
            height,
            width_margin,
            height_margin,
        }
    }

    /// Half of the total width, margins included.
    #[must_use]
    pub fn half_extent_x(&self) -> f32 {
        (self.width + self.width_margin * 2.0) / 2.0
    }

    /// Half of the total height, margins included.
    #[must_use]
    pub fn half_extent_y(&self) -> f32 {
        (self.height + self.height_margin * 2.0) / 2.0
    }

    /// Reports whether `point` lies on the playfield, margins included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let extent = Vec2::new(self.half_extent_x(), self.half_extent_y());
        geometry::within_rect(point, -extent, extent)
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(600.0, 400.0, 150.0, 0.0)
    }
}

/// Starting values and bounds applied whenever a level (re)starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Money held when the level starts.
    pub starting_money: u32,
    /// Lives held when the level starts.
    pub starting_lives: u32,
    /// Idle ticks before each wave spawns.
    pub wave_delay_ticks: u32,
    /// Area bullets may travel through.
    pub playfield: Playfield,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            starting_money: 10,
            starting_lives: 100,
            wave_delay_ticks: 300,
            playfield: Playfield::default(),
        }
    }
}

/// Lifecycle stages of an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyStatus {
    /// Queued by its wave but not yet on the path.
    NotSpawned,
    /// Walking the path.
    Active,
    /// Reached the end of the path.
    Passed,
    /// Playing its death animation.
    DeathStart,
    /// Finished its death animation.
    Dead,
}

/// Lifecycle stages of a bullet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletStatus {
    /// In flight.
    Default,
    /// Spent; a splash blast is fading.
    DeathStart,
    /// Ready for removal.
    DeathEnd,
}

/// Why a bullet left the live collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletExpiry {
    /// The hit budget was used up.
    Spent,
    /// The bullet left the playfield without being spent.
    OutOfBounds,
}

/// Immutable representation of a single enemy's state used for queries.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemySnapshot {
    /// Unique identifier assigned to the enemy.
    pub id: EnemyId,
    /// Static kind of the enemy.
    pub kind: EnemyKindId,
    /// Current playfield position.
    pub position: Vec2,
    /// Distance walked along the path.
    pub distance: f32,
    /// Remaining hit points.
    pub health: Health,
    /// Effective speed after modifiers.
    pub speed: f32,
    /// Side length of the collision footprint.
    pub size: f32,
    /// Money awarded on a bullet kill.
    pub money: u32,
    /// Lifecycle stage.
    pub status: EnemyStatus,
    /// Elapsed ticks of the death animation.
    pub death_frame: u32,
}

/// Read-only snapshot describing all live enemies.
#[derive(Clone, Debug, Default)]
pub struct EnemyView {
    snapshots: Vec<EnemySnapshot>,
}

impl EnemyView {
    /// Creates a new enemy view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<EnemySnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured enemy snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
        self.snapshots.iter()
    }

    /// Iterator over the enemies currently walking the path.
    pub fn active(&self) -> impl Iterator<Item = &EnemySnapshot> {
        self.snapshots
            .iter()
            .filter(|snapshot| snapshot.status == EnemyStatus::Active)
    }

    /// Looks up the snapshot of a single enemy.
    #[must_use]
    pub fn get(&self, enemy: EnemyId) -> Option<&EnemySnapshot> {
        self.snapshots
            .binary_search_by_key(&enemy, |snapshot| snapshot.id)
            .ok()
            .map(|index| &self.snapshots[index])
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<EnemySnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single tower's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerSnapshot {
    /// Identifier allocated to the tower by the level.
    pub id: TowerId,
    /// Static kind of the tower.
    pub kind: TowerKindId,
    /// Playfield position of the tower.
    pub position: Vec2,
    /// Radius of the targeting circle.
    pub range: f32,
    /// Whether the tower is the current selection.
    pub selected: bool,
    /// Enemies killed by the tower's bullets.
    pub kills: u32,
    /// Whether the tower's fire countdown has elapsed.
    pub ready: bool,
}

/// Read-only snapshot describing all placed towers.
#[derive(Clone, Debug, Default)]
pub struct TowerView {
    snapshots: Vec<TowerSnapshot>,
}

impl TowerView {
    /// Creates a new tower view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<TowerSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured tower snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &TowerSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<TowerSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single bullet's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletSnapshot {
    /// Identifier of the bullet.
    pub id: BulletId,
    /// Current playfield position.
    pub position: Vec2,
    /// Displacement applied per tick.
    pub velocity: Vec2,
    /// Behavior profile selected when fired.
    pub behavior: BulletBehavior,
    /// Lifecycle stage.
    pub status: BulletStatus,
    /// Elapsed ticks of the splash fade.
    pub death_frame: u32,
    /// Remaining hit budget.
    pub hits: u32,
}

/// Scoreboard fields displayed alongside the playfield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Scoreboard {
    /// One-based number of the current wave.
    pub wave: usize,
    /// Lives remaining.
    pub lives: u32,
    /// Money available.
    pub money: u32,
    /// Current game status.
    pub status: GameStatus,
}

/// Targeting decision pairing a ready tower with the enemy it should shoot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerTarget {
    /// Tower that should fire.
    pub tower: TowerId,
    /// Enemy selected as the target.
    pub enemy: EnemyId,
    /// Position of the tower.
    pub tower_position: Vec2,
    /// Position of the enemy when selected.
    pub enemy_position: Vec2,
}
