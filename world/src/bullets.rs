//! Bullet registry, flight and collision resolution.
//!
//! Bullets never mutate enemies directly. Collisions are evaluated against the
//! enemy view captured before the bullet pass and reported as [`Hit`] records,
//! which the level applies in order once every bullet has moved.

use std::collections::BTreeMap;

use path_defence_core::{
    geometry::{velocity_vector, within_circle, within_square},
    BulletBehavior, BulletExpiry, BulletId, BulletSnapshot, BulletStatus, BulletTemplate, Damage,
    EnemyId, EnemyStatus, EnemyView, Event, Playfield, TowerId, Vec2, SPLASH_FADE_TICKS,
};
use path_defence_system_tower_targeting::select_furthest;

/// Damage a bullet dealt to an enemy during the current tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Hit {
    pub(crate) enemy: EnemyId,
    pub(crate) amount: Damage,
    pub(crate) bullet: BulletId,
}

/// Authoritative state of a single bullet.
#[derive(Clone, Debug)]
pub(crate) struct BulletState {
    pub(crate) id: BulletId,
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) speed: f32,
    pub(crate) damage: Damage,
    pub(crate) hits: u32,
    pub(crate) behavior: BulletBehavior,
    pub(crate) target: EnemyId,
    pub(crate) status: BulletStatus,
    pub(crate) death_frame: u32,
    pub(crate) expiry: Option<BulletExpiry>,
}

impl BulletState {
    pub(crate) fn snapshot(&self) -> BulletSnapshot {
        BulletSnapshot {
            id: self.id,
            position: self.position,
            velocity: self.velocity,
            behavior: self.behavior,
            status: self.status,
            death_frame: self.death_frame,
            hits: self.hits,
        }
    }

    fn fly(
        &mut self,
        enemies: &EnemyView,
        playfield: &Playfield,
        hits: &mut Vec<Hit>,
        out_events: &mut Vec<Event>,
    ) {
        self.position += self.velocity;

        if self.behavior.is_homing() {
            self.reaim(enemies);
        }

        if !playfield.contains(self.position) {
            self.expire(BulletExpiry::OutOfBounds);
            return;
        }

        for enemy in enemies.active() {
            if !within_square(self.position, enemy.position, enemy.size / 2.0) {
                continue;
            }

            self.hits = self.hits.saturating_sub(1);
            match self.behavior.splash_radius() {
                Some(radius) => {
                    let (center, amount, bullet) = (self.position, self.damage, self.id);
                    hits.extend(
                        enemies
                            .active()
                            .filter(|splashed| within_circle(splashed.position, center, radius))
                            .map(|splashed| Hit {
                                enemy: splashed.id,
                                amount,
                                bullet,
                            }),
                    );
                    out_events.push(Event::Splash {
                        bullet: self.id,
                        center: self.position,
                        radius,
                    });
                }
                None => hits.push(Hit {
                    enemy: enemy.id,
                    amount: self.damage,
                    bullet: self.id,
                }),
            }

            if self.hits == 0 {
                self.spend();
                break;
            }
        }
    }

    /// Keeps a homing bullet pointed at a live enemy.
    ///
    /// A target that stopped walking is replaced by the enemy furthest along
    /// the path. Without any candidate the bullet keeps its heading.
    fn reaim(&mut self, enemies: &EnemyView) {
        let tracked = enemies
            .get(self.target)
            .filter(|snapshot| snapshot.status == EnemyStatus::Active)
            .or_else(|| select_furthest(enemies.iter()));

        if let Some(target) = tracked {
            self.target = target.id;
            self.velocity = velocity_vector(self.position, target.position, self.speed);
        }
    }

    fn spend(&mut self) {
        if self.behavior.splash_radius().is_some() {
            self.status = BulletStatus::DeathStart;
            self.expiry = Some(BulletExpiry::Spent);
        } else {
            self.expire(BulletExpiry::Spent);
        }
    }

    fn fade(&mut self) {
        self.death_frame = self.death_frame.saturating_add(1);
        if self.death_frame >= SPLASH_FADE_TICKS {
            self.death_frame = SPLASH_FADE_TICKS;
            self.status = BulletStatus::DeathEnd;
        }
    }

    fn expire(&mut self, reason: BulletExpiry) {
        self.status = BulletStatus::DeathEnd;
        self.expiry = Some(reason);
    }
}

/// Registry that stores bullets and allocates fire serials.
#[derive(Debug)]
pub(crate) struct BulletRegistry {
    entries: BTreeMap<BulletId, BulletState>,
    next_serial: u32,
}

impl BulletRegistry {
    /// Creates an empty bullet registry with a reset serial counter.
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_serial: 0,
        }
    }

    /// Launches a bullet from `source` toward the target's current position.
    pub(crate) fn fire(
        &mut self,
        tower: TowerId,
        source: Vec2,
        target: EnemyId,
        target_position: Vec2,
        template: &BulletTemplate,
    ) -> BulletId {
        let id = BulletId::new(self.next_serial, tower);
        self.next_serial = self.next_serial.saturating_add(1);

        let _ = self.entries.insert(
            id,
            BulletState {
                id,
                position: source,
                velocity: velocity_vector(source, target_position, template.speed),
                speed: template.speed,
                damage: template.damage,
                hits: template.hits,
                behavior: template.behavior(),
                target,
                status: BulletStatus::Default,
                death_frame: 0,
                expiry: None,
            },
        );
        id
    }

    /// Advances every bullet by one tick, collecting the damage it deals.
    pub(crate) fn advance(
        &mut self,
        enemies: &EnemyView,
        playfield: &Playfield,
        hits: &mut Vec<Hit>,
        out_events: &mut Vec<Event>,
    ) {
        for bullet in self.entries.values_mut() {
            match bullet.status {
                BulletStatus::Default => bullet.fly(enemies, playfield, hits, out_events),
                BulletStatus::DeathStart => bullet.fade(),
                BulletStatus::DeathEnd => {}
            }
        }
    }

    /// Drops every bullet that reached the end of its death sequence.
    pub(crate) fn remove_expired(&mut self, out_events: &mut Vec<Event>) {
        self.entries.retain(|id, bullet| {
            if bullet.status != BulletStatus::DeathEnd {
                return true;
            }
            out_events.push(Event::BulletExpired {
                bullet: *id,
                reason: bullet.expiry.unwrap_or(BulletExpiry::Spent),
            });
            false
        });
    }

    pub(crate) fn snapshots(&self) -> Vec<BulletSnapshot> {
        self.entries.values().map(BulletState::snapshot).collect()
    }
}
