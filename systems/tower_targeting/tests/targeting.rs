use path_defence_core::{
    EnemyId, EnemyKindId, EnemySnapshot, EnemyStatus, EnemyView, GameStatus, Health, TowerId,
    TowerKindId, TowerSnapshot, TowerTarget, TowerView, Vec2,
};
use path_defence_system_tower_targeting::TowerTargeting;

fn tower(id: u32, position: (f32, f32), range: f32, ready: bool) -> TowerSnapshot {
    TowerSnapshot {
        id: TowerId::new(id),
        kind: TowerKindId::new(0),
        position: Vec2::new(position.0, position.1),
        range,
        selected: false,
        kills: 0,
        ready,
    }
}

fn enemy(id: u32, position: (f32, f32), distance: f32) -> EnemySnapshot {
    EnemySnapshot {
        id: EnemyId::new(id),
        kind: EnemyKindId::new(0),
        position: Vec2::new(position.0, position.1),
        distance,
        health: Health::new(5),
        speed: 1.0,
        size: 20.0,
        money: 1,
        status: EnemyStatus::Active,
        death_frame: 0,
    }
}

#[test]
fn targets_enemy_furthest_along_the_path() {
    let mut system = TowerTargeting::new();
    let towers = TowerView::from_snapshots(vec![tower(1, (0.0, 0.0), 50.0, true)]);
    let enemies = EnemyView::from_snapshots(vec![
        enemy(1, (10.0, 0.0), 120.0),
        enemy(2, (-20.0, 5.0), 180.0),
        enemy(3, (5.0, 5.0), 60.0),
    ]);

    let mut out = Vec::new();
    system.handle(GameStatus::Running, &towers, &enemies, &mut out);

    assert_eq!(
        out,
        vec![TowerTarget {
            tower: TowerId::new(1),
            enemy: EnemyId::new(2),
            tower_position: Vec2::ZERO,
            enemy_position: Vec2::new(-20.0, 5.0),
        }]
    );
}

#[test]
fn enemy_outside_range_is_ignored() {
    let mut system = TowerTargeting::new();
    let towers = TowerView::from_snapshots(vec![tower(1, (0.0, 0.0), 30.0, true)]);
    let enemies = EnemyView::from_snapshots(vec![
        enemy(1, (10.0, 0.0), 10.0),
        enemy(2, (25.0, 25.0), 400.0),
    ]);

    let mut out = Vec::new();
    system.handle(GameStatus::Running, &towers, &enemies, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].enemy, EnemyId::new(1));
}

#[test]
fn towers_on_cooldown_are_skipped() {
    let mut system = TowerTargeting::new();
    let towers = TowerView::from_snapshots(vec![
        tower(4, (0.0, 0.0), 100.0, false),
        tower(2, (0.0, 0.0), 100.0, true),
    ]);
    let enemies = EnemyView::from_snapshots(vec![enemy(1, (10.0, 0.0), 10.0)]);

    let mut out = Vec::new();
    system.handle(GameStatus::Running, &towers, &enemies, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].tower, TowerId::new(2));
}

#[test]
fn inactive_enemies_are_not_targeted() {
    let mut system = TowerTargeting::new();
    let towers = TowerView::from_snapshots(vec![tower(1, (0.0, 0.0), 100.0, true)]);
    let mut dying = enemy(1, (10.0, 0.0), 90.0);
    dying.status = EnemyStatus::DeathStart;
    let mut queued = enemy(2, (0.0, 0.0), 0.0);
    queued.status = EnemyStatus::NotSpawned;
    let enemies = EnemyView::from_snapshots(vec![dying, queued]);

    let mut out = Vec::new();
    system.handle(GameStatus::Running, &towers, &enemies, &mut out);

    assert!(out.is_empty());
}

#[test]
fn paused_game_clears_output() {
    let mut system = TowerTargeting::new();
    let towers = TowerView::from_snapshots(vec![tower(1, (0.0, 0.0), 100.0, true)]);
    let enemies = EnemyView::from_snapshots(vec![enemy(1, (10.0, 0.0), 10.0)]);

    let mut out = vec![TowerTarget {
        tower: TowerId::new(99),
        enemy: EnemyId::new(99),
        tower_position: Vec2::ZERO,
        enemy_position: Vec2::ZERO,
    }];
    system.handle(GameStatus::Paused, &towers, &enemies, &mut out);

    assert!(out.is_empty());
}

#[test]
fn equal_distances_prefer_smaller_enemy_id() {
    let mut system = TowerTargeting::new();
    let towers = TowerView::from_snapshots(vec![tower(1, (0.0, 0.0), 100.0, true)]);
    let enemies = EnemyView::from_snapshots(vec![
        enemy(8, (10.0, 0.0), 42.0),
        enemy(3, (-10.0, 0.0), 42.0),
    ]);

    let mut out = Vec::new();
    system.handle(GameStatus::Running, &towers, &enemies, &mut out);

    assert_eq!(out[0].enemy, EnemyId::new(3));
}
