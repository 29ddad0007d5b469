use platformer::compute::world_with;
use platformer::config::*;
use platformer::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::Running, GameStatus::GameOver);
    assert_eq!(EntityKind::Coin, EntityKind::Coin);
    assert_ne!(EntityKind::Coin, EntityKind::PowerUp);

    let enemy = Entity::enemy(1.0, 2.0, Sweep::new(3.0));
    assert_eq!(enemy.clone(), enemy);
}

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
}

#[test]
fn sweep_reversal() {
    let s = Sweep::new(2.0);
    assert_eq!(s.dir, 1.0);
    assert_eq!(s.reversed(), Sweep { speed: 2.0, dir: -1.0 });
    assert_eq!(s.reversed().reversed(), s);
}

#[test]
fn constructors_use_the_palette() {
    assert_eq!(Entity::platform(0.0, 0.0, 10.0, 10.0).fill, WHITE);
    assert_eq!(Entity::enemy(0.0, 0.0, Sweep::new(1.0)).fill, RED);
    assert_eq!(Entity::coin(0.0, 0.0).fill, YELLOW);
    assert_eq!(Entity::power_up(0.0, 0.0).fill, GREEN);
    assert_eq!(Player::spawn(&Config::default()).fill, BLUE);
}

#[test]
fn constructors_use_the_standard_sizes() {
    let e = Entity::enemy(5.0, 6.0, Sweep::new(1.0));
    assert_eq!(e.rect, Rect::new(5.0, 6.0, ENEMY_SIZE, ENEMY_SIZE));
    assert_eq!(Entity::coin(0.0, 0.0).rect.w, COIN_SIZE);
    assert_eq!(Entity::power_up(0.0, 0.0).rect.h, POWER_UP_SIZE);
}

#[test]
fn static_platform_has_no_motion() {
    let p = Entity::platform(0.0, 0.0, 10.0, 10.0);
    assert_eq!(
        p.kind,
        EntityKind::Platform {
            horizontal: None,
            vertical: None
        }
    );
}

#[test]
fn player_invincibility_follows_the_counter() {
    let mut p = Player::spawn(&Config::default());
    assert!(!p.invincible());
    p.invincibility_frames = 1;
    assert!(p.invincible());
}

#[test]
fn player_dies_at_zero_health() {
    let mut p = Player::spawn(&Config::default());
    assert!(p.alive());
    p.health = 0;
    assert!(!p.alive());
}

#[test]
fn world_filters_by_kind() {
    let w = world_with(
        Config::default(),
        vec![
            Entity::platform(0.0, 0.0, 10.0, 10.0),
            Entity::coin(0.0, 0.0),
            Entity::coin(5.0, 5.0),
            Entity::enemy(0.0, 0.0, Sweep::new(1.0)),
        ],
    );
    assert_eq!(w.platforms().count(), 1);
    assert_eq!(w.coins().count(), 2);
    assert_eq!(w.enemies().count(), 1);
    assert_eq!(w.power_ups().count(), 0);
}

#[test]
fn world_clone_is_independent() {
    let original = world_with(Config::default(), Vec::new());
    let mut cloned = original.clone();

    cloned.player.rect.x = 99.0;
    cloned.player.score = 999;
    cloned.entities.push(Entity::coin(5.0, 5.0));

    assert_eq!(original.player.rect.x, 375.0);
    assert_eq!(original.player.score, 0);
    assert!(original.entities.is_empty());
}
