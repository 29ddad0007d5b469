//! Pure game-logic functions.
//!
//! Every public function takes immutable references to the current state
//! (and, where needed, an RNG handle) and returns brand-new values. Side
//! effects are limited to the injected RNG and `tracing` events.

use rand::Rng;
use tracing::{debug, info};

use crate::collision::{intersects, landing_top, sweep_axis};
use crate::config::{Config, ENEMY_SIZE, ENEMY_SPEED, GROUND_HEIGHT};
use crate::entities::{Controls, Entity, EntityKind, GameStatus, Player, Rect, Sweep, World};

// ── Constructors ─────────────────────────────────────────────────────────────

/// The starting layout: ground, ledges, moving platforms, two patrolling
/// enemies, five coins and one power-up.
pub fn default_level(config: &Config) -> Vec<Entity> {
    let w = config.screen_width;
    let h = config.screen_height;
    let ground_top = h - GROUND_HEIGHT;
    let enemy_y = ground_top - ENEMY_SIZE;

    vec![
        Entity::platform(0.0, ground_top, w, GROUND_HEIGHT),
        Entity::platform(120.0, h - 170.0, 180.0, 20.0),
        Entity::platform(w - 300.0, h - 170.0, 180.0, 20.0),
        Entity::moving_platform(
            Rect::new(w / 2.0 - 80.0, h - 290.0, 160.0, 20.0),
            Some(Sweep::new(2.0)),
            None,
        ),
        Entity::moving_platform(
            Rect::new(40.0, h - 400.0, 120.0, 20.0),
            None,
            Some(Sweep::new(1.0)),
        ),
        Entity::enemy(60.0, enemy_y, Sweep::new(ENEMY_SPEED)),
        Entity::enemy(w - 100.0, enemy_y, Sweep::new(ENEMY_SPEED - 1.0).reversed()),
        Entity::coin(200.0, h - 210.0),
        Entity::coin(w - 220.0, h - 210.0),
        Entity::coin(w / 2.0 - 10.0, h - 330.0),
        Entity::coin(80.0, ground_top - 30.0),
        Entity::coin(w - 100.0, ground_top - 120.0),
        Entity::power_up(w / 2.0 - 15.0, h - 420.0),
    ]
}

/// Build a running world around `entities` with a fresh player.
pub fn world_with(config: Config, entities: Vec<Entity>) -> World {
    World {
        player: Player::spawn(&config),
        entities,
        status: GameStatus::Running,
        spawn_countdown: config.spawn_interval_frames,
        frame: 0,
        config,
    }
}

/// Build the initial game state with the default level.
pub fn init_world(config: Config) -> World {
    world_with(config, default_level(&config))
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Movement, gravity, ground clamp and jump for one frame.
pub fn move_player(player: &Player, controls: Controls, config: &Config) -> Player {
    let mut rect = player.rect;
    let mut vel_y = player.vel_y;
    let mut airborne = player.airborne;

    if controls.left {
        rect.x -= config.player_speed;
    }
    if controls.right {
        rect.x += config.player_speed;
    }
    rect.x = rect.x.clamp(0.0, (config.screen_width - rect.w).max(0.0));

    vel_y += config.gravity;
    rect.y += vel_y;

    if rect.bottom() >= config.screen_height {
        rect.y = config.screen_height - rect.h;
        vel_y = 0.0;
        airborne = false;
    }

    if controls.jump && !airborne {
        vel_y = config.jump_strength;
        airborne = true;
    }

    Player {
        rect,
        vel_y,
        airborne,
        ..player.clone()
    }
}

/// Remove every coin and power-up under the player and apply their effects,
/// then run the invincibility countdown.
///
/// The countdown skips the frame a power-up is taken, so invincibility
/// covers exactly `invincibility_frames` updates including the pickup.
pub fn collect_pickups(
    player: &Player,
    entities: &[Entity],
    config: &Config,
) -> (Player, Vec<Entity>) {
    let mut coins = 0u32;
    let mut power_ups = 0u32;

    let remaining: Vec<Entity> = entities
        .iter()
        .filter(|e| {
            if !intersects(&player.rect, &e.rect) {
                return true;
            }
            match e.kind {
                EntityKind::Coin => {
                    coins += 1;
                    false
                }
                EntityKind::PowerUp => {
                    power_ups += 1;
                    false
                }
                _ => true,
            }
        })
        .cloned()
        .collect();

    if coins > 0 {
        debug!(coins, score = player.score + coins, "coins collected");
    }

    let invincibility_frames = if power_ups > 0 {
        info!(frames = config.invincibility_frames, "power-up collected");
        config.invincibility_frames
    } else {
        player.invincibility_frames.saturating_sub(1)
    };

    let player = Player {
        score: player.score + coins,
        invincibility_frames,
        ..player.clone()
    };
    (player, remaining)
}

/// Lose one health point if an enemy is touching an unprotected player.
pub fn apply_enemy_contact(player: &Player, entities: &[Entity]) -> Player {
    if player.invincible() {
        return player.clone();
    }
    let hit = entities
        .iter()
        .any(|e| e.is_enemy() && intersects(&player.rect, &e.rect));
    if !hit {
        return player.clone();
    }

    let health = player.health.saturating_sub(1);
    info!(health, "player hit by enemy");
    Player {
        health,
        ..player.clone()
    }
}

/// The player's whole per-frame update. Returns the new player and the
/// entities left after pickups.
pub fn step_player(
    player: &Player,
    controls: Controls,
    entities: &[Entity],
    config: &Config,
) -> (Player, Vec<Entity>) {
    let moved = move_player(player, controls, config);
    let (collected, remaining) = collect_pickups(&moved, entities, config);
    let player = apply_enemy_contact(&collected, &remaining);
    (player, remaining)
}

/// Stand the player on the highest platform it overlaps.
///
/// Only applies while the player is falling or resting; a rising player
/// passes through platforms from below.
pub fn land_on_platforms(player: &Player, entities: &[Entity]) -> Player {
    if player.vel_y < 0.0 {
        return player.clone();
    }
    match landing_top(&player.rect, entities) {
        Some(top) => Player {
            rect: Rect {
                y: top - player.rect.h,
                ..player.rect
            },
            vel_y: 0.0,
            airborne: false,
            ..player.clone()
        },
        None => player.clone(),
    }
}

// ── Other entities ───────────────────────────────────────────────────────────

/// Advance one entity by a frame. Coins and power-ups never move.
pub fn step_entity(entity: &Entity, config: &Config) -> Entity {
    let rect = entity.rect;
    match &entity.kind {
        EntityKind::Platform {
            horizontal,
            vertical,
        } => {
            let (x, horizontal) = match horizontal {
                Some(s) => {
                    let (x, s) = sweep_axis(rect.x, rect.w, config.screen_width, *s);
                    (x, Some(s))
                }
                None => (rect.x, None),
            };
            let (y, vertical) = match vertical {
                Some(s) => {
                    let (y, s) = sweep_axis(rect.y, rect.h, config.screen_height, *s);
                    (y, Some(s))
                }
                None => (rect.y, None),
            };
            Entity {
                rect: Rect { x, y, ..rect },
                kind: EntityKind::Platform {
                    horizontal,
                    vertical,
                },
                ..entity.clone()
            }
        }
        EntityKind::Enemy(patrol) => {
            let (x, patrol) = sweep_axis(rect.x, rect.w, config.screen_width, *patrol);
            Entity {
                rect: Rect { x, ..rect },
                kind: EntityKind::Enemy(patrol),
                ..entity.clone()
            }
        }
        EntityKind::Coin | EntityKind::PowerUp => entity.clone(),
    }
}

/// An enemy at a random in-bounds position, heading a random way.
pub fn random_enemy(config: &Config, rng: &mut impl Rng) -> Entity {
    let max_x = (config.screen_width - ENEMY_SIZE).max(0.0);
    let max_y = (config.screen_height - ENEMY_SIZE).max(0.0);
    let x = rng.gen_range(0.0..=max_x);
    let y = rng.gen_range(0.0..=max_y);
    let patrol = Sweep::new(ENEMY_SPEED);
    let patrol = if rng.gen_bool(0.5) {
        patrol
    } else {
        patrol.reversed()
    };
    Entity::enemy(x, y, patrol)
}

/// Count the spawn timer down by one frame, adding an enemy when it expires.
pub fn advance_spawner(
    countdown: u32,
    entities: Vec<Entity>,
    config: &Config,
    rng: &mut impl Rng,
) -> (u32, Vec<Entity>) {
    let remaining = countdown.saturating_sub(1);
    if remaining > 0 {
        return (remaining, entities);
    }

    let enemy = random_enemy(config, rng);
    debug!(x = enemy.rect.x, y = enemy.rect.y, "enemy spawned");
    let mut entities = entities;
    entities.push(enemy);
    (config.spawn_interval_frames.max(1), entities)
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame. All randomness comes through `rng`
/// so callers control determinism (tests use a seeded RNG).
pub fn tick(state: &World, controls: Controls, rng: &mut impl Rng) -> World {
    let config = state.config;
    let frame = state.frame + 1;

    // ── 1. Player, then everything else ─────────────────────────────────────
    let (player, entities, status) = match state.status {
        GameStatus::Running => {
            let (player, entities) =
                step_player(&state.player, controls, &state.entities, &config);
            let entities: Vec<Entity> = entities.iter().map(|e| step_entity(e, &config)).collect();

            // ── 2. Platform landing ─────────────────────────────────────────
            if player.alive() {
                let player = land_on_platforms(&player, &entities);
                (player, entities, GameStatus::Running)
            } else {
                info!(score = player.score, frame, "player died");
                (player, entities, GameStatus::GameOver)
            }
        }
        GameStatus::GameOver => (
            state.player.clone(),
            state.entities.clone(),
            GameStatus::GameOver,
        ),
    };

    // ── 3. Periodic spawn, in both states ───────────────────────────────────
    let (spawn_countdown, entities) =
        advance_spawner(state.spawn_countdown, entities, &config, rng);

    World {
        player,
        entities,
        status,
        spawn_countdown,
        frame,
        config,
    }
}

/// Replace a dead player with a fresh one. Everything else is kept as is;
/// a running world is returned unchanged.
pub fn restart(state: &World) -> World {
    if state.status != GameStatus::GameOver {
        return state.clone();
    }
    info!(frame = state.frame, "restart");
    World {
        player: Player::spawn(&state.config),
        status: GameStatus::Running,
        ..state.clone()
    }
}
