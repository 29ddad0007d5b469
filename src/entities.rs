//! All game entity types — plain data, no game rules.

use crate::config::{
    Config, Rgb, BLUE, COIN_SIZE, ENEMY_SIZE, GREEN, PLAYER_SIZE, POWER_UP_SIZE, RED, WHITE,
    YELLOW,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Keys held during one frame. Level-triggered: a key held for ten frames
/// reads `true` on all ten.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in world pixels; origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Back-and-forth motion along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    /// Pixels per frame, never negative.
    pub speed: f32,
    /// `1.0` towards the far edge, `-1.0` towards the origin.
    pub dir: f32,
}

impl Sweep {
    pub fn new(speed: f32) -> Self {
        Sweep { speed, dir: 1.0 }
    }

    pub fn reversed(self) -> Self {
        Sweep { dir: -self.dir, ..self }
    }
}

// ── World entities ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    /// `None` on an axis means the platform is static along it.
    Platform {
        horizontal: Option<Sweep>,
        vertical: Option<Sweep>,
    },
    Enemy(Sweep),
    Coin,
    PowerUp,
}

/// Everything in the world except the player.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub rect: Rect,
    pub fill: Rgb,
    pub kind: EntityKind,
}

impl Entity {
    pub fn platform(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::moving_platform(Rect::new(x, y, w, h), None, None)
    }

    pub fn moving_platform(rect: Rect, horizontal: Option<Sweep>, vertical: Option<Sweep>) -> Self {
        Entity {
            rect,
            fill: WHITE,
            kind: EntityKind::Platform {
                horizontal,
                vertical,
            },
        }
    }

    pub fn enemy(x: f32, y: f32, patrol: Sweep) -> Self {
        Entity {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            fill: RED,
            kind: EntityKind::Enemy(patrol),
        }
    }

    pub fn coin(x: f32, y: f32) -> Self {
        Entity {
            rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
            fill: YELLOW,
            kind: EntityKind::Coin,
        }
    }

    pub fn power_up(x: f32, y: f32) -> Self {
        Entity {
            rect: Rect::new(x, y, POWER_UP_SIZE, POWER_UP_SIZE),
            fill: GREEN,
            kind: EntityKind::PowerUp,
        }
    }

    pub fn is_platform(&self) -> bool {
        matches!(self.kind, EntityKind::Platform { .. })
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, EntityKind::Enemy(_))
    }

    pub fn is_coin(&self) -> bool {
        self.kind == EntityKind::Coin
    }

    pub fn is_power_up(&self) -> bool {
        self.kind == EntityKind::PowerUp
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub fill: Rgb,
    pub vel_y: f32,
    /// Set by a jump, cleared only by landing; blocks re-jumping mid-air.
    pub airborne: bool,
    pub health: u32,
    pub score: u32,
    /// Frames of invincibility left.
    pub invincibility_frames: u32,
}

impl Player {
    /// A fresh player centred on the screen with default stats.
    pub fn spawn(config: &Config) -> Self {
        Player {
            rect: Rect::new(
                (config.screen_width - PLAYER_SIZE) / 2.0,
                (config.screen_height - PLAYER_SIZE) / 2.0,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            fill: BLUE,
            vel_y: 0.0,
            airborne: false,
            health: config.start_health,
            score: 0,
            invincibility_frames: 0,
        }
    }

    pub fn invincible(&self) -> bool {
        self.invincibility_frames > 0
    }

    pub fn alive(&self) -> bool {
        self.health > 0
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so the per-frame functions can return
/// a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct World {
    /// Kept after death so the HUD can still show the final score; it is
    /// neither updated nor drawn while `status` is `GameOver`.
    pub player: Player,
    pub entities: Vec<Entity>,
    pub status: GameStatus,
    /// Frames until the next periodic enemy spawn.
    pub spawn_countdown: u32,
    pub frame: u64,
    pub config: Config,
}

impl World {
    pub fn platforms(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_platform())
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_enemy())
    }

    pub fn coins(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_coin())
    }

    pub fn power_ups(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_power_up())
    }
}
