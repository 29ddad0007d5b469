//! Tunables for the simulation and the terminal front-end.
//!
//! Physics values are expressed per frame, so the game runs at the speed
//! it was tuned for only at the default frame rate.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// A fill colour as an `(r, g, b)` triple.
pub type Rgb = (u8, u8, u8);

// ── World & physics ───────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const FPS: u32 = 60;
pub const GRAVITY: f32 = 0.8;
pub const JUMP_STRENGTH: f32 = -15.0;
pub const PLAYER_SPEED: f32 = 5.0;
pub const START_HEALTH: u32 = 3;
pub const INVINCIBILITY_SECONDS: u32 = 5;
/// Seconds between periodic enemy spawns.
pub const SPAWN_INTERVAL_SECONDS: u32 = 10;

// ── Entity sizes & speeds ─────────────────────────────────────────────────────

pub const PLAYER_SIZE: f32 = 50.0;
pub const ENEMY_SIZE: f32 = 40.0;
pub const ENEMY_SPEED: f32 = 3.0;
pub const COIN_SIZE: f32 = 20.0;
pub const POWER_UP_SIZE: f32 = 30.0;
pub const GROUND_HEIGHT: f32 = 40.0;

// ── Palette ───────────────────────────────────────────────────────────────────

pub const BLACK: Rgb = (0, 0, 0);
pub const WHITE: Rgb = (255, 255, 255);
pub const BLUE: Rgb = (0, 0, 255);
pub const RED: Rgb = (255, 0, 0);
pub const YELLOW: Rgb = (255, 255, 0);
pub const GREEN: Rgb = (0, 255, 0);

// ── Environment overrides ─────────────────────────────────────────────────────

pub const FPS_VAR: &str = "PLATFORMER_FPS";
pub const HEALTH_VAR: &str = "PLATFORMER_HEALTH";
pub const SEED_VAR: &str = "PLATFORMER_SEED";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be an unsigned integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
    #[error("{key} is too large")]
    OutOfRange { key: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,
    pub gravity: f32,
    pub jump_strength: f32,
    pub player_speed: f32,
    pub start_health: u32,
    /// Frames of invincibility granted by one power-up.
    pub invincibility_frames: u32,
    /// Frames between periodic enemy spawns.
    pub spawn_interval_frames: u32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            player_speed: PLAYER_SPEED,
            start_health: START_HEALTH,
            invincibility_frames: INVINCIBILITY_SECONDS * FPS,
            spawn_interval_frames: SPAWN_INTERVAL_SECONDS * FPS,
            seed: None,
        }
    }
}

impl Config {
    /// Defaults overridden by the `PLATFORMER_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(fps) = parse_var::<u32, _>(&lookup, FPS_VAR)? {
            if fps == 0 {
                return Err(ConfigError::Zero { key: FPS_VAR });
            }
            config = config.with_fps(fps)?;
        }
        if let Some(health) = parse_var::<u32, _>(&lookup, HEALTH_VAR)? {
            if health == 0 {
                return Err(ConfigError::Zero { key: HEALTH_VAR });
            }
            config.start_health = health;
        }
        config.seed = parse_var::<u64, _>(&lookup, SEED_VAR)?;

        Ok(config)
    }

    /// Change the frame rate, rescaling the frame-counted timers with it.
    pub fn with_fps(self, fps: u32) -> Result<Self, ConfigError> {
        let frames = |seconds: u32| {
            seconds
                .checked_mul(fps)
                .ok_or(ConfigError::OutOfRange { key: FPS_VAR })
        };
        Ok(Config {
            fps,
            invincibility_frames: frames(INVINCIBILITY_SECONDS)?,
            spawn_interval_frames: frames(SPAWN_INTERVAL_SECONDS)?,
            ..self
        })
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => {
            let parsed = raw.trim().parse::<T>();
            parsed
                .map(Some)
                .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
        }
    }
}
