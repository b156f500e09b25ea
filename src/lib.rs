//! Burger Bash - a small 2D arcade shooter
//!
//! A burger at the bottom of the arena fires french fries at teddy bears that
//! drift, bounce off each other, shoot back and explode.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, per-frame update)
//! - `config`: Static tuning table, optionally loaded from JSON
//! - `content`: Sprite dimension lookup
//! - `audio`: Sound cue sink
//! - `render`: Sprite/text draw sink
//! - `platform`: Input sources

pub mod audio;
pub mod config;
pub mod content;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::GameConfig;

use glam::Vec2;

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Arena dimensions (pixels, y grows downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Burger defaults
    pub const BURGER_SPEED: f32 = 300.0; // pixels/sec per axis
    pub const BURGER_INITIAL_HEALTH: i32 = 100;
    pub const BURGER_COOLDOWN_SECS: f32 = 0.5;
    /// Gap between the burger's top edge and a new french fry
    pub const FRENCH_FRIES_PROJECTILE_OFFSET: f32 = 20.0;
    /// Burger spawn height above the arena floor
    pub const BURGER_SPAWN_MARGIN: f32 = 10.0;

    /// Teddy bear defaults
    pub const MAX_BEARS: usize = 5;
    pub const MIN_BEAR_SPEED: f32 = 100.0;
    pub const BEAR_SPEED_RANGE: f32 = 200.0;
    pub const BEAR_DAMAGE: i32 = 10;
    pub const BEAR_POINTS: u32 = 10;
    pub const BEAR_MIN_FIRE_DELAY_SECS: f32 = 1.0;
    pub const BEAR_FIRE_DELAY_RANGE_SECS: f32 = 2.0;
    /// Gap between a bear's bottom edge and a new teddy bear projectile
    pub const TEDDY_BEAR_PROJECTILE_OFFSET: f32 = 5.0;

    /// Projectile defaults
    pub const FRENCH_FRIES_PROJECTILE_SPEED: f32 = 400.0;
    pub const FRENCH_FRIES_PROJECTILE_DAMAGE: i32 = 5;
    pub const TEDDY_BEAR_PROJECTILE_SPEED: f32 = 300.0;
    pub const TEDDY_BEAR_PROJECTILE_DAMAGE: i32 = 10;

    /// Explosion sprite strip
    pub const EXPLOSION_FRAMES: u32 = 9;
    pub const EXPLOSION_FRAME_SECS: f32 = 0.03;

    /// Spawning
    pub const SPAWN_BORDER_SIZE: f32 = 100.0;
    pub const MAX_SPAWN_ATTEMPTS: u32 = 32;

    /// Collision lookahead window (one frame)
    pub const COLLISION_LOOKAHEAD_SECS: f32 = SIM_DT;

    /// HUD
    pub const SCORE_PREFIX: &str = "Score: ";
    pub const HEALTH_PREFIX: &str = "Health: ";
    pub const SCORE_LOCATION: (f32, f32) = (10.0, 10.0);
    pub const HEALTH_LOCATION: (f32, f32) = (10.0, 40.0);
}

/// Velocity of the given magnitude along `angle` (radians, screen coordinates)
///
/// With y growing downward, any angle in [0, π) yields a non-negative y.
#[inline]
pub fn velocity_from_angle(speed: f32, angle: f32) -> Vec2 {
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}
