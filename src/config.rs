//! Game tuning table
//!
//! Every component reads its constants from a [`GameConfig`]. Defaults come
//! from [`crate::consts`]; a JSON file can override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Static game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Burger ===
    /// Movement speed per axis (pixels/sec)
    pub burger_speed: f32,
    pub burger_initial_health: i32,
    /// Minimum time between shots while fire is held (seconds)
    pub burger_cooldown: f32,
    pub french_fries_offset: f32,

    // === Teddy bears ===
    pub max_bears: usize,
    pub min_bear_speed: f32,
    pub bear_speed_range: f32,
    /// Damage dealt to the burger by touching a bear
    pub bear_damage: i32,
    /// Score for shooting a bear
    pub bear_points: u32,
    /// Whether bears fire teddy bear projectiles
    pub bears_fire: bool,
    pub bear_min_fire_delay: f32,
    pub bear_fire_delay_range: f32,
    pub teddy_bear_projectile_offset: f32,

    // === Projectiles ===
    pub french_fries_speed: f32,
    pub french_fries_damage: i32,
    pub teddy_bear_projectile_speed: f32,
    pub teddy_bear_projectile_damage: i32,

    // === Explosions ===
    pub explosion_frames: u32,
    pub explosion_frame_time: f32,

    // === Spawning / collisions ===
    /// Keep-out band above the arena floor for new bears
    pub spawn_border_size: f32,
    pub max_spawn_attempts: u32,
    /// Also keep new bears off running explosions
    pub spawn_avoids_explosions: bool,
    /// Lookahead window used to predict bear-bear collisions (seconds)
    pub collision_lookahead: f32,

    // === HUD ===
    pub score_location: (f32, f32),
    pub health_location: (f32, f32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            burger_speed: BURGER_SPEED,
            burger_initial_health: BURGER_INITIAL_HEALTH,
            burger_cooldown: BURGER_COOLDOWN_SECS,
            french_fries_offset: FRENCH_FRIES_PROJECTILE_OFFSET,

            max_bears: MAX_BEARS,
            min_bear_speed: MIN_BEAR_SPEED,
            bear_speed_range: BEAR_SPEED_RANGE,
            bear_damage: BEAR_DAMAGE,
            bear_points: BEAR_POINTS,
            bears_fire: true,
            bear_min_fire_delay: BEAR_MIN_FIRE_DELAY_SECS,
            bear_fire_delay_range: BEAR_FIRE_DELAY_RANGE_SECS,
            teddy_bear_projectile_offset: TEDDY_BEAR_PROJECTILE_OFFSET,

            french_fries_speed: FRENCH_FRIES_PROJECTILE_SPEED,
            french_fries_damage: FRENCH_FRIES_PROJECTILE_DAMAGE,
            teddy_bear_projectile_speed: TEDDY_BEAR_PROJECTILE_SPEED,
            teddy_bear_projectile_damage: TEDDY_BEAR_PROJECTILE_DAMAGE,

            explosion_frames: EXPLOSION_FRAMES,
            explosion_frame_time: EXPLOSION_FRAME_SECS,

            spawn_border_size: SPAWN_BORDER_SIZE,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
            spawn_avoids_explosions: false,
            collision_lookahead: COLLISION_LOOKAHEAD_SECS,

            score_location: SCORE_LOCATION,
            health_location: HEALTH_LOCATION,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load config from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values instead of rejecting them
    pub fn sanitized(mut self) -> Self {
        self.arena_width = self.arena_width.max(1.0);
        self.arena_height = self.arena_height.max(1.0);
        self.burger_speed = self.burger_speed.max(0.0);
        self.burger_initial_health = self.burger_initial_health.max(1);
        self.burger_cooldown = self.burger_cooldown.max(0.0);
        self.min_bear_speed = self.min_bear_speed.max(0.0);
        self.bear_speed_range = self.bear_speed_range.max(0.0);
        self.bear_min_fire_delay = self.bear_min_fire_delay.max(SIM_DT);
        self.bear_fire_delay_range = self.bear_fire_delay_range.max(0.0);
        self.french_fries_speed = self.french_fries_speed.max(0.0);
        self.teddy_bear_projectile_speed = self.teddy_bear_projectile_speed.max(0.0);
        self.explosion_frames = self.explosion_frames.max(1);
        self.explosion_frame_time = self.explosion_frame_time.max(0.0);
        self.spawn_border_size = self.spawn_border_size.clamp(0.0, self.arena_height);
        self.max_spawn_attempts = self.max_spawn_attempts.max(1);
        self.collision_lookahead = self.collision_lookahead.max(0.0);
        self
    }

    /// Arena size as a vector
    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }
}
