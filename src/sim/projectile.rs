//! Projectiles: french fries fired by the burger, teddy bear shots fired by bears

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// French fries from the burger; travel up, hurt bears
    PlayerShot,
    /// Teddy bear projectile; travels down
    EnemyShot,
}

/// Per-kind behavior, looked up once when a projectile is created
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileTraits {
    /// Signed vertical speed (pixels/sec, negative is up)
    pub y_velocity: f32,
    pub damage: i32,
}

impl ProjectileKind {
    pub fn traits(self, config: &GameConfig) -> ProjectileTraits {
        match self {
            ProjectileKind::PlayerShot => ProjectileTraits {
                y_velocity: -config.french_fries_speed,
                damage: config.french_fries_damage,
            },
            ProjectileKind::EnemyShot => ProjectileTraits {
                y_velocity: config.teddy_bear_projectile_speed,
                damage: config.teddy_bear_projectile_damage,
            },
        }
    }

    pub fn sprite(self) -> &'static str {
        match self {
            ProjectileKind::PlayerShot => "frenchfries",
            ProjectileKind::EnemyShot => "teddybearprojectile",
        }
    }

    /// Only the burger's shots hurt bears
    pub fn hurts_bears(self) -> bool {
        self == ProjectileKind::PlayerShot
    }
}

/// Request from an entity to put a projectile into the world
///
/// The projectile's trailing edge is placed at `origin` (its bottom edge for
/// shots travelling up, its top edge for shots travelling down), horizontally
/// centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpawn {
    pub kind: ProjectileKind,
    pub origin: Vec2,
}

/// A projectile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    kind: ProjectileKind,
    pub rect: Rect,
    y_velocity: f32,
    damage: i32,
    pub active: bool,
}

impl Projectile {
    pub fn new(kind: ProjectileKind, rect: Rect, config: &GameConfig) -> Self {
        let traits = kind.traits(config);
        Self {
            kind,
            rect,
            y_velocity: traits.y_velocity,
            damage: traits.damage,
            active: true,
        }
    }

    /// Build a projectile of the given sprite size from a spawn request
    pub fn launched(spawn: ProjectileSpawn, size: Vec2, config: &GameConfig) -> Self {
        let traits = spawn.kind.traits(config);
        let y = if traits.y_velocity < 0.0 {
            spawn.origin.y - size.y
        } else {
            spawn.origin.y
        };
        let rect = Rect::new(spawn.origin.x - size.x / 2.0, y, size.x, size.y);
        Self::new(spawn.kind, rect, config)
    }

    pub fn kind(&self) -> ProjectileKind {
        self.kind
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Move vertically; deactivate once any part leaves the top or bottom of the arena
    pub fn update(&mut self, dt: f32, arena_height: f32) {
        if !self.active {
            return;
        }
        self.rect.y += self.y_velocity * dt;
        if self.rect.top() < 0.0 || self.rect.bottom() > arena_height {
            self.active = false;
        }
    }
}
