//! The player's burger

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::{ProjectileKind, ProjectileSpawn};
use super::rect::Rect;
use super::tick::TickInput;
use crate::config::GameConfig;

pub const SPRITE: &str = "burger";

/// Firing readiness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireState {
    Ready,
    /// Seconds since the last shot
    CoolingDown { elapsed: f32 },
}

/// The burger entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Burger {
    rect: Rect,
    health: i32,
    max_health: i32,
    fire: FireState,
}

impl Burger {
    /// Create a burger of `size` centered on `center`, kept inside `arena`
    pub fn new(center: Vec2, size: Vec2, arena: &Rect, config: &GameConfig) -> Self {
        let max_health = config.burger_initial_health;
        let mut burger = Self {
            rect: Rect::new(0.0, 0.0, size.x, size.y),
            health: max_health,
            max_health,
            fire: FireState::Ready,
        };
        burger.set_center(center, arena);
        burger
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Move the burger's center, keeping it fully inside `arena`
    pub fn set_center(&mut self, center: Vec2, arena: &Rect) {
        self.rect = Rect::centered_at(center, self.rect.size()).clamped_inside(arena);
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Set health, clamped to [0, max]
    pub fn set_health(&mut self, health: i32) {
        self.health = health.clamp(0, self.max_health);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.set_health(self.health.saturating_sub(amount));
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn fire_state(&self) -> FireState {
        self.fire
    }

    /// Move from input and handle firing
    ///
    /// Returns a spawn request when a french fry is fired. A dead burger
    /// ignores input entirely.
    pub fn update(
        &mut self,
        dt: f32,
        input: &TickInput,
        arena: &Rect,
        config: &GameConfig,
    ) -> Option<ProjectileSpawn> {
        if !self.is_alive() {
            return None;
        }

        let mut direction = Vec2::ZERO;
        if input.left {
            direction.x -= 1.0;
        }
        if input.right {
            direction.x += 1.0;
        }
        if input.up {
            direction.y -= 1.0;
        }
        if input.down {
            direction.y += 1.0;
        }
        if direction != Vec2::ZERO {
            let step = direction * config.burger_speed * dt;
            self.rect = self.rect.translated(step).clamped_inside(arena);
        }

        // Letting go of fire re-arms immediately
        if let FireState::CoolingDown { elapsed } = self.fire {
            let elapsed = elapsed + dt;
            self.fire = if elapsed >= config.burger_cooldown || !input.fire {
                FireState::Ready
            } else {
                FireState::CoolingDown { elapsed }
            };
        }

        if input.fire && self.fire == FireState::Ready {
            self.fire = FireState::CoolingDown { elapsed: 0.0 };
            let origin = Vec2::new(
                self.rect.center().x,
                self.rect.top() - config.french_fries_offset,
            );
            return Some(ProjectileSpawn {
                kind: ProjectileKind::PlayerShot,
                origin,
            });
        }

        None
    }
}
