//! Teddy bears: the enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Body;
use super::projectile::{ProjectileKind, ProjectileSpawn};
use super::rect::Rect;

pub const SPRITE: &str = "teddybear";

/// A teddy bear entity
///
/// Position, velocity and the active flag are public so collision resolution
/// can write its outcome back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeddyBear {
    pub rect: Rect,
    /// Pixels per second
    pub velocity: Vec2,
    pub active: bool,
    /// Seconds between shots; `None` for a bear that never fires
    fire_delay: Option<f32>,
    elapsed_fire: f32,
}

impl TeddyBear {
    pub fn new(rect: Rect, velocity: Vec2) -> Self {
        Self {
            rect,
            velocity,
            active: true,
            fire_delay: None,
            elapsed_fire: 0.0,
        }
    }

    /// Arm the bear to fire after `delay` seconds
    pub fn with_fire_delay(mut self, delay: f32) -> Self {
        self.rearm(delay);
        self
    }

    /// Restart the firing timer with a new delay
    pub fn rearm(&mut self, delay: f32) {
        self.fire_delay = Some(delay);
        self.elapsed_fire = 0.0;
    }

    pub fn fire_delay(&self) -> Option<f32> {
        self.fire_delay
    }

    /// Center of the bear
    pub fn location(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn body(&self) -> Body {
        Body::new(self.rect, self.velocity)
    }

    /// Take a resolved body from collision handling
    pub fn apply_body(&mut self, body: Body) {
        self.rect = body.rect;
        self.velocity = body.velocity;
    }

    /// Drift along the velocity (no clamping) and tick the firing timer
    ///
    /// Returns a spawn request when the firing delay elapses. The caller
    /// should [`rearm`](Self::rearm) the bear with its next delay.
    pub fn update(&mut self, dt: f32, projectile_offset: f32) -> Option<ProjectileSpawn> {
        if !self.active {
            return None;
        }
        self.rect = self.rect.translated(self.velocity * dt);

        let delay = self.fire_delay?;
        self.elapsed_fire += dt;
        if self.elapsed_fire < delay {
            return None;
        }
        self.fire_delay = None;
        Some(ProjectileSpawn {
            kind: ProjectileKind::EnemyShot,
            origin: Vec2::new(self.rect.center().x, self.rect.bottom() + projectile_offset),
        })
    }
}
