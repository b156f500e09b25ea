//! Explosions: short-lived, purely cosmetic sprite-strip animations

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

pub const SPRITE: &str = "explosion";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    /// Frame-sized rectangle centered on the blast
    pub rect: Rect,
    elapsed: f32,
    frame_time: f32,
    frame_count: u32,
}

impl Explosion {
    pub fn new(center: Vec2, frame_size: Vec2, frame_count: u32, frame_time: f32) -> Self {
        Self {
            rect: Rect::centered_at(center, frame_size),
            elapsed: 0.0,
            frame_time,
            frame_count: frame_count.max(1),
        }
    }

    pub fn location(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn duration(&self) -> f32 {
        self.frame_time * self.frame_count as f32
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration()
    }

    /// Current frame in the sprite strip
    pub fn frame(&self) -> u32 {
        if self.frame_time <= 0.0 {
            return self.frame_count - 1;
        }
        ((self.elapsed / self.frame_time) as u32).min(self.frame_count - 1)
    }

    pub fn update(&mut self, dt: f32) {
        if !self.finished() {
            self.elapsed += dt;
        }
    }
}
