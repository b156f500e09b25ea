//! Teddy bear spawning
//!
//! All randomness in the simulation flows through the spawner's seeded RNG so
//! a session replays identically from the same seed and inputs.

use std::f32::consts::PI;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bear::TeddyBear;
use super::collision::is_collision_free;
use super::rect::Rect;
use crate::config::GameConfig;
use crate::velocity_from_angle;

pub struct Spawner {
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform value in `[min, min + range)`
    fn random_in(&mut self, min: f32, range: f32) -> f32 {
        min + self.rng.random::<f32>() * range.max(0.0)
    }

    /// Random top-left corner for a rectangle of `size`, fully inside the arena
    /// and above the spawn border
    pub fn random_rect(&mut self, size: Vec2, config: &GameConfig) -> Rect {
        let max_x = config.arena_width - size.x;
        let max_y = config.arena_height - config.spawn_border_size - size.y;
        let x = self.random_in(0.0, max_x);
        let y = self.random_in(0.0, max_y);
        Rect::new(x, y, size.x, size.y)
    }

    /// Random speed in the configured range, direction angle in [0, π)
    ///
    /// With y growing downward this never points up.
    pub fn random_velocity(&mut self, config: &GameConfig) -> Vec2 {
        let speed = self.random_in(config.min_bear_speed, config.bear_speed_range);
        let angle = self.rng.random::<f32>() * PI;
        velocity_from_angle(speed, angle)
    }

    pub fn next_fire_delay(&mut self, config: &GameConfig) -> f32 {
        self.random_in(config.bear_min_fire_delay, config.bear_fire_delay_range)
    }

    /// Try to place a new bear clear of every rectangle in `occupied`
    ///
    /// The velocity is drawn once; only the position is retried. Gives up
    /// after `max_spawn_attempts` placements and returns `None`.
    pub fn spawn_bear(
        &mut self,
        size: Vec2,
        occupied: &[Rect],
        config: &GameConfig,
    ) -> Option<TeddyBear> {
        let velocity = self.random_velocity(config);
        for _ in 0..config.max_spawn_attempts {
            let rect = self.random_rect(size, config);
            if is_collision_free(&rect, occupied) {
                let bear = TeddyBear::new(rect, velocity);
                return Some(if config.bears_fire {
                    bear.with_fire_delay(self.next_fire_delay(config))
                } else {
                    bear
                });
            }
        }
        log::debug!(
            "No free spot for a bear after {} attempts ({} occupied)",
            config.max_spawn_attempts,
            occupied.len()
        );
        None
    }
}
