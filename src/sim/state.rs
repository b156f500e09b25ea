//! Session state: the world and everything in it
//!
//! The world exclusively owns the entity pools. Entities never reach into a
//! pool themselves; they hand back spawn requests that the world applies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bear::{self, TeddyBear};
use super::burger::{self, Burger};
use super::explosion::{self, Explosion};
use super::projectile::{Projectile, ProjectileKind, ProjectileSpawn};
use super::rect::Rect;
use super::spawn::Spawner;
use crate::config::GameConfig;
use crate::consts::BURGER_SPAWN_MARGIN;
use crate::content::SpriteSource;

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Normal play
    Running,
    /// Burger destroyed; bears and projectiles keep going
    PlayerDead,
    /// Quit requested (terminal)
    Exiting,
}

/// Sprite dimensions resolved once per session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySizes {
    pub burger: Vec2,
    pub bear: Vec2,
    pub french_fries: Vec2,
    pub teddy_bear_projectile: Vec2,
    pub explosion: Vec2,
}

impl EntitySizes {
    pub fn resolve(sprites: &impl SpriteSource) -> Self {
        Self {
            burger: sprites.size_or_default(burger::SPRITE),
            bear: sprites.size_or_default(bear::SPRITE),
            french_fries: sprites.size_or_default(ProjectileKind::PlayerShot.sprite()),
            teddy_bear_projectile: sprites.size_or_default(ProjectileKind::EnemyShot.sprite()),
            explosion: sprites.size_or_default(explosion::SPRITE),
        }
    }

    pub fn projectile(&self, kind: ProjectileKind) -> Vec2 {
        match kind {
            ProjectileKind::PlayerShot => self.french_fries,
            ProjectileKind::EnemyShot => self.teddy_bear_projectile,
        }
    }
}

/// Running counters for the session summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub frames: u64,
    pub shots_fired: u32,
    pub bear_shots_fired: u32,
    pub bears_shot: u32,
    pub bears_rammed: u32,
    pub bears_spawned: u32,
    pub skipped_spawns: u32,
}

/// End-of-session report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub phase: SessionPhase,
    pub score: u32,
    pub health: i32,
    pub stats: SessionStats,
    pub bears: Vec<TeddyBear>,
}

/// The complete game world
pub struct World {
    pub config: GameConfig,
    pub arena: Rect,
    pub sizes: EntitySizes,
    pub seed: u64,
    pub phase: SessionPhase,
    pub burger: Burger,
    pub bears: Vec<TeddyBear>,
    pub projectiles: Vec<Projectile>,
    pub explosions: Vec<Explosion>,
    pub score: u32,
    pub stats: SessionStats,
    /// Set once the death explosion has been spawned
    pub(crate) burger_dead: bool,
    pub(crate) spawner: Spawner,
}

impl World {
    /// New session: burger near the bottom center, bear population filled
    pub fn new(config: GameConfig, sprites: &impl SpriteSource, seed: u64) -> Self {
        let mut world = Self::empty(config, sprites, seed);
        world.top_up_bears();
        log::info!(
            "Session started: seed {}, arena {}x{}, {} bears",
            seed,
            world.config.arena_width,
            world.config.arena_height,
            world.bears.len()
        );
        world
    }

    /// New session with no bears spawned yet
    pub fn empty(config: GameConfig, sprites: &impl SpriteSource, seed: u64) -> Self {
        let arena = Rect::arena(config.arena_size());
        let sizes = EntitySizes::resolve(sprites);
        let burger_center = Vec2::new(
            config.arena_width / 2.0,
            config.arena_height - BURGER_SPAWN_MARGIN,
        );
        let burger = Burger::new(burger_center, sizes.burger, &arena, &config);
        Self {
            config,
            arena,
            sizes,
            seed,
            phase: SessionPhase::Running,
            burger,
            bears: Vec::new(),
            projectiles: Vec::new(),
            explosions: Vec::new(),
            score: 0,
            stats: SessionStats::default(),
            burger_dead: false,
            spawner: Spawner::new(seed),
        }
    }

    pub fn is_burger_dead(&self) -> bool {
        self.burger_dead
    }

    /// Add a projectile from a spawn request
    pub fn enqueue_projectile(&mut self, spawn: ProjectileSpawn) {
        let size = self.sizes.projectile(spawn.kind);
        self.projectiles
            .push(Projectile::launched(spawn, size, &self.config));
    }

    pub fn spawn_explosion(&mut self, center: Vec2) {
        self.explosions.push(Explosion::new(
            center,
            self.sizes.explosion,
            self.config.explosion_frames,
            self.config.explosion_frame_time,
        ));
    }

    /// Rectangles a new bear must stay clear of
    pub fn occupied_rects(&self) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(1 + self.bears.len() + self.projectiles.len());
        rects.push(self.burger.rect());
        rects.extend(self.bears.iter().map(|b| b.rect));
        rects.extend(self.projectiles.iter().map(|p| p.rect));
        if self.config.spawn_avoids_explosions {
            rects.extend(self.explosions.iter().map(|e| e.rect));
        }
        rects
    }

    /// Spawn bears until the population is back at `max_bears`
    ///
    /// Stops early (until next frame) if the arena has no free spot left.
    pub fn top_up_bears(&mut self) {
        while self.bears.len() < self.config.max_bears {
            let occupied = self.occupied_rects();
            match self
                .spawner
                .spawn_bear(self.sizes.bear, &occupied, &self.config)
            {
                Some(bear) => {
                    self.bears.push(bear);
                    self.stats.bears_spawned += 1;
                }
                None => {
                    self.stats.skipped_spawns += 1;
                    break;
                }
            }
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            phase: self.phase,
            score: self.score,
            health: self.burger.health(),
            stats: self.stats.clone(),
            bears: self.bears.clone(),
        }
    }
}
