//! Draw sink
//!
//! The world is drawn as a flat list of sprite rectangles and HUD strings.
//! What a frontend does with them (GPU, terminal, nothing) is its business.

use glam::Vec2;

use crate::consts::{HEALTH_PREFIX, SCORE_PREFIX};
use crate::sim::projectile::Projectile;
use crate::sim::rect::Rect;
use crate::sim::state::World;
use crate::sim::{bear, burger, explosion};

/// Something that can put sprites and text on screen
pub trait Renderer {
    fn draw_sprite(&mut self, sprite: &str, rect: Rect);

    /// Draw one frame of a horizontal sprite strip
    fn draw_sprite_frame(&mut self, sprite: &str, frame: u32, rect: Rect) {
        let _ = frame;
        self.draw_sprite(sprite, rect);
    }

    fn draw_text(&mut self, text: &str, position: Vec2);
}

/// Draw the whole world: burger, bears, projectiles, explosions, then HUD
pub fn draw(world: &World, renderer: &mut impl Renderer) {
    renderer.draw_sprite(burger::SPRITE, world.burger.rect());

    for bear in world.bears.iter().filter(|b| b.active) {
        renderer.draw_sprite(bear::SPRITE, bear.rect);
    }
    for projectile in world.projectiles.iter().filter(|p| p.active) {
        draw_projectile(projectile, renderer);
    }
    for blast in world.explosions.iter().filter(|e| !e.finished()) {
        renderer.draw_sprite_frame(explosion::SPRITE, blast.frame(), blast.rect);
    }

    let (score, health) = hud_lines(world);
    let (sx, sy) = world.config.score_location;
    let (hx, hy) = world.config.health_location;
    renderer.draw_text(&score, Vec2::new(sx, sy));
    renderer.draw_text(&health, Vec2::new(hx, hy));
}

fn draw_projectile(projectile: &Projectile, renderer: &mut impl Renderer) {
    renderer.draw_sprite(projectile.kind().sprite(), projectile.rect);
}

/// Score and health strings
pub fn hud_lines(world: &World) -> (String, String) {
    (
        format!("{}{}", SCORE_PREFIX, world.score),
        format!("{}{}", HEALTH_PREFIX, world.burger.health()),
    )
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: String,
        frame: u32,
        rect: Rect,
    },
    Text {
        text: String,
        position: Vec2,
    },
}

/// Renderer that records draw calls for one frame
#[derive(Debug, Default, Clone)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn sprite_count(&self, sprite: &str) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Sprite { sprite: s, .. } if s == sprite))
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Sprite { .. } => None,
        })
    }
}

impl Renderer for CommandBuffer {
    fn draw_sprite(&mut self, sprite: &str, rect: Rect) {
        self.draw_sprite_frame(sprite, 0, rect);
    }

    fn draw_sprite_frame(&mut self, sprite: &str, frame: u32, rect: Rect) {
        self.commands.push(DrawCommand::Sprite {
            sprite: sprite.to_string(),
            frame,
            rect,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
        });
    }
}
