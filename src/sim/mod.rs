//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pool order)
//! - No rendering or platform dependencies; sound goes out through a sink

pub mod bear;
pub mod burger;
pub mod collision;
pub mod explosion;
pub mod projectile;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use bear::TeddyBear;
pub use burger::{Burger, FireState};
pub use collision::{Body, CollisionResolution, check_collision, is_collision_free};
pub use explosion::Explosion;
pub use projectile::{Projectile, ProjectileKind, ProjectileSpawn};
pub use rect::Rect;
pub use spawn::Spawner;
pub use state::{EntitySizes, SessionPhase, SessionStats, SessionSummary, World};
pub use tick::{TickInput, autopilot_input, tick};
