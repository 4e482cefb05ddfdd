//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Inputs and dt are sampled once per tick and never change mid-tick
//! - Positions move by truncated whole pixels
//! - Stable iteration order (projectiles stay in spawn order)
//! - No rendering, platform or logging dependencies

pub mod collision;
pub mod movement;
pub mod physics;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{resolve_player_contact, resolve_projectile_hits};
pub use rect::Rect;
pub use state::{Adversary, Direction, GameState, Player, Projectile, Snapshot};
pub use tick::{TickInput, TickOutcome, tick};
