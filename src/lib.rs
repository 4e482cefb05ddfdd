//! Spud Blaster - a side-view arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, movement, projectiles, collisions)
//! - `platform`: Clock and input seams the host drives once per frame
//! - `renderer`: Render-ready vertex lists built from a tick snapshot
//! - `settings`: Screen geometry and session configuration
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::{ScreenConfig, Settings, SettingsError};
pub use tuning::{FireGate, Tuning};

/// Game configuration constants
pub mod consts {
    /// Nominal simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest dt a real clock may report for one frame
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Target frame rate for the system clock
    pub const TARGET_FPS: u32 = 60;

    /// Default screen geometry
    pub const SCREEN_WIDTH: i32 = 960;
    pub const SCREEN_HEIGHT: i32 = 540;
    /// Floor line sits this far above the bottom of the screen
    pub const FLOOR_OFFSET: i32 = 80;

    /// Player box
    pub const PLAYER_SIZE: i32 = 40;
    pub const PLAYER_SPAWN_X: i32 = 100;

    /// Adversary box
    pub const ADVERSARY_SIZE: i32 = 40;
    pub const ADVERSARY_SPAWN_X: i32 = 680;

    /// Projectile box, spawned relative to the player's center
    pub const PROJECTILE_WIDTH: i32 = 12;
    pub const PROJECTILE_HEIGHT: i32 = 8;
    pub const MUZZLE_OFFSET_X: i32 = 10;
    pub const MUZZLE_OFFSET_Y: i32 = -4;

    /// Default balance (pixels, seconds)
    pub const GRAVITY: f32 = 1800.0;
    pub const JUMP_VELOCITY: f32 = -650.0;
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const ADVERSARY_SPEED: f32 = 120.0;
    pub const PROJECTILE_SPEED: f32 = 700.0;
    /// Patrol bounds for the adversary's left and right edges
    pub const PATROL_MIN_X: i32 = 520;
    pub const PATROL_MAX_X: i32 = 900;
    /// Projectiles are culled once they reach screen width + this margin
    pub const CULL_MARGIN: i32 = 50;
    /// Distance the last projectile must travel past the player's center before the next spawn
    pub const FIRE_GATE_DISTANCE: i32 = 20;
}

/// Convert a float displacement to whole pixels, truncating toward zero.
///
/// Positions only ever move by truncated amounts; rounding here would change
/// pixel outcomes (a 1/60 s patrol step of 2.0 px stays 2, a 700 px/s projectile
/// step of 11.67 px becomes 11).
#[inline]
pub fn truncate_px(value: f32) -> i32 {
    value as i32
}
