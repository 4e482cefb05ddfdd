//! Data-driven game balance
//!
//! Defaults give the standard game feel. Every field is optional when
//! loaded from JSON so a tuning file only needs the values it changes.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How repeated fire is rate limited while the fire control is held
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FireGate {
    /// Next shot waits until the newest projectile is more than `min_px`
    /// ahead of the player's center. Tied to travel distance, not time.
    Distance { min_px: i32 },
    /// Next shot waits a fixed number of seconds after the previous one.
    Cooldown { seconds: f32 },
}

impl Default for FireGate {
    fn default() -> Self {
        FireGate::Distance {
            min_px: FIRE_GATE_DISTANCE,
        }
    }
}

/// Balance values consumed by the simulation steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_velocity: f32,
    /// Player horizontal speed (px/s)
    pub player_speed: f32,
    /// Adversary patrol speed (px/s)
    pub adversary_speed: f32,
    /// Projectile horizontal speed (px/s)
    pub projectile_speed: f32,
    /// Adversary left edge turns around below this
    pub patrol_min_x: i32,
    /// Adversary right edge turns around above this
    pub patrol_max_x: i32,
    /// Projectiles at or beyond screen width + margin are removed
    pub cull_margin: i32,
    pub fire_gate: FireGate,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            player_speed: PLAYER_SPEED,
            adversary_speed: ADVERSARY_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            patrol_min_x: PATROL_MIN_X,
            patrol_max_x: PATROL_MAX_X,
            cull_margin: CULL_MARGIN,
            fire_gate: FireGate::default(),
        }
    }
}
