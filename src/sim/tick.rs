//! Per-frame simulation tick
//!
//! Sequences the steps once per frame: movement, physics, projectiles,
//! collisions. Input and dt are fixed for the whole tick.

use super::collision::{resolve_player_contact, resolve_projectile_hits};
use super::movement::{move_player, patrol};
use super::physics::step_player;
use super::projectile::step_projectiles;
use super::state::GameState;

/// Controls held during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub fire: bool,
}

impl TickInput {
    /// Horizontal axis: right minus left, so holding both cancels out
    #[inline]
    pub fn axis(&self) -> i32 {
        self.move_right as i32 - self.move_left as i32
    }
}

/// What happened during a tick, for logging and feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A projectile spawned this tick
    pub fired: bool,
    /// At least one projectile hit the adversary (scored one point)
    pub adversary_hit: bool,
    /// Score lost to a player/adversary collision, if one happened
    pub player_caught: Option<u32>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    let floor_y = state.floor_y();
    let screen_width = state.screen.width;

    move_player(&mut state.player, input.axis(), dt, &state.tuning, screen_width);
    patrol(&mut state.adversary, dt, &state.tuning);

    step_player(&mut state.player, input.jump, dt, &state.tuning, floor_y);

    let fired = step_projectiles(
        &mut state.projectiles,
        &mut state.fire_cooldown,
        &state.player,
        input.fire,
        dt,
        &state.tuning,
        screen_width,
    );

    let adversary_hit = resolve_projectile_hits(state);
    let player_caught = resolve_player_contact(state);

    TickOutcome {
        fired,
        adversary_hit,
        player_caught,
    }
}
