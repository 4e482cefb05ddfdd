//! Horizontal motion for the player and the adversary's patrol

use super::state::{Adversary, Direction, Player};
use crate::truncate_px;
use crate::tuning::Tuning;

/// Move the player by `axis` (-1, 0 or +1) and clamp to the screen
pub fn move_player(player: &mut Player, axis: i32, dt: f32, tuning: &Tuning, screen_width: i32) {
    let dx = axis as f32 * tuning.player_speed * dt;
    player.rect.pos.x = player.rect.pos.x.saturating_add(truncate_px(dx));

    let max_x = (screen_width - player.rect.width()).max(0);
    player.rect.pos.x = player.rect.pos.x.clamp(0, max_x);
}

/// Advance the patrol and turn around at the bounds.
///
/// Both bound checks run every tick, left first.
pub fn patrol(adversary: &mut Adversary, dt: f32, tuning: &Tuning) {
    let dx = tuning.adversary_speed * adversary.direction.sign() as f32 * dt;
    adversary.rect.pos.x = adversary.rect.pos.x.saturating_add(truncate_px(dx));

    if adversary.rect.left() < tuning.patrol_min_x {
        adversary.direction = Direction::Right;
    }
    if adversary.rect.right() > tuning.patrol_max_x {
        adversary.direction = Direction::Left;
    }
}
