//! Vertical motion: gravity, jumping and the floor

use super::state::Player;
use crate::truncate_px;
use crate::tuning::Tuning;

/// Advance the player's vertical motion by one tick.
///
/// Gravity is applied before the jump check, so a jump replaces this tick's
/// gravity outright. There is no sub-stepping: a large `dt` can move the player
/// far in one tick, but the floor clamp still holds.
pub fn step_player(player: &mut Player, jump_held: bool, dt: f32, tuning: &Tuning, floor_y: i32) {
    player.vel_y += tuning.gravity * dt;

    if jump_held && player.on_ground {
        player.vel_y = tuning.jump_velocity;
        player.on_ground = false;
    }

    let dy = truncate_px(player.vel_y * dt);
    player.rect.pos.y = player.rect.pos.y.saturating_add(dy);

    if player.rect.bottom() >= floor_y {
        player.rect.set_bottom(floor_y);
        player.vel_y = 0.0;
        player.on_ground = true;
    } else {
        player.on_ground = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    const FLOOR: i32 = 460;

    fn grounded() -> Player {
        let mut player = Player::spawn(FLOOR);
        player.on_ground = true;
        player
    }

    #[test]
    fn test_standing_player_stays_grounded() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(FLOOR);
        for _ in 0..10 {
            step_player(&mut player, false, SIM_DT, &tuning, FLOOR);
            assert!(player.on_ground);
            assert_eq!(player.vel_y, 0.0);
            assert_eq!(player.rect.bottom(), FLOOR);
        }
    }

    #[test]
    fn test_jump_sets_impulse() {
        let tuning = Tuning::default();
        let mut player = grounded();
        step_player(&mut player, true, SIM_DT, &tuning, FLOOR);
        assert_eq!(player.vel_y, -650.0);
        assert!(!player.on_ground);
        // -650 / 60 = -10.83 truncates to -10
        assert_eq!(player.rect.top(), 410);
    }

    #[test]
    fn test_jump_ignored_in_air() {
        let tuning = Tuning::default();
        let mut player = grounded();
        step_player(&mut player, true, SIM_DT, &tuning, FLOOR);
        let vel_after_jump = player.vel_y;
        step_player(&mut player, true, SIM_DT, &tuning, FLOOR);
        assert!((player.vel_y - (vel_after_jump + 30.0)).abs() < 1e-3);
    }

    #[test]
    fn test_airtime_matches_ballistics() {
        let tuning = Tuning::default();
        let mut player = grounded();
        step_player(&mut player, true, SIM_DT, &tuning, FLOOR);

        let mut ticks = 1;
        while !player.on_ground {
            step_player(&mut player, false, SIM_DT, &tuning, FLOOR);
            ticks += 1;
            assert!(ticks < 120, "player never landed");
        }

        // 2 * 650 / 1800 = 0.722 s, about 43 ticks at 60 Hz
        assert!((40..=46).contains(&ticks), "airtime was {ticks} ticks");
        assert_eq!(player.rect.bottom(), FLOOR);
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_large_dt_cannot_sink_below_floor() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(FLOOR);
        player.rect.pos.y = 0;
        step_player(&mut player, false, 2.0, &tuning, FLOOR);
        assert_eq!(player.rect.bottom(), FLOOR);
        assert!(player.on_ground);
    }

    #[test]
    fn test_huge_dt_saturates_instead_of_overflowing() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(FLOOR);
        step_player(&mut player, false, 5000.0, &tuning, FLOOR);
        assert_eq!(player.rect.bottom(), FLOOR);
        assert!(player.on_ground);
        assert_eq!(player.vel_y, 0.0);

        // Jumping with a huge dt flings the player upward without panicking
        step_player(&mut player, true, 1.0e7, &tuning, FLOOR);
        assert!(!player.on_ground);
        assert!(player.rect.bottom() < FLOOR);
    }
}
