//! Projectile spawning, flight and culling

use super::rect::Rect;
use super::state::{Player, Projectile};
use crate::consts::{MUZZLE_OFFSET_X, MUZZLE_OFFSET_Y, PROJECTILE_HEIGHT, PROJECTILE_WIDTH};
use crate::truncate_px;
use crate::tuning::{FireGate, Tuning};

/// Whether the fire gate lets a new projectile spawn this tick
pub fn can_fire(player: &Player, projectiles: &[Projectile], gate: FireGate, cooldown: f32) -> bool {
    match gate {
        FireGate::Distance { min_px } => match projectiles.last() {
            None => true,
            Some(last) => last.rect.left() - player.rect.center_x() > min_px,
        },
        FireGate::Cooldown { .. } => cooldown <= 0.0,
    }
}

/// Build a projectile at the player's muzzle
pub fn spawn_at(player: &Player, tuning: &Tuning) -> Projectile {
    Projectile {
        rect: Rect::new(
            player.rect.center_x() + MUZZLE_OFFSET_X,
            player.rect.center_y() + MUZZLE_OFFSET_Y,
            PROJECTILE_WIDTH,
            PROJECTILE_HEIGHT,
        ),
        vel_x: tuning.projectile_speed,
    }
}

/// Spawn (if allowed), advance and cull. Returns true if a projectile was fired.
pub fn step_projectiles(
    projectiles: &mut Vec<Projectile>,
    fire_cooldown: &mut f32,
    player: &Player,
    fire_held: bool,
    dt: f32,
    tuning: &Tuning,
    screen_width: i32,
) -> bool {
    if *fire_cooldown > 0.0 {
        *fire_cooldown = (*fire_cooldown - dt).max(0.0);
    }

    let fired = fire_held && can_fire(player, projectiles, tuning.fire_gate, *fire_cooldown);
    if fired {
        projectiles.push(spawn_at(player, tuning));
        if let FireGate::Cooldown { seconds } = tuning.fire_gate {
            *fire_cooldown = seconds;
        }
    }

    advance(projectiles, dt);
    cull(projectiles, screen_width + tuning.cull_margin);
    fired
}

/// Move every projectile by its velocity
pub fn advance(projectiles: &mut [Projectile], dt: f32) {
    for projectile in projectiles.iter_mut() {
        let dx = truncate_px(projectile.vel_x * dt);
        projectile.rect.pos.x = projectile.rect.pos.x.saturating_add(dx);
    }
}

/// Drop projectiles at or past `limit_x`, keeping survivors in order
pub fn cull(projectiles: &mut Vec<Projectile>, limit_x: i32) {
    projectiles.retain(|p| p.rect.left() < limit_x);
}
