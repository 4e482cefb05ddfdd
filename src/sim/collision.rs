//! Collision resolution between projectiles, the adversary and the player
//!
//! Two checks per tick, in order:
//! 1. Projectiles against the adversary (score + respawn)
//! 2. Player against the adversary (full reset)

use super::state::GameState;

/// Remove projectiles touching the adversary.
///
/// Any number of simultaneous hits scores exactly one point: only whether
/// something hit is tracked, not how many. On a hit the adversary respawns.
/// Returns true if anything hit.
pub fn resolve_projectile_hits(state: &mut GameState) -> bool {
    let target = state.adversary.rect;
    let before = state.projectiles.len();
    state.projectiles.retain(|p| !p.rect.overlaps(&target));
    let hit_any = state.projectiles.len() != before;

    if hit_any {
        state.score += 1;
        let floor_y = state.floor_y();
        state.adversary.respawn(floor_y);
    }

    hit_any
}

/// Reset the whole session if the adversary touches the player.
///
/// Returns the score that was lost, or None if there was no contact.
pub fn resolve_player_contact(state: &mut GameState) -> Option<u32> {
    if !state.player.rect.overlaps(&state.adversary.rect) {
        return None;
    }

    let lost = state.score;
    state.reset();
    Some(lost)
}
