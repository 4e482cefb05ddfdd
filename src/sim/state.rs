//! Game state and core simulation types
//!
//! One `GameState` is owned by the frame loop for the whole session and
//! mutated in place once per tick.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::settings::ScreenConfig;
use crate::tuning::Tuning;

/// Adversary patrol direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1 for Left, +1 for Right
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// The player-controlled character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (px/s, positive = down)
    pub vel_y: f32,
    pub on_ground: bool,
}

impl Player {
    /// Player at its spawn point, standing on the floor line but not yet grounded
    pub fn spawn(floor_y: i32) -> Self {
        Self {
            rect: Rect::new(
                PLAYER_SPAWN_X,
                floor_y - PLAYER_SIZE,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            vel_y: 0.0,
            on_ground: false,
        }
    }
}

/// The patrolling enemy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adversary {
    pub rect: Rect,
    pub direction: Direction,
}

impl Adversary {
    pub fn spawn(floor_y: i32) -> Self {
        Self {
            rect: Rect::new(
                ADVERSARY_SPAWN_X,
                floor_y - ADVERSARY_SIZE,
                ADVERSARY_SIZE,
                ADVERSARY_SIZE,
            ),
            direction: Direction::Left,
        }
    }

    /// Return to the spawn point facing left
    pub fn respawn(&mut self, floor_y: i32) {
        self.rect
            .set_top_left(ADVERSARY_SPAWN_X, floor_y - self.rect.height());
        self.direction = Direction::Left;
    }
}

/// A shot fired by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    /// Horizontal velocity (px/s), constant for the projectile's lifetime
    pub vel_x: f32,
}

/// Complete game state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub screen: ScreenConfig,
    pub tuning: Tuning,
    pub player: Player,
    pub adversary: Adversary,
    /// Live projectiles in spawn order
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    /// Seconds until the next shot is allowed (cooldown fire gate only)
    pub fire_cooldown: f32,
}

impl GameState {
    /// Create the initial state for the given screen and balance
    pub fn new(screen: ScreenConfig, tuning: Tuning) -> Self {
        let floor_y = screen.floor_y();
        Self {
            screen,
            tuning,
            player: Player::spawn(floor_y),
            adversary: Adversary::spawn(floor_y),
            projectiles: Vec::new(),
            score: 0,
            fire_cooldown: 0.0,
        }
    }

    /// Restore every field to its initial value, score included
    pub fn reset(&mut self) {
        *self = Self::new(self.screen, self.tuning.clone());
    }

    #[inline]
    pub fn floor_y(&self) -> i32 {
        self.screen.floor_y()
    }

    /// Read-only view for drawing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen,
            floor_y: self.floor_y(),
            player: self.player.rect,
            adversary: self.adversary.rect,
            projectiles: self.projectiles.iter().map(|p| p.rect).collect(),
            score: self.score,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(ScreenConfig::default(), Tuning::default())
    }
}

/// Render-ready copy of the state after a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub screen: ScreenConfig,
    pub floor_y: i32,
    pub player: Rect,
    pub adversary: Rect,
    /// Projectile boxes in spawn order
    pub projectiles: Vec<Rect>,
    pub score: u32,
}

impl Snapshot {
    /// Score and controls line drawn in the top-left corner
    pub fn hud_text(&self) -> String {
        format!(
            "Score: {}   [Arrows] move  [Space] jump  [Z] shoot",
            self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert_eq!(state.player.rect, Rect::new(100, 420, 40, 40));
        assert_eq!(state.player.vel_y, 0.0);
        assert!(!state.player.on_ground);
        assert_eq!(state.adversary.rect, Rect::new(680, 420, 40, 40));
        assert_eq!(state.adversary.direction, Direction::Left);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_reset_keeps_config() {
        let screen = ScreenConfig {
            width: 1280,
            height: 720,
            floor_offset: 100,
        };
        let mut state = GameState::new(screen, Tuning::default());
        state.score = 7;
        state.player.rect.pos.x = 500;
        state.projectiles.push(Projectile {
            rect: Rect::new(0, 0, 12, 8),
            vel_x: 700.0,
        });

        state.reset();
        assert_eq!(state, GameState::new(screen, Tuning::default()));
        assert_eq!(state.player.rect.bottom(), 620);
    }

    #[test]
    fn test_adversary_respawn() {
        let mut adversary = Adversary::spawn(460);
        adversary.rect.pos.x = 530;
        adversary.direction = Direction::Right;
        adversary.respawn(460);
        assert_eq!(adversary, Adversary::spawn(460));
    }

    #[test]
    fn test_snapshot_and_hud() {
        let mut state = GameState::default();
        state.score = 3;
        let snap = state.snapshot();
        assert_eq!(snap.floor_y, 460);
        assert_eq!(snap.player, state.player.rect);
        assert!(snap.hud_text().starts_with("Score: 3 "));
    }
}
