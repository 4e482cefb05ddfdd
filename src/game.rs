//! Frame loop driver
//!
//! Owns the session state and the clock, runs exactly one simulation tick per
//! frame and reports gameplay events through `log`.

use crate::platform::{Clock, InputSource, sample};
use crate::settings::Settings;
use crate::sim::{GameState, Snapshot, TickOutcome, tick};

/// Game instance holding all session state
pub struct Game<C: Clock> {
    state: GameState,
    clock: C,
    frames: u64,
    best_score: u32,
    last_outcome: TickOutcome,
}

impl<C: Clock> Game<C> {
    pub fn new(settings: &Settings, clock: C) -> Self {
        log::info!(
            "New session: {}x{} screen, floor at y={}",
            settings.screen.width,
            settings.screen.height,
            settings.screen.floor_y()
        );
        Self {
            state: GameState::new(settings.screen, settings.tuning.clone()),
            clock,
            frames: 0,
            best_score: 0,
            last_outcome: TickOutcome::default(),
        }
    }

    /// Run one frame: read the clock, sample input, tick, snapshot
    pub fn frame(&mut self, input: &dyn InputSource) -> Snapshot {
        let dt = self.clock.elapsed();
        let input = sample(input);
        log::trace!("frame {} dt={:.4}", self.frames, dt);

        let outcome = tick(&mut self.state, &input, dt);
        self.frames += 1;
        self.report(&outcome);
        self.last_outcome = outcome;

        self.state.snapshot()
    }

    fn report(&mut self, outcome: &TickOutcome) {
        if outcome.fired {
            log::debug!(
                "Projectile fired ({} in flight)",
                self.state.projectiles.len()
            );
        }
        if outcome.adversary_hit {
            self.best_score = self.best_score.max(self.state.score);
            log::info!("Adversary hit! Score: {}", self.state.score);
        }
        if let Some(lost) = outcome.player_caught {
            log::info!("Player caught at frame {}, score {} lost", self.frames, lost);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Frames run since the session started
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Highest score reached this session (not persisted)
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn last_outcome(&self) -> TickOutcome {
        self.last_outcome
    }
}
