//! Seeded demo input
//!
//! Drives the game without a keyboard: each control is held for a random
//! number of frames, then released for a random number of frames. The same
//! seed always produces the same script.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::input::{Control, InputSource};

/// Per-control hold/release timer
#[derive(Debug, Clone, Copy, Default)]
struct Track {
    held: bool,
    frames_left: u32,
}

/// Scripted random input for headless runs
#[derive(Debug, Clone)]
pub struct DemoInput {
    rng: Pcg32,
    tracks: [Track; 4],
}

impl DemoInput {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            tracks: [Track::default(); 4],
        }
    }

    /// Step the script by one frame
    pub fn advance(&mut self) {
        for (i, control) in Control::ALL.into_iter().enumerate() {
            let track = &mut self.tracks[i];
            if track.frames_left > 0 {
                track.frames_left -= 1;
                continue;
            }

            let (hold_chance, max_frames) = match control {
                // Fire and move right most of the time so the demo scores
                Control::Fire => (0.8, 90),
                Control::MoveRight => (0.5, 40),
                Control::MoveLeft => (0.3, 40),
                Control::Jump => (0.2, 10),
            };
            track.held = self.rng.random_bool(hold_chance);
            track.frames_left = self.rng.random_range(1..=max_frames);
        }
    }
}

impl InputSource for DemoInput {
    fn is_held(&self, control: Control) -> bool {
        self.tracks[control.index()].held
    }
}
