//! Frame orchestration
//!
//! Runs one simulation tick per frame and translates what happened into
//! draw requests and sound cues. Holds no I/O of its own.

use rand::RngCore;

use crate::audio::SoundCue;
use crate::consts::MAX_FRAME_DT;
use crate::renderer::{DrawCommand, build_scene};
use crate::sim::{GameState, MatchPhase, RoundEvent, Side, TickInput, TickOutcome, tick};

/// Everything a frame asks the host to do
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    pub draws: Vec<DrawCommand>,
    pub sounds: Vec<SoundCue>,
    /// Set on the frame the match was won
    pub winner: Option<Side>,
}

/// Clamp host frame time into what the simulation accepts
pub fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        0.0
    } else {
        dt.min(MAX_FRAME_DT)
    }
}

/// Sound cues for a tick, in firing order
pub fn sound_cues(outcome: &TickOutcome) -> Vec<SoundCue> {
    let mut cues: Vec<SoundCue> = outcome
        .events
        .iter()
        .filter_map(|event| match event {
            RoundEvent::PaddleBounceX => Some(SoundCue::PaddleHit),
            RoundEvent::ScoreLeft | RoundEvent::ScoreRight => Some(SoundCue::Score),
            RoundEvent::WallBounceY | RoundEvent::None => None,
        })
        .collect();
    if outcome.winner.is_some() {
        cues.push(SoundCue::Victory);
    }
    cues
}

/// A match in progress
pub struct Session {
    state: GameState,
}

impl Session {
    /// Start a match; `None` seeds from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        log::info!("New match with seed: {}", seed);
        Self {
            state: GameState::new(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.match_state.phase
    }

    /// Zero the scores and serve a fresh ball
    pub fn new_match(&mut self) {
        self.state.restart();
        log::info!("Rematch started (seed {})", self.state.seed);
    }

    /// Advance one frame of `dt` host seconds
    pub fn frame(&mut self, dt: f32, input: &TickInput) -> FrameOutput {
        let outcome = tick(&mut self.state, input, sanitize_dt(dt));

        if outcome.paddle_hit() {
            log::debug!("Volley {}", self.state.match_state.volley_streak);
        }
        if let Some(side) = outcome.scored() {
            let m = &self.state.match_state;
            log::info!(
                "{} scores ({} - {})",
                side.label(),
                m.score_left,
                m.score_right
            );
        }
        if let Some(winner) = outcome.winner {
            log::info!("{} wins the match", winner.label());
        }

        FrameOutput {
            draws: build_scene(&self.state),
            sounds: sound_cues(&outcome),
            winner: outcome.winner,
        }
    }
}
