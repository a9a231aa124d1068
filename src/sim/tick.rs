//! Per-frame simulation tick
//!
//! Resolution order is fixed: paddles, tentative ball, side exits (scoring),
//! win check, top/bottom walls, paddles, then the position commit.

use super::collision::{hits_horizontal_wall, paddle_contact, scoring_exit};
use super::geometry::ball_box;
use super::motion::{advance_ball, move_paddle, reset_ball};
use super::state::{GameState, RoundEvent, Side};

/// Held movement keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

/// What a tick did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Events in the order they fired
    pub events: Vec<RoundEvent>,
    /// Set on the tick that ended the match
    pub winner: Option<Side>,
}

impl TickOutcome {
    /// The most significant event of the tick
    pub fn primary(&self) -> RoundEvent {
        self.events
            .iter()
            .fold(RoundEvent::None, |acc, e| acc.max(*e))
    }

    pub fn scored(&self) -> Option<Side> {
        self.events.iter().find_map(|e| match e {
            RoundEvent::ScoreLeft => Some(Side::Left),
            RoundEvent::ScoreRight => Some(Side::Right),
            _ => None,
        })
    }

    pub fn paddle_hit(&self) -> bool {
        self.events.contains(&RoundEvent::PaddleBounceX)
    }
}

/// Advance the game by `dt` seconds.
///
/// Once the match is over this is a no-op.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.match_state.is_over() {
        return outcome;
    }

    state.time_ticks += 1;

    move_paddle(&mut state.left, input.left.up, input.left.down, dt);
    move_paddle(&mut state.right, input.right.up, input.right.down, dt);

    let tentative = ball_box(advance_ball(&state.ball, dt));

    // Side exit: point scored, new serve, paddles re-centered
    if let Some(scorer) = scoring_exit(&tentative) {
        reset_ball(&mut state.ball, &mut state.rng);
        state.left.recenter();
        state.right.recenter();
        outcome.events.push(RoundEvent::score_for(scorer));

        if let Some(winner) = state.match_state.award_point(scorer) {
            outcome.winner = Some(winner);
            return outcome;
        }
    } else {
        if hits_horizontal_wall(&tentative) {
            state.ball.dir.y = -state.ball.dir.y;
            outcome.events.push(RoundEvent::WallBounceY);
        }

        if paddle_contact(&tentative, [&state.left, &state.right]).is_some() {
            state.ball.dir.x = -state.ball.dir.x;
            state.match_state.register_volley();
            outcome.events.push(RoundEvent::PaddleBounceX);
        }
    }

    state.match_state.decay_banner(dt);

    // Commit using the post-collision direction
    state.ball.pos = advance_ball(&state.ball, dt);

    outcome
}
