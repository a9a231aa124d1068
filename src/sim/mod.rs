//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time step supplied by the caller
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod geometry;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{hits_horizontal_wall, paddle_contact, scoring_exit};
pub use geometry::{Aabb, ball_box, paddle_box};
pub use motion::{advance_ball, move_paddle, reset_ball};
pub use state::{
    Ball, GameState, MatchPhase, MatchState, Paddle, RoundEvent, Side, StreakBanner,
};
pub use tick::{PaddleInput, TickInput, TickOutcome, tick};
