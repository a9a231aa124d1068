//! Game state and core simulation types
//!
//! Scores, the volley streak and the match phase live in `MatchState`, which
//! is threaded explicitly through every tick instead of living in globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Aabb, ball_box, paddle_box};
use super::motion::reset_ball;
use crate::consts::*;

/// One of the two players, named by the side of the arena they defend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Player label shown on screen
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Active gameplay; round resets happen inside this phase
    #[default]
    Playing,
    /// Terminal: a player reached the victory threshold
    MatchOver,
}

/// Something that happened to the ball during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundEvent {
    #[default]
    None,
    /// Ball reflected off the top or bottom wall
    WallBounceY,
    /// Ball reflected off a paddle
    PaddleBounceX,
    /// Ball left through the right edge
    ScoreLeft,
    /// Ball left through the left edge
    ScoreRight,
}

impl RoundEvent {
    /// Scoring event credited to `side`
    pub fn score_for(side: Side) -> Self {
        match side {
            Side::Left => RoundEvent::ScoreLeft,
            Side::Right => RoundEvent::ScoreRight,
        }
    }

    pub fn is_score(self) -> bool {
        matches!(self, RoundEvent::ScoreLeft | RoundEvent::ScoreRight)
    }

    /// Ordering used to collapse a tick's events into one
    fn weight(self) -> u8 {
        match self {
            RoundEvent::None => 0,
            RoundEvent::WallBounceY => 1,
            RoundEvent::PaddleBounceX => 2,
            RoundEvent::ScoreLeft | RoundEvent::ScoreRight => 3,
        }
    }

    /// The more significant of two events
    pub fn max(self, other: Self) -> Self {
        if other.weight() > self.weight() { other } else { self }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Unit direction of travel
    pub dir: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: ARENA_CENTER,
            dir: Vec2::X,
            size: BALL_SIZE,
            speed: BALL_SPEED,
        }
    }
}

impl Ball {
    /// Bounding box at the current position
    pub fn bounds(&self) -> Aabb {
        ball_box(self.pos)
    }
}

/// A player's paddle. Only `pos.y` moves during a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        };
        Self {
            side,
            pos: Vec2::new(x, ARENA_CENTER.y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn bounds(&self) -> Aabb {
        paddle_box(self.pos)
    }

    /// Lowest and highest legal center y
    pub fn y_range(&self) -> (f32, f32) {
        let half = self.height * 0.5;
        (half, ARENA_HEIGHT - half)
    }

    /// Put the paddle back at mid-height
    pub fn recenter(&mut self) {
        self.pos.y = ARENA_CENTER.y;
    }
}

/// Streak banner raised when the volley streak hits a milestone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreakBanner {
    /// Streak value that raised the banner
    pub streak: u32,
    /// Seconds left before the banner drops
    pub remaining: f32,
}

/// Scores, streak and phase for one match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub score_left: u32,
    pub score_right: u32,
    pub volley_streak: u32,
    pub phase: MatchPhase,
    pub winner: Option<Side>,
    #[serde(default)]
    pub streak_banner: Option<StreakBanner>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::MatchOver
    }

    /// Credit a point to `side` and end the volley.
    ///
    /// Returns the winner if this point reached the victory threshold, in
    /// which case the phase is now `MatchOver`.
    pub fn award_point(&mut self, side: Side) -> Option<Side> {
        if self.is_over() {
            return None;
        }
        match side {
            Side::Left => self.score_left += 1,
            Side::Right => self.score_right += 1,
        }
        self.volley_streak = 0;
        self.streak_banner = None;

        if self.score(side) >= VICTORY_POINTS {
            self.phase = MatchPhase::MatchOver;
            self.winner = Some(side);
            return Some(side);
        }
        None
    }

    /// Count a paddle contact; raises the banner on milestone values
    pub fn register_volley(&mut self) {
        if self.is_over() {
            return;
        }
        self.volley_streak += 1;
        if STREAK_MILESTONES.contains(&self.volley_streak) {
            self.streak_banner = Some(StreakBanner {
                streak: self.volley_streak,
                remaining: STREAK_BANNER_SECS,
            });
        }
    }

    /// Age the streak banner by `dt` seconds, dropping it when expired
    pub fn decay_banner(&mut self, dt: f32) {
        if let Some(banner) = &mut self.streak_banner {
            banner.remaining -= dt;
            if banner.remaining <= 0.0 {
                self.streak_banner = None;
            }
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub match_state: MatchState,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh match with a freshly served ball
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ball: Ball::default(),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            match_state: MatchState::new(),
            time_ticks: 0,
        };
        reset_ball(&mut state.ball, &mut state.rng);
        state
    }

    /// Start a new match in place, keeping the RNG stream
    pub fn restart(&mut self) {
        self.match_state = MatchState::new();
        self.left.recenter();
        self.right.recenter();
        reset_ball(&mut self.ball, &mut self.rng);
        self.time_ticks = 0;
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}
