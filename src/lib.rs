//! Paddle Duel - A two-player ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Pure simulation (motion, collisions, scoring, match phase)
//! - `session`: Per-frame orchestration into draw and sound requests
//! - `renderer`: Draw request vocabulary and scene building
//! - `audio`: Sound cues and volume handling
//! - `platform`: Host collaborator traits, run loop, headless host
//! - `settings`: User configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{FrameOutput, Session};
pub use settings::{KeyBindings, Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Arena dimensions (origin top-left, y grows downward)
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 800.0;
    pub const ARENA_CENTER: Vec2 = Vec2::new(ARENA_WIDTH * 0.5, ARENA_HEIGHT * 0.5);

    /// Ball crosses half the arena width per second
    pub const BALL_SPEED: f32 = ARENA_WIDTH * 0.5;
    pub const BALL_SIZE: f32 = 40.0;
    /// Upper bound (exclusive) of the serve rotation, in degrees
    pub const SERVE_MAX_ANGLE_DEG: f32 = 60.0;

    /// Paddles cross half the arena height per second
    pub const PADDLE_SPEED: f32 = ARENA_HEIGHT * 0.5;
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const LEFT_PADDLE_X: f32 = ARENA_WIDTH * 0.05;
    pub const RIGHT_PADDLE_X: f32 = ARENA_WIDTH * 0.95;

    /// Points needed to win the match
    pub const VICTORY_POINTS: u32 = 5;
    /// Volley streak values that raise the streak banner
    pub const STREAK_MILESTONES: [u32; 2] = [5, 10];
    /// How long the streak banner stays up (seconds)
    pub const STREAK_BANNER_SECS: f32 = 1.5;

    /// Largest frame time handed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    pub const TARGET_FPS: u32 = 60;
    /// Pause between the victory cue and process exit (seconds)
    pub const VICTORY_PAUSE_SECS: f32 = 3.0;
    /// Longest victory pause a settings file may ask for (seconds)
    pub const MAX_VICTORY_PAUSE_SECS: f32 = 60.0;

    pub const WINDOW_TITLE: &str = "Pong";
}

/// Rotate a vector counter-clockwise (in screen space, clockwise) by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}
