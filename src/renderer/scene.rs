//! Scene building: game state to draw requests

use glam::Vec2;

use super::command::{DrawCommand, colors};
use crate::consts::{ARENA_CENTER, ARENA_WIDTH};
use crate::sim::{GameState, MatchState, Side};

pub const SCORE_FONT_SIZE: f32 = 40.0;
pub const STREAK_FONT_SIZE: f32 = 30.0;
pub const VICTORY_FONT_SIZE: f32 = 80.0;

const SCORE_Y: f32 = 40.0;
const STREAK_Y: f32 = 100.0;

/// Score text anchor for a side
fn score_anchor(side: Side) -> Vec2 {
    match side {
        Side::Left => Vec2::new(ARENA_WIDTH * 0.25, SCORE_Y),
        Side::Right => Vec2::new(ARENA_WIDTH * 0.75, SCORE_Y),
    }
}

/// Banner text for a streak milestone
pub fn streak_text(streak: u32) -> String {
    format!("VOLLEY x{}!", streak)
}

/// Victory text for the winner
pub fn victory_text(winner: Side) -> String {
    format!("{} Wins!", winner.label())
}

/// HUD requests: scores, streak banner, victory text
pub fn hud(match_state: &MatchState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(4);

    for side in [Side::Left, Side::Right] {
        commands.push(DrawCommand::text(
            match_state.score(side).to_string(),
            score_anchor(side),
            SCORE_FONT_SIZE,
            colors::SCORE,
        ));
    }

    if let Some(banner) = match_state.streak_banner {
        commands.push(DrawCommand::text(
            streak_text(banner.streak),
            Vec2::new(ARENA_CENTER.x, STREAK_Y),
            STREAK_FONT_SIZE,
            colors::STREAK,
        ));
    }

    if let Some(winner) = match_state.winner {
        commands.push(DrawCommand::text(
            victory_text(winner),
            ARENA_CENTER,
            VICTORY_FONT_SIZE,
            colors::VICTORY,
        ));
    }

    commands
}

/// Full frame: background, ball, paddles, then HUD on top
pub fn build_scene(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(8);
    commands.push(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });
    commands.push(DrawCommand::rect(&state.ball.bounds(), colors::BALL));
    for side in [Side::Left, Side::Right] {
        commands.push(DrawCommand::rect(&state.paddle(side).bounds(), colors::PADDLE));
    }
    commands.extend(hud(&state.match_state));
    commands
}
