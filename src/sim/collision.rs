//! Collision detection against the arena edges and paddles
//!
//! All checks take the ball's *tentative* box, i.e. where the ball is about
//! to be this tick, so a bounce happens before any visible overlap.

use super::geometry::Aabb;
use super::state::{Paddle, Side};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Which player scores if the ball leaves through a side edge.
///
/// Exiting left credits the right player and vice versa.
pub fn scoring_exit(ball: &Aabb) -> Option<Side> {
    if ball.x_min < 0.0 {
        Some(Side::Right)
    } else if ball.x_max > ARENA_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}

/// True if the ball pokes through the top or bottom wall
pub fn hits_horizontal_wall(ball: &Aabb) -> bool {
    ball.y_min < 0.0 || ball.y_max > ARENA_HEIGHT
}

/// First paddle the ball overlaps, left checked before right
pub fn paddle_contact<'a>(ball: &Aabb, paddles: [&'a Paddle; 2]) -> Option<&'a Paddle> {
    paddles.into_iter().find(|p| ball.overlaps(&p.bounds()))
}
