//! Ball and paddle motion

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, Paddle};
use crate::consts::{ARENA_CENTER, PADDLE_SPEED, SERVE_MAX_ANGLE_DEG};
use crate::rotate;

/// Where the ball would be after `dt`, without moving it
#[inline]
pub fn advance_ball(ball: &Ball, dt: f32) -> Vec2 {
    ball.pos + ball.dir * ball.speed * dt
}

/// Move a paddle from held keys, then clamp it into the arena.
///
/// Up and down are applied as separate steps so holding both cancels out.
/// The clamp runs even without input.
pub fn move_paddle(paddle: &mut Paddle, up: bool, down: bool, dt: f32) {
    let delta = PADDLE_SPEED * dt;
    if up {
        paddle.pos.y -= delta;
    }
    if down {
        paddle.pos.y += delta;
    }
    let (min_y, max_y) = paddle.y_range();
    paddle.pos.y = paddle.pos.y.clamp(min_y, max_y);
}

/// Serve: center the ball and pick a new direction.
///
/// Horizontal sign is a coin flip; the vector is then rotated by an angle in
/// [0°, 60°) so the ball always keeps a strong horizontal component.
pub fn reset_ball<R: Rng>(ball: &mut Ball, rng: &mut R) {
    ball.pos = ARENA_CENTER;
    let x = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
    let angle = rng.random_range(0.0..SERVE_MAX_ANGLE_DEG).to_radians();
    ball.dir = rotate(Vec2::new(x, 0.0), angle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Side;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Angle in degrees between a direction and the x-axis, in [0, 90]
    fn angle_from_x_axis_deg(dir: Vec2) -> f32 {
        dir.y.abs().atan2(dir.x.abs()).to_degrees()
    }

    #[test]
    fn test_angle_from_x_axis() {
        assert!(angle_from_x_axis_deg(Vec2::new(-1.0, 0.0)).abs() < 1e-4);
        let diag = Vec2::new(1.0, -1.0).normalize();
        assert!((angle_from_x_axis_deg(diag) - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_advance_ball_does_not_mutate() {
        let ball = Ball {
            pos: ARENA_CENTER,
            dir: Vec2::X,
            ..Default::default()
        };
        let next = advance_ball(&ball, 1.0 / 60.0);
        assert!((next.x - (ARENA_CENTER.x + BALL_SPEED / 60.0)).abs() < 1e-3);
        assert_eq!(next.y, ARENA_CENTER.y);
        assert_eq!(ball.pos, ARENA_CENTER);
    }

    #[test]
    fn test_move_paddle_directions() {
        let mut paddle = Paddle::new(Side::Left);
        let start = paddle.pos.y;
        let dt = 0.1;

        move_paddle(&mut paddle, true, false, dt);
        assert!((paddle.pos.y - (start - PADDLE_SPEED * dt)).abs() < 1e-3);

        move_paddle(&mut paddle, false, true, dt);
        assert!((paddle.pos.y - start).abs() < 1e-3);

        move_paddle(&mut paddle, true, true, dt);
        assert!((paddle.pos.y - start).abs() < 1e-3);
    }

    #[test]
    fn test_move_paddle_clamps_without_input() {
        let mut paddle = Paddle::new(Side::Right);
        paddle.pos.y = -500.0;
        move_paddle(&mut paddle, false, false, 1.0 / 60.0);
        assert_eq!(paddle.pos.y, PADDLE_HEIGHT / 2.0);

        paddle.pos.y = 5000.0;
        move_paddle(&mut paddle, false, false, 1.0 / 60.0);
        assert_eq!(paddle.pos.y, ARENA_HEIGHT - PADDLE_HEIGHT / 2.0);
    }

    #[test]
    fn test_reset_ball_both_sides_seen() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::default();
        let (mut left, mut right) = (false, false);
        for _ in 0..200 {
            reset_ball(&mut ball, &mut rng);
            assert_eq!(ball.pos, ARENA_CENTER);
            if ball.dir.x < 0.0 {
                left = true;
            } else {
                right = true;
            }
        }
        assert!(left && right);
    }

    proptest! {
        #[test]
        fn paddle_always_in_bounds(
            start in -2000.0f32..3000.0,
            steps in prop::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..0.5), 1..50),
        ) {
            let mut paddle = Paddle::new(Side::Left);
            paddle.pos.y = start;
            for (up, down, dt) in steps {
                move_paddle(&mut paddle, up, down, dt);
                prop_assert!(paddle.pos.y >= PADDLE_HEIGHT / 2.0);
                prop_assert!(paddle.pos.y <= ARENA_HEIGHT - PADDLE_HEIGHT / 2.0);
            }
        }

        #[test]
        fn serve_direction_is_unit_and_bounded(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut ball = Ball::default();
            for _ in 0..16 {
                reset_ball(&mut ball, &mut rng);
                prop_assert!((ball.dir.length() - 1.0).abs() < 1e-5);
                let angle = angle_from_x_axis_deg(ball.dir);
                prop_assert!((0.0..=SERVE_MAX_ANGLE_DEG + 1e-3).contains(&angle));
                prop_assert!(ball.dir.x != 0.0);
            }
        }
    }
}
