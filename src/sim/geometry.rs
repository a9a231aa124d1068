//! Axis-aligned box geometry
//!
//! Every collision in the game is a box-vs-box test: the ball is a square,
//! the paddles are rectangles, and the arena is checked edge by edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH};

/// An axis-aligned bounding box (`x_min <= x_max`, `y_min <= y_max`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Aabb {
    /// Box centered at `center` with total `size` (width, height)
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            x_min: center.x - half.x,
            x_max: center.x + half.x,
            y_min: center.y - half.y,
            y_max: center.y + half.y,
        }
    }

    /// Closed-interval overlap: touching edges count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let x = self.x_max >= other.x_min && self.x_min <= other.x_max;
        let y = self.y_max >= other.y_min && self.y_min <= other.y_max;
        x && y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Top-left corner, the origin renderers draw rectangles from
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x_min, self.y_min)
    }
}

/// Box for a ball centered at `pos`
pub fn ball_box(pos: Vec2) -> Aabb {
    Aabb::from_center(pos, Vec2::splat(BALL_SIZE))
}

/// Box for a paddle centered at `pos`
pub fn paddle_box(pos: Vec2) -> Aabb {
    Aabb::from_center(pos, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_box() -> impl Strategy<Value = Aabb> {
        (
            -200.0f32..1400.0,
            -200.0f32..1000.0,
            0.0f32..300.0,
            0.0f32..300.0,
        )
            .prop_map(|(x, y, w, h)| Aabb::from_center(Vec2::new(x, y), Vec2::new(w, h)))
    }

    #[test]
    fn test_from_center_dimensions() {
        let b = Aabb::from_center(Vec2::new(100.0, 50.0), Vec2::new(40.0, 80.0));
        assert_eq!(b.x_min, 80.0);
        assert_eq!(b.x_max, 120.0);
        assert_eq!(b.y_min, 10.0);
        assert_eq!(b.y_max, 90.0);
        assert_eq!(b.width(), 40.0);
        assert_eq!(b.height(), 80.0);
        assert_eq!(b.top_left(), Vec2::new(80.0, 10.0));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert_eq!(a.x_max, b.x_min);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_separated_on_one_axis_misses() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        // Overlaps on x, clear gap on y
        let b = Aabb::from_center(Vec2::new(2.0, 20.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_entity_boxes() {
        let ball = ball_box(Vec2::new(600.0, 400.0));
        assert_eq!(ball.width(), BALL_SIZE);
        assert_eq!(ball.height(), BALL_SIZE);

        let paddle = paddle_box(Vec2::new(60.0, 400.0));
        assert_eq!(paddle.width(), PADDLE_WIDTH);
        assert_eq!(paddle.height(), PADDLE_HEIGHT);
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn box_is_well_formed(a in arb_box()) {
            prop_assert!(a.x_min <= a.x_max);
            prop_assert!(a.y_min <= a.y_max);
        }
    }
}
