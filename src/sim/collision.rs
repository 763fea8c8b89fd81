//! Ball vs paddle collision classification
//!
//! The paddle is an axis-aligned box; the ball a circle. A hit is classified by
//! which part of the box the ball touched so the tick can flip the right
//! velocity component.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Side};

/// Where the ball touched the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleHit {
    /// Long vertical face (the one facing the field or its back)
    Length,
    /// Short top/bottom face
    Width,
    /// Corner contact resolved as a length hit
    CornerLength,
    /// Corner contact resolved as a width hit
    CornerWidth,
}

impl PaddleHit {
    /// True if the response inverts the horizontal velocity, false for vertical
    #[inline]
    pub fn flips_x(self) -> bool {
        matches!(self, PaddleHit::Length | PaddleHit::CornerLength)
    }
}

/// Paddle the ball is most likely to hit
///
/// Compares against half the screen *height*, not width. On the default 800x600
/// screen this puts the split at x = 300 rather than the midline.
#[inline]
pub fn candidate_paddle(ball_x: f32, screen: Vec2) -> Side {
    if ball_x > screen.y / 2.0 {
        Side::Right
    } else {
        Side::Left
    }
}

/// Classify contact between `ball` and `paddle`, if any
///
/// Checks run in order: broad phase, length face, width face, corner.
pub fn classify_paddle_hit(ball: &Ball, paddle: &Paddle, side: Side) -> Option<PaddleHit> {
    let r = ball.radius;
    let half = paddle.half_extents;
    let dist = (ball.pos - paddle.pos).abs();

    // Broad phase: ball bounds vs paddle box inflated by the radius
    if dist.x > half.x + r || dist.y > half.y + r {
        return None;
    }

    if dist.x <= half.x && dist.x >= half.x - r {
        return Some(PaddleHit::Length);
    }

    if dist.y <= half.y && dist.y >= half.y - r {
        return Some(PaddleHit::Width);
    }

    let corner = dist - half;
    if corner.length_squared() > r * r {
        return None;
    }

    // Positive when the ball is on the field side of the paddle
    let mut signed_offset = paddle.pos.x - ball.pos.x;
    if side == Side::Left {
        signed_offset = -signed_offset;
    }

    if corner.y <= signed_offset - half.x {
        Some(PaddleHit::CornerLength)
    } else {
        Some(PaddleHit::CornerWidth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn paddle_at(x: f32, y: f32) -> Paddle {
        Paddle::new(Vec2::new(x, y))
    }

    fn ball_at(x: f32, y: f32, radius: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y));
        ball.radius = radius;
        ball
    }

    #[test]
    fn test_candidate_uses_half_height() {
        let screen = Vec2::new(800.0, 600.0);
        assert_eq!(candidate_paddle(299.0, screen), Side::Left);
        assert_eq!(candidate_paddle(300.0, screen), Side::Left);
        // Between half height and half width already counts as the right side
        assert_eq!(candidate_paddle(350.0, screen), Side::Right);
        assert_eq!(candidate_paddle(765.0, screen), Side::Right);
    }

    #[test]
    fn test_miss_outside_broad_phase() {
        let paddle = paddle_at(35.0, 300.0);
        let ball = ball_at(35.0 + HALF_PADDLE_WIDTH + BALL_RADIUS + 0.1, 300.0, BALL_RADIUS);
        assert_eq!(classify_paddle_hit(&ball, &paddle, Side::Left), None);

        let ball = ball_at(35.0, 300.0 + HALF_PADDLE_HEIGHT + BALL_RADIUS + 0.1, BALL_RADIUS);
        assert_eq!(classify_paddle_hit(&ball, &paddle, Side::Left), None);
    }

    #[test]
    fn test_length_face_hit() {
        let paddle = paddle_at(35.0, 300.0);
        let ball = ball_at(35.0 + HALF_PADDLE_WIDTH, 310.0, BALL_RADIUS);
        assert_eq!(
            classify_paddle_hit(&ball, &paddle, Side::Left),
            Some(PaddleHit::Length)
        );
    }

    #[test]
    fn test_length_face_lower_bound_with_small_ball() {
        // hw - r = 3 with a radius-2 ball
        let paddle = paddle_at(100.0, 100.0);
        let ball = ball_at(103.0, 100.0, 2.0);
        assert_eq!(
            classify_paddle_hit(&ball, &paddle, Side::Left),
            Some(PaddleHit::Length)
        );
        // Deeper than the face band and far from the ends: no classification
        let ball = ball_at(102.5, 100.0, 2.0);
        assert_eq!(classify_paddle_hit(&ball, &paddle, Side::Left), None);
    }

    #[test]
    fn test_width_face_hit() {
        let paddle = paddle_at(765.0, 300.0);
        // Just outside the length band, touching the top face
        let ball = ball_at(765.0 + HALF_PADDLE_WIDTH + 1.0, 300.0 + HALF_PADDLE_HEIGHT, BALL_RADIUS);
        assert_eq!(
            classify_paddle_hit(&ball, &paddle, Side::Right),
            Some(PaddleHit::Width)
        );
        assert!(!PaddleHit::Width.flips_x());
    }

    #[test]
    fn test_corner_hits() {
        let paddle = paddle_at(35.0, 300.0);
        // Diagonally off the top-right corner, closer horizontally than vertically
        let ball = ball_at(
            35.0 + HALF_PADDLE_WIDTH + 5.0,
            300.0 + HALF_PADDLE_HEIGHT + 2.0,
            BALL_RADIUS,
        );
        // signed offset = 10, corner.y = 2 <= 10 - 5
        assert_eq!(
            classify_paddle_hit(&ball, &paddle, Side::Left),
            Some(PaddleHit::CornerLength)
        );

        let ball = ball_at(
            35.0 + HALF_PADDLE_WIDTH + 2.0,
            300.0 + HALF_PADDLE_HEIGHT + 5.0,
            BALL_RADIUS,
        );
        // signed offset = 7, corner.y = 5 > 7 - 5
        assert_eq!(
            classify_paddle_hit(&ball, &paddle, Side::Left),
            Some(PaddleHit::CornerWidth)
        );
    }

    #[test]
    fn test_corner_offset_sign_for_right_paddle() {
        let paddle = paddle_at(765.0, 300.0);
        // Field side of the right paddle is to its left
        let ball = ball_at(
            765.0 - HALF_PADDLE_WIDTH - 5.0,
            300.0 - HALF_PADDLE_HEIGHT - 2.0,
            BALL_RADIUS,
        );
        assert_eq!(
            classify_paddle_hit(&ball, &paddle, Side::Right),
            Some(PaddleHit::CornerLength)
        );
    }

    #[test]
    fn test_corner_outside_radius_misses() {
        let paddle = paddle_at(35.0, 300.0);
        // Inside the inflated box but farther than r from the corner
        let ball = ball_at(
            35.0 + HALF_PADDLE_WIDTH + 6.0,
            300.0 + HALF_PADDLE_HEIGHT + 6.0,
            BALL_RADIUS,
        );
        assert_eq!(classify_paddle_hit(&ball, &paddle, Side::Left), None);
    }
}
