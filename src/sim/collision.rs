//! Collision detection and response
//!
//! Paddles are approximated by four contact circles stacked vertically;
//! the ball carries one. Overlap is a plain circle-circle test, and the
//! bounce response reflects the ball's direction across the court's long
//! axis.

use glam::Vec3;

use super::transform::Transform;

/// Simplified collision proxy: a circle in the court plane (Z unused).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingCircle {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Circle-circle overlap with strict inequality; touching circles do not
/// count as a hit, which gives a slightly generous miss window.
pub fn circles_intersect(a: &BoundingCircle, b: &BoundingCircle) -> bool {
    a.center.distance(b.center) < a.radius + b.radius
}

/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Redirect the ball off a paddle face.
///
/// The new direction is the paddle-to-ball offset reflected across the
/// plane normal to the court's long axis, so the bounce angle depends on
/// where the ball struck relative to the paddle center rather than on its
/// incoming velocity. A ball that has already slipped behind the paddle is
/// left untouched; the scoring check picks it up.
pub fn resolve_paddle_bounce(paddle: &Transform, ball: &Transform, direction: &mut Vec3) {
    // Left half: player 1's paddle faces +X
    if ball.position.x < 0.0 {
        if ball.position.x > paddle.position.x {
            *direction = reflected_or_normal(paddle.position - ball.position, Vec3::X);
        }
        return;
    }

    // Right half: player 2's paddle faces -X
    if ball.position.x < paddle.position.x {
        *direction = reflected_or_normal(paddle.position - ball.position, Vec3::NEG_X);
    }
}

/// Normalized reflection, falling back to the plane normal when the
/// relative vector is zero (ball exactly on the paddle center).
fn reflected_or_normal(v: Vec3, n: Vec3) -> Vec3 {
    reflect(v, n).try_normalize().unwrap_or(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_coincident_centers() {
        let a = BoundingCircle::new(Vec3::ZERO, 0.02);
        let b = BoundingCircle::new(Vec3::ZERO, 0.02);
        assert!(circles_intersect(&a, &b));
    }

    #[test]
    fn test_touching_circles_do_not_intersect() {
        // Distance exactly equals the radius sum
        let a = BoundingCircle::new(Vec3::ZERO, 1.0);
        let b = BoundingCircle::new(Vec3::new(2.0, 0.0, 0.0), 1.0);
        assert!(!circles_intersect(&a, &b));
    }

    #[test]
    fn test_intersect_overlapping() {
        let a = BoundingCircle::new(Vec3::ZERO, 1.0);
        let b = BoundingCircle::new(Vec3::new(1.9, 0.0, 0.0), 1.0);
        assert!(circles_intersect(&a, &b));
    }

    #[test]
    fn test_reflect_across_x_plane() {
        let v = Vec3::new(-1.0, 0.5, 0.0);
        let r = reflect(v, Vec3::X);
        assert!((r - Vec3::new(1.0, 0.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_left_paddle_bounce_reflects_off_positive_x() {
        let paddle = Transform::new(Vec3::new(-0.8, 0.0, 0.0), Vec3::ONE);
        let ball = Transform::new(Vec3::new(-0.05, 0.01, 0.0), Vec3::ONE);
        let mut direction = Vec3::new(-1.0, 0.0, 0.0);

        resolve_paddle_bounce(&paddle, &ball, &mut direction);

        let expected = reflect(paddle.position - ball.position, Vec3::X).normalize();
        assert!((direction - expected).length() < 1e-6);
        // Reflecting across +X sends the ball back toward the right half
        assert!(direction.x > 0.0);
    }

    #[test]
    fn test_right_paddle_bounce_reflects_off_negative_x() {
        let paddle = Transform::new(Vec3::new(0.8, 0.0, 0.0), Vec3::ONE);
        let ball = Transform::new(Vec3::new(0.75, -0.02, 0.0), Vec3::ONE);
        let mut direction = Vec3::new(1.0, 0.0, 0.0);

        resolve_paddle_bounce(&paddle, &ball, &mut direction);

        let expected = reflect(paddle.position - ball.position, Vec3::NEG_X).normalize();
        assert!((direction - expected).length() < 1e-6);
        assert!(direction.x < 0.0);
    }

    #[test]
    fn test_ball_behind_left_paddle_is_noop() {
        let paddle = Transform::new(Vec3::new(-0.8, 0.0, 0.0), Vec3::ONE);
        let ball = Transform::new(Vec3::new(-0.85, 0.0, 0.0), Vec3::ONE);
        let mut direction = Vec3::new(-1.0, 0.3, 0.0).normalize();
        let before = direction;

        resolve_paddle_bounce(&paddle, &ball, &mut direction);
        assert_eq!(direction, before);
    }

    #[test]
    fn test_ball_behind_right_paddle_is_noop() {
        let paddle = Transform::new(Vec3::new(0.8, 0.0, 0.0), Vec3::ONE);
        let ball = Transform::new(Vec3::new(0.9, 0.0, 0.0), Vec3::ONE);
        let mut direction = Vec3::new(1.0, -0.3, 0.0).normalize();
        let before = direction;

        resolve_paddle_bounce(&paddle, &ball, &mut direction);
        assert_eq!(direction, before);
    }

    #[test]
    fn test_ball_on_paddle_center_is_noop() {
        // Coincident centers fail both strict branch guards, so the
        // reflection never sees a zero relative vector.
        let paddle = Transform::new(Vec3::new(-0.2, 0.1, 0.0), Vec3::ONE);
        let ball = Transform::new(Vec3::new(-0.2, 0.1, 0.0), Vec3::ONE);
        let mut direction = Vec3::new(-1.0, 0.0, 0.0);
        let before = direction;

        resolve_paddle_bounce(&paddle, &ball, &mut direction);
        assert_eq!(direction, before);
    }

    #[test]
    fn test_direction_stays_normalized_after_bounce() {
        let paddle = Transform::new(Vec3::new(-0.8, 0.4, 0.0), Vec3::ONE);
        let ball = Transform::new(Vec3::new(-0.76, 0.37, 0.0), Vec3::ONE);
        let mut direction = Vec3::new(-0.6, 0.8, 0.0);

        resolve_paddle_bounce(&paddle, &ball, &mut direction);
        assert!((direction.length() - 1.0).abs() < 1e-5);
    }
}
