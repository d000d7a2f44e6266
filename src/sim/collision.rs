//! Collision resolution for the ball
//!
//! Walls reflect the ball; the paddle relaunches it at the canonical upward
//! speed. There is no floor: leaving through the bottom is handled by `tick`.

use super::state::{Ball, Field, Paddle, Wall};

/// Bounce the ball off the side and top walls
///
/// The velocity sign is set from the wall touched rather than negated, and
/// the ball is pulled back inside the field, so one contact flips the
/// direction exactly once even if the ball overshot. A corner reports the
/// side wall first, then the top.
pub fn bounce_off_walls(ball: &mut Ball, field: Field) -> Vec<Wall> {
    let mut walls = Vec::new();

    if ball.rect.x() <= 0 {
        ball.vel.x = ball.vel.x.abs();
        ball.rect.pos.x = 0;
        walls.push(Wall::Left);
    } else if ball.rect.right() >= field.width {
        ball.vel.x = -ball.vel.x.abs();
        ball.rect.pos.x = field.width - ball.rect.width();
        walls.push(Wall::Right);
    }

    // Top only; the bottom edge is the loss line
    if ball.rect.y() <= 0 {
        ball.vel.y = ball.vel.y.abs();
        ball.rect.pos.y = 0;
        walls.push(Wall::Top);
    }

    walls
}

/// Resolve ball/paddle contact
///
/// On overlap the ball is placed exactly on top of the paddle and sent
/// upward at its canonical speed. Returns whether the paddle was hit.
pub fn resolve_paddle_contact(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !ball.rect.intersects(&paddle.rect) {
        return false;
    }
    ball.vel.y = -ball.speed;
    ball.rect.pos.y = paddle.rect.y() - ball.rect.height();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use glam::IVec2;

    const FIELD: Field = Field {
        width: 800,
        height: 600,
    };

    fn ball_at(x: i32, y: i32, vel: IVec2) -> Ball {
        Ball {
            rect: Rect::new(x, y, 20, 20),
            vel,
            speed: 5,
        }
    }

    fn paddle_at(x: i32) -> Paddle {
        Paddle {
            rect: Rect::new(x, 570, 100, 20),
            speed: 10,
        }
    }

    #[test]
    fn test_no_contact_in_open_field() {
        let mut ball = ball_at(395, 285, IVec2::new(5, -5));
        assert!(bounce_off_walls(&mut ball, FIELD).is_empty());
        assert_eq!(ball.vel, IVec2::new(5, -5));
    }

    #[test]
    fn test_exact_left_contact_reverses_dx() {
        let mut ball = ball_at(0, 100, IVec2::new(-5, 5));
        assert_eq!(bounce_off_walls(&mut ball, FIELD), vec![Wall::Left]);
        assert_eq!(ball.vel.x, 5);
        assert_eq!(ball.rect.x(), 0);
    }

    #[test]
    fn test_exact_right_contact_reverses_dx() {
        let mut ball = ball_at(780, 100, IVec2::new(5, 5));
        assert_eq!(bounce_off_walls(&mut ball, FIELD), vec![Wall::Right]);
        assert_eq!(ball.vel.x, -5);
        assert_eq!(ball.rect.x(), 780);
    }

    #[test]
    fn test_overshoot_is_clamped_and_flipped_once() {
        let mut ball = ball_at(-3, 100, IVec2::new(-7, 5));
        bounce_off_walls(&mut ball, FIELD);
        assert_eq!(ball.rect.x(), 0);
        assert_eq!(ball.vel.x, 7);

        // Still touching the wall on a re-check: direction must not flip back
        bounce_off_walls(&mut ball, FIELD);
        assert_eq!(ball.vel.x, 7);
    }

    #[test]
    fn test_top_contact_reverses_dy() {
        let mut ball = ball_at(300, 0, IVec2::new(5, -5));
        assert_eq!(bounce_off_walls(&mut ball, FIELD), vec![Wall::Top]);
        assert_eq!(ball.vel.y, 5);
    }

    #[test]
    fn test_corner_contact_reports_side_and_top() {
        let mut ball = ball_at(780, -2, IVec2::new(5, -5));
        assert_eq!(
            bounce_off_walls(&mut ball, FIELD),
            vec![Wall::Right, Wall::Top]
        );
        assert_eq!(ball.vel, IVec2::new(-5, 5));
        assert_eq!(ball.rect.pos, IVec2::new(780, 0));
    }

    #[test]
    fn test_no_floor_bounce() {
        let mut ball = ball_at(300, 590, IVec2::new(5, 5));
        assert!(bounce_off_walls(&mut ball, FIELD).is_empty());
        assert_eq!(ball.vel.y, 5);
        assert_eq!(ball.rect.y(), 590);
    }

    #[test]
    fn test_paddle_hit_snaps_and_resets_dy() {
        let mut ball = ball_at(380, 569, IVec2::new(5, 5));
        assert!(resolve_paddle_contact(&mut ball, &paddle_at(350)));
        assert_eq!(ball.rect.y(), 550);
        assert_eq!(ball.vel.y, -5);
        assert_eq!(ball.vel.x, 5);
    }

    #[test]
    fn test_paddle_hit_resets_dy_even_when_already_upward() {
        let mut ball = ball_at(380, 560, IVec2::new(-5, -3));
        assert!(resolve_paddle_contact(&mut ball, &paddle_at(350)));
        assert_eq!(ball.vel.y, -5);
    }

    #[test]
    fn test_resting_on_paddle_is_not_a_hit() {
        let mut ball = ball_at(380, 550, IVec2::new(5, 5));
        assert!(!resolve_paddle_contact(&mut ball, &paddle_at(350)));
        assert_eq!(ball.vel.y, 5);
    }

    #[test]
    fn test_miss_beside_paddle() {
        let mut ball = ball_at(100, 575, IVec2::new(5, 5));
        assert!(!resolve_paddle_contact(&mut ball, &paddle_at(350)));
    }
}
