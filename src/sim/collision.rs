//! Collision tests and reflection for axis-aligned geometry
//!
//! All tests are AABB checks against the ball center, with the target box
//! expanded by the ball radius on every side. Reflection off walls and
//! bricks flips one velocity component; a paddle hit instead re-aims the
//! velocity from a deflection angle so the speed magnitude stays exact.

use glam::Vec2;

use crate::consts::MAX_DEFLECTION;
use crate::sim::state::{Ball, Brick, Paddle};

/// Ball center inside the brick's AABB expanded by the ball radius.
pub fn ball_hits_brick(ball: &Ball, brick: &Brick) -> bool {
    brick.x - ball.radius <= ball.pos.x
        && ball.pos.x <= brick.x + brick.width + ball.radius
        && brick.y - ball.radius <= ball.pos.y
        && ball.pos.y <= brick.y + brick.height + ball.radius
}

/// Ball overlapping the paddle's top band while moving downward.
///
/// The band spans `paddle_top - radius ..= paddle_top + height` vertically
/// and the paddle width expanded by the radius horizontally. Upward-moving
/// balls never collide, so a bounce cannot re-fire on the way out.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle, paddle_top: f32) -> bool {
    ball.vel.y > 0.0
        && paddle_top - ball.radius <= ball.pos.y
        && ball.pos.y <= paddle_top + paddle.height
        && paddle.x - ball.radius <= ball.pos.x
        && ball.pos.x <= paddle.x + paddle.width + ball.radius
}

/// Velocity after a paddle bounce.
///
/// `hit_pos` is the strike position across the paddle, 0 at the left edge
/// and 1 at the right (it can exceed that slightly because of the radius
/// margin). The deflection angle grows linearly away from the center up to
/// [`MAX_DEFLECTION`]; `sin^2 + cos^2 = 1` keeps the magnitude at exactly
/// `speed`, and the vertical component is forced upward.
pub fn paddle_bounce_velocity(hit_pos: f32, speed: f32) -> Vec2 {
    let angle = (hit_pos - 0.5) * MAX_DEFLECTION;
    Vec2::new(speed * angle.sin(), -(speed * angle.cos()).abs())
}
