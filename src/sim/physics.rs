//! Ball physics: launch, integration, wall/paddle/block response
//!
//! Velocities are in units per tick. There is no dt scaling, so the
//! simulation must be stepped at the fixed `SIM_DT` rate.

use glam::Vec2;

use super::collision::{ImpactAxis, impact_axis, paddle_steer, penetration, reflect};
use super::state::{Ball, BallState, Block, Paddle};
use super::tick::TickInput;
use crate::consts::*;

/// What happened to the ball during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallReport {
    /// Ball left the dock this tick
    pub launched: bool,
    /// Bounced off the left, right or top edge
    pub wall_bounce: bool,
    /// Bounced off the paddle
    pub paddle_hit: bool,
    /// Index (before removal) of the block destroyed this tick
    pub destroyed_block: Option<usize>,
    /// Ball is below the bottom edge
    pub lost: bool,
}

/// Launch velocity for the held direction keys.
///
/// Straight up by default; left is checked before right, so left wins when
/// both are held.
pub fn launch_velocity(left: bool, right: bool) -> Vec2 {
    let up = -BALL_LAUNCH_SPEED;
    if left {
        Vec2::new(-BALL_LAUNCH_SPEED, up)
    } else if right {
        Vec2::new(BALL_LAUNCH_SPEED, up)
    } else {
        Vec2::new(0.0, up)
    }
}

/// Speed up after destroying a block.
///
/// Never slows the ball down: the cap only limits how far a speed-up can go.
pub fn speed_up(vel: Vec2) -> Vec2 {
    let limit = BALL_MAX_SPEED.max(vel.length());
    (vel * BLOCK_SPEEDUP).clamp_length_max(limit)
}

/// Advance the ball by one tick.
///
/// Removes at most one block. Terminal conditions are reported, never acted on.
pub fn update_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    blocks: &mut Vec<Block>,
    input: &TickInput,
) -> BallReport {
    let mut report = BallReport::default();

    if ball.is_docked() {
        // Track the paddle every tick until launch
        ball.dock_to(paddle);
        if !input.launch {
            return report;
        }
        ball.state = BallState::Launched {
            vel: launch_velocity(input.left, input.right),
        };
        report.launched = true;
    }

    let mut vel = ball.velocity();
    ball.pos += vel;

    // Walls (no position correction)
    if ball.pos.x < ball.radius || ball.pos.x > SCREEN_WIDTH - ball.radius {
        vel = reflect(vel, ImpactAxis::Side);
        report.wall_bounce = true;
    }
    if ball.pos.y < ball.radius {
        vel = reflect(vel, ImpactAxis::Face);
        report.wall_bounce = true;
    }
    if ball.pos.y > SCREEN_HEIGHT {
        report.lost = true;
    }

    // Paddle: y flips whichever face was hit; x is replaced, not reflected.
    // A grazing hit can overlap for two ticks and flip twice.
    let bounds = ball.bounds();
    if bounds.overlaps(&paddle.rect()) {
        vel.y = -vel.y;
        vel.x = paddle_steer(ball.pos.x, paddle.center_x());
        report.paddle_hit = true;
    }

    // Blocks: first overlap only
    if let Some(index) = blocks.iter().position(|b| bounds.overlaps(&b.rect())) {
        let depth = penetration(ball.pos, ball.radius, &blocks[index].rect());
        vel = speed_up(reflect(vel, impact_axis(depth)));
        blocks.remove(index);
        report.destroyed_block = Some(index);
    }

    ball.state = BallState::Launched { vel };
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::block_grid;
    use proptest::prelude::*;

    fn launched(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            radius: BALL_RADIUS,
            state: BallState::Launched { vel },
        }
    }

    fn step(ball: &mut Ball, blocks: &mut Vec<Block>) -> BallReport {
        update_ball(ball, &Paddle::default(), blocks, &TickInput::default())
    }

    #[test]
    fn test_docked_ball_follows_paddle() {
        let mut paddle = Paddle::default();
        let mut ball = Ball::docked_on(&paddle);
        let mut blocks = block_grid();

        paddle.pos.x = 120.0;
        let report = update_ball(&mut ball, &paddle, &mut blocks, &TickInput::default());

        assert_eq!(report, BallReport::default());
        assert!(ball.is_docked());
        assert_eq!(ball.pos, Vec2::new(170.0, paddle.pos.y - BALL_RADIUS));
        assert_eq!(blocks.len(), 55);
    }

    #[test]
    fn test_launch_law() {
        assert_eq!(launch_velocity(false, false), Vec2::new(0.0, -5.0));
        assert_eq!(launch_velocity(true, false), Vec2::new(-5.0, -5.0));
        assert_eq!(launch_velocity(false, true), Vec2::new(5.0, -5.0));
        // Left wins ties
        assert_eq!(launch_velocity(true, true), Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_launch_moves_on_same_tick() {
        let paddle = Paddle::default();
        let mut ball = Ball::docked_on(&paddle);
        let start = ball.pos;
        let input = TickInput {
            launch: true,
            right: true,
            ..Default::default()
        };

        let report = update_ball(&mut ball, &paddle, &mut Vec::new(), &input);

        assert!(report.launched);
        assert!(!report.paddle_hit);
        assert_eq!(ball.velocity(), Vec2::new(5.0, -5.0));
        assert_eq!(ball.pos, start + Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_left_wall_flips_x() {
        let mut ball = launched(Vec2::new(12.0, 200.0), Vec2::new(-4.0, 3.0));
        let report = step(&mut ball, &mut Vec::new());
        assert!(report.wall_bounce);
        assert_eq!(ball.velocity(), Vec2::new(4.0, 3.0));
        // No position correction
        assert_eq!(ball.pos, Vec2::new(8.0, 203.0));
    }

    #[test]
    fn test_right_wall_flips_x() {
        let mut ball = launched(Vec2::new(788.0, 200.0), Vec2::new(4.0, 3.0));
        step(&mut ball, &mut Vec::new());
        assert_eq!(ball.velocity(), Vec2::new(-4.0, 3.0));
    }

    #[test]
    fn test_top_wall_flips_y() {
        let mut ball = launched(Vec2::new(400.0, 12.0), Vec2::new(1.0, -4.0));
        step(&mut ball, &mut Vec::new());
        assert_eq!(ball.velocity(), Vec2::new(1.0, 4.0));
    }

    #[test]
    fn test_bottom_exit_is_lost() {
        for vel in [Vec2::new(0.0, 5.0), Vec2::new(3.0, -2.0), Vec2::new(-1.0, 0.5)] {
            let mut ball = launched(Vec2::new(100.0, 460.0), vel);
            let report = step(&mut ball, &mut Vec::new());
            assert!(report.lost, "velocity {vel:?}");
        }
    }

    #[test]
    fn test_paddle_hit_steers_by_offset() {
        let paddle = Paddle::default();
        // Right of center, descending onto the paddle top
        let mut ball = launched(Vec2::new(425.0, 418.0), Vec2::new(-3.0, 4.0));
        let report = update_ball(&mut ball, &paddle, &mut Vec::new(), &TickInput::default());

        assert!(report.paddle_hit);
        // Position after integration is (422, 422); center of paddle is 400
        assert_eq!(ball.velocity(), Vec2::new(22.0 / 5.0, -4.0));
    }

    #[test]
    fn test_block_hit_removes_one_and_speeds_up() {
        let mut blocks = block_grid();
        // Just under the first block of the bottom row (10..70 x 130..150), moving up
        let mut ball = launched(Vec2::new(40.0, 162.0), Vec2::new(0.0, -5.0));
        let before = ball.velocity().length();

        let report = step(&mut ball, &mut blocks);

        assert_eq!(report.destroyed_block, Some(44));
        assert_eq!(blocks.len(), 54);
        assert!(ball.velocity().y > 0.0);
        assert!(ball.velocity().length() > before);
    }

    #[test]
    fn test_only_one_block_per_tick() {
        // Straddle the gap between two adjacent blocks in the bottom row
        let mut blocks = block_grid();
        let mut ball = launched(Vec2::new(76.0, 162.0), Vec2::new(0.0, -5.0));
        let report = step(&mut ball, &mut blocks);

        assert_eq!(report.destroyed_block, Some(44));
        assert_eq!(blocks.len(), 54);
    }

    #[test]
    fn test_side_hit_flips_x() {
        let mut blocks = vec![Block {
            pos: Vec2::new(300.0, 200.0),
            size: Vec2::new(60.0, 20.0),
        }];
        let mut ball = launched(Vec2::new(288.0, 210.0), Vec2::new(4.0, 1.0));
        step(&mut ball, &mut blocks);

        assert!(blocks.is_empty());
        let vel = ball.velocity();
        assert!(vel.x < 0.0);
        assert!(vel.y > 0.0);
    }

    #[test]
    fn test_speed_up_is_capped_but_never_slows() {
        let fast = Vec2::new(0.0, BALL_MAX_SPEED - 0.1);
        assert!((speed_up(fast).length() - BALL_MAX_SPEED).abs() < 1e-4);

        let over = Vec2::new(12.0, 14.0);
        assert!((speed_up(over).length() - over.length()).abs() < 1e-4);

        let slow = Vec2::new(3.0, 4.0);
        assert!((speed_up(slow).length() - 5.0 * BLOCK_SPEEDUP).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_docked_ball_sits_on_paddle(x in 0.0f32..=700.0) {
            let mut paddle = Paddle::default();
            paddle.pos.x = x;
            let mut ball = Ball::docked_on(&Paddle::default());
            update_ball(&mut ball, &paddle, &mut Vec::new(), &TickInput::default());
            prop_assert_eq!(ball.pos, Vec2::new(x + paddle.size.x / 2.0, paddle.pos.y - ball.radius));
        }
    }
}
