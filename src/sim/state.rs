//! Game state and core simulation types
//!
//! Everything a reset recreates lives here. `GameState::new()` is the only
//! way to build a fresh layout, so two resets always agree.

use glam::Vec2;

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay (ball docked or in flight)
    Playing,
    /// Ball left through the bottom edge
    Over,
}

/// Ball state - docked on the paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallState {
    /// Riding on top of the paddle, waiting for launch input
    Docked,
    /// Free-moving with the given per-tick velocity
    Launched { vel: Vec2 },
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    /// Create a ball docked on the given paddle
    pub fn docked_on(paddle: &Paddle) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            radius: BALL_RADIUS,
            state: BallState::Docked,
        };
        ball.dock_to(paddle);
        ball
    }

    /// Snap to the top-center of the paddle
    pub fn dock_to(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(paddle.center_x(), paddle.pos.y - self.radius);
    }

    pub fn is_docked(&self) -> bool {
        matches!(self.state, BallState::Docked)
    }

    /// Current velocity (zero while docked)
    pub fn velocity(&self) -> Vec2 {
        match self.state {
            BallState::Docked => Vec2::ZERO,
            BallState::Launched { vel } => vel,
        }
    }

    /// Bounding square (center ± radius)
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.radius))
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal movement per tick
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (SCREEN_WIDTH - PADDLE_WIDTH) / 2.0,
                SCREEN_HEIGHT - PADDLE_BOTTOM_GAP,
            ),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
        }
    }
}

impl Paddle {
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Move from held directions, keeping the paddle fully on screen.
    ///
    /// Both directions are applied independently (left first), so holding
    /// both keys cancels out unless a clamp kicks in.
    pub fn steer(&mut self, left: bool, right: bool) {
        if left {
            self.pos.x = (self.pos.x - self.speed).max(0.0);
        }
        if right {
            self.pos.x = (self.pos.x + self.speed).min(SCREEN_WIDTH - self.size.x);
        }
    }
}

/// A destructible block
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Block {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Build the fixed 11x5 grid, row by row
pub fn block_grid() -> Vec<Block> {
    let size = Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT);
    let step = size + Vec2::new(BLOCK_SPACING_X, BLOCK_SPACING_Y);
    let offset = Vec2::new(BLOCK_OFFSET_X, BLOCK_OFFSET_Y);

    (0..BLOCK_ROWS)
        .flat_map(|row| (0..BLOCK_COLUMNS).map(move |col| (col, row)))
        .map(|(col, row)| Block {
            pos: offset + step * Vec2::new(col as f32, row as f32),
            size,
        })
        .collect()
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: Vec<Block>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh layout: centered paddle, docked ball, full block grid
    pub fn new() -> Self {
        let paddle = Paddle::default();
        let ball = Ball::docked_on(&paddle);
        Self {
            phase: GamePhase::Playing,
            paddle,
            ball,
            blocks: block_grid(),
        }
    }

    /// Replace everything with a fresh layout
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
