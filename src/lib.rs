//! Breakout - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle control, ball physics, reset policy)
//! - `renderer`: wgpu rendering pipeline
//! - `platform`: Window, keyboard and frame clock
//! - `settings`: Presentation preferences and restart policy

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::InitError;
pub use settings::{RestartPolicy, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical screen size
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Fixed simulation timestep; physics advances one unit step per tick
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Launch speed per axis (units per tick)
    pub const BALL_LAUNCH_SPEED: f32 = 5.0;
    /// Speed cap for block speed-ups (units per tick)
    pub const BALL_MAX_SPEED: f32 = 15.0;
    /// Multiplier applied to velocity each time a block is destroyed
    pub const BLOCK_SPEEDUP: f32 = 1.03;
    /// Paddle "touch sensitivity": offset from center divided by this gives x speed
    pub const PADDLE_STEER_DIVISOR: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Distance from the top of the paddle to the bottom edge
    pub const PADDLE_BOTTOM_GAP: f32 = 20.0;

    /// Block grid: 11 columns of 60 + 10 gaps of 12 + 10 margin each side = 800
    pub const BLOCK_COLUMNS: usize = 11;
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_SPACING_X: f32 = 12.0;
    pub const BLOCK_SPACING_Y: f32 = 10.0;
    pub const BLOCK_OFFSET_X: f32 = 10.0;
    pub const BLOCK_OFFSET_Y: f32 = 10.0;
}
