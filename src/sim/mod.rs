//! Deterministic game simulation
//!
//! All game logic runs here with fixed timestep for reproducibility.
//! Nothing in this module touches the window or the GPU.

pub mod collision;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{ImpactAxis, Rect};
pub use physics::{BallReport, update_ball};
pub use state::{Ball, BallState, Block, GamePhase, GameState, Paddle};
pub use tick::{TickInput, TickOutcome, tick};
