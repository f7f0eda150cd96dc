//! Platform layer
//!
//! Handles the native side of the game:
//! - Window and event loop (winit)
//! - Keyboard state
//! - Fixed-rate frame clock

pub mod app;
pub mod clock;
pub mod input;

use winit::event_loop::{ControlFlow, EventLoop};

use crate::error::InitError;
use crate::settings::Settings;

pub use app::App;

/// Open the window and run until it closes
pub fn run(settings: Settings) -> Result<(), InitError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
