//! winit application: window, GPU bring-up and the per-frame loop

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use super::clock::{FpsCounter, FrameClock};
use super::input::{Keyboard, QUIT_KEY};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::InitError;
use crate::renderer::{RenderState, build_frame};
use crate::settings::Settings;
use crate::sim::{GameState, tick};

/// Game instance holding all state
pub struct App {
    settings: Settings,
    state: GameState,
    keyboard: Keyboard,
    clock: FrameClock,
    fps: FpsCounter,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// First fatal error; ends the event loop
    error: Option<InitError>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            state: GameState::new(),
            keyboard: Keyboard::new(),
            clock: FrameClock::new(),
            fps: FpsCounter::new(Instant::now()),
            window: None,
            render_state: None,
            error: None,
        }
    }

    /// Fatal error recorded while running, if any
    pub fn take_error(&mut self) -> Option<InitError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: InitError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, InitError> {
        let scale = self.settings.effective_window_scale();
        let attributes = Window::default_attributes()
            .with_title("Breakout")
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH * scale, SCREEN_HEIGHT * scale));
        Ok(Arc::new(event_loop.create_window(attributes)?))
    }

    fn init_gpu(&self, window: Arc<Window>) -> Result<RenderState, InitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let size = window.inner_size();
        let surface = instance.create_surface(window)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            self.settings.present_mode(),
        ))
    }

    /// Run due simulation ticks, then draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        for _ in 0..self.clock.advance(now) {
            let input = self.keyboard.snapshot();
            tick(&mut self.state, &input, self.settings.restart);
            self.keyboard.consume_presses();
        }

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        let vertices = build_frame(&self.state);
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, InitError::OutOfMemory);
                return;
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if let Some(fps) = self.fps.frame(now) {
            if self.settings.log_fps {
                log::info!("{fps:.1} fps");
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, e),
        };
        match self.init_gpu(window.clone()) {
            Ok(render_state) => {
                self.render_state = Some(render_state);
                self.window = Some(window);
                log::info!(
                    "Breakout running (restart policy: {})",
                    self.settings.restart.as_str()
                );
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == QUIT_KEY && event.state.is_pressed() {
                        event_loop.exit();
                        return;
                    }
                    self.keyboard
                        .key_event(code, event.state.is_pressed(), event.repeat);
                }
            }
            WindowEvent::Focused(false) => self.keyboard.clear(),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
