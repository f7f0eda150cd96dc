//! Fixed-rate frame clock

use std::time::{Duration, Instant};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame gap fed to the accumulator (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Converts wall-clock time into whole simulation ticks
#[derive(Debug, Default)]
pub struct FrameClock {
    accumulator: f32,
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks due at `now`; the first call only starts the clock
    pub fn advance(&mut self, now: Instant) -> u32 {
        let dt = match self.last.replace(now) {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.advance_by(dt)
    }

    /// Ticks due after `dt` seconds
    pub fn advance_by(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}

/// Frames-per-second meter reporting once per second
#[derive(Debug)]
pub struct FpsCounter {
    frames: u32,
    since: Instant,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self { frames: 0, since: now }
    }

    /// Count a frame; returns the rate when a full second has elapsed
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.since);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.since = now;
        Some(fps)
    }
}
