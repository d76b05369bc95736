use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use log::warn;

// ---------------------------------------------------------------------------
// Frame scheduling
// ---------------------------------------------------------------------------

/// Host animation clock.
///
/// Each call hands out the timestamp (ms) of the next display frame, or
/// `None` once the host has stopped scheduling. The render loop trusts the
/// timestamp and measures elapsed time from it; no fixed rate is assumed.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> Option<f64>;

    /// Stop scheduling. Subsequent `next_frame` calls return `None`.
    fn cancel(&mut self);
}

// ---------------------------------------------------------------------------
// Virtual time (headless, deterministic)
// ---------------------------------------------------------------------------

/// Fixed-step virtual clock. Never sleeps.
#[derive(Debug, Clone)]
pub struct VirtualScheduler {
    pub now: f64,
    pub step_ms: f64,
    remaining: Option<usize>,
    started: bool,
}

impl VirtualScheduler {
    /// Runs forever until cancelled; first frame is at `start_ms`.
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self { now: start_ms, step_ms, remaining: None, started: false }
    }

    /// Stop after `frames` frames.
    pub fn with_limit(mut self, frames: usize) -> Self {
        self.remaining = Some(frames);
        self
    }

    /// Frames per second and run length as a convenience.
    ///
    /// A rate that is not positive and finite, or a negative or non-finite
    /// length, yields a scheduler with no frames at all.
    pub fn at_rate(hz: f64, seconds: f64) -> Self {
        if !(hz.is_finite() && hz > 0.0 && seconds.is_finite() && seconds >= 0.0) {
            warn!("No frames for rate {} Hz over {} s", hz, seconds);
            return Self::new(0.0, 0.0).with_limit(0);
        }
        let step = 1000.0 / hz;
        let frames = (seconds * hz).round() as usize + 1;
        Self::new(0.0, step).with_limit(frames)
    }
}

impl FrameScheduler for VirtualScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        if let Some(left) = self.remaining.as_mut() {
            if *left == 0 {
                return None;
            }
            *left -= 1;
        }
        if self.started {
            self.now += self.step_ms;
        }
        self.started = true;
        Some(self.now)
    }

    fn cancel(&mut self) {
        self.remaining = Some(0);
    }
}

/// Replays an explicit list of frame timestamps, including bad ones.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrames {
    frames: VecDeque<f64>,
}

impl ScriptedFrames {
    pub fn new(frames: impl IntoIterator<Item = f64>) -> Self {
        Self { frames: frames.into_iter().collect() }
    }
}

impl FrameScheduler for ScriptedFrames {
    fn next_frame(&mut self) -> Option<f64> {
        self.frames.pop_front()
    }

    fn cancel(&mut self) {
        self.frames.clear();
    }
}

// ---------------------------------------------------------------------------
// Wall clock
// ---------------------------------------------------------------------------

pub const FRAME_MS: f64 = 16.0; // ~60 Hz

/// Wall-clock scheduler that paces frames `frame_ms` apart.
///
/// Delay before each frame is `max(0, frame_ms - (now - last))`, so a slow
/// consumer gets the next frame immediately instead of drifting further.
#[derive(Debug)]
pub struct RealtimeScheduler {
    pub frame_ms: f64,
    origin: Instant,
    last: f64,
    deadline: Option<Duration>,
    cancelled: bool,
}

impl RealtimeScheduler {
    pub fn new(frame_ms: f64) -> Self {
        Self {
            frame_ms,
            origin: Instant::now(),
            last: 0.0,
            deadline: None,
            cancelled: false,
        }
    }

    /// Stop handing out frames after `duration` of wall time.
    pub fn until(mut self, duration: Duration) -> Self {
        self.deadline = Some(duration);
        self
    }

    fn elapsed_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for RealtimeScheduler {
    fn default() -> Self {
        Self::new(FRAME_MS)
    }
}

impl FrameScheduler for RealtimeScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        if self.cancelled {
            return None;
        }
        if let Some(deadline) = self.deadline {
            if self.origin.elapsed() >= deadline {
                return None;
            }
        }

        let now = self.elapsed_ms();
        let delay = (self.frame_ms - (now - self.last)).max(0.0);
        if delay > 0.0 {
            thread::sleep(Duration::from_secs_f64(delay / 1000.0));
        }
        self.last = now + delay;
        Some(self.last)
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}
