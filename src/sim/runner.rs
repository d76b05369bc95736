use log::{debug, info, trace, warn};

use crate::dynamics::state::FlightState;
use crate::error::{FlightError, Result};
use crate::geo::Projection;
use crate::telemetry::{Telemetry, TelemetryDisplay};
use crate::views::sync::{synchronize_with, ViewSet, ViewTilts};
use crate::views::SceneSurface;
use super::integrator::{advance, elapsed_ms};

// ---------------------------------------------------------------------------
// Loop state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No frame seen yet; there is no time baseline.
    Idle,
    /// Baseline established; every ready frame advances the aircraft.
    Running,
}

/// Everything one advancing tick produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub timestamp: f64,  // ms
    pub elapsed_ms: f64, // after clamping
    pub views: ViewSet,
    pub telemetry: Telemetry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// First frame: baseline recorded, nothing moved.
    Baseline,
    /// Scene not loaded: baseline moved forward, nothing else.
    NotReady,
    Advanced(Frame),
}

// ---------------------------------------------------------------------------
// Render loop
// ---------------------------------------------------------------------------

/// Per-frame driver: integrate, synchronize views, publish telemetry.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    pub tilts: ViewTilts,
    state: LoopState,
    frames: u64,
}

impl RenderLoop {
    pub fn new(tilts: ViewTilts) -> Self {
        Self { tilts, state: LoopState::Idle, frames: 0 }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of ticks that advanced the aircraft.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at host time `now` (ms).
    ///
    /// Never fails: a clock anomaly counts as zero elapsed time and an
    /// unloaded scene only moves the baseline.
    pub fn tick(
        &mut self,
        flight: &mut FlightState,
        now: f64,
        scene: &mut dyn SceneSurface,
        display: &mut dyn TelemetryDisplay,
        projection: &dyn Projection,
    ) -> TickOutcome {
        let Some(last) = flight.last_tick.replace(now) else {
            self.state = LoopState::Running;
            info!("Render loop running, baseline t={:.1} ms", now);
            return TickOutcome::Baseline;
        };

        if let Err(e) = Self::check_ready(scene) {
            debug!("{} ({}), baseline t={:.1} ms", e, scene.name(), now);
            return TickOutcome::NotReady;
        }

        let elapsed = elapsed_ms(last, now).unwrap_or_else(|e| {
            warn!("{}; treating as zero", e);
            0.0
        });

        // Integrate, then derive every view and readout from the same state
        advance(flight, elapsed);
        let views = synchronize_with(flight, &self.tilts);
        scene.apply(&views);

        let telemetry = Telemetry::capture(flight, projection);
        telemetry.publish(display);

        self.frames += 1;
        trace!(
            "t={:.1} dt={:.1} pos=({:.1}, {:.1}) hdg={:.1}",
            now, elapsed, flight.position.x, flight.position.y, flight.heading
        );

        TickOutcome::Advanced(Frame { timestamp: now, elapsed_ms: elapsed, views, telemetry })
    }

    fn check_ready(scene: &dyn SceneSurface) -> Result<()> {
        if scene.is_loaded() {
            Ok(())
        } else {
            Err(FlightError::NotReady)
        }
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new(ViewTilts::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
