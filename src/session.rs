use log::{info, warn};

use crate::config::SessionConfig;
use crate::controls::{ControlEvent, ControlInputAdapter, ControlSource};
use crate::dynamics::state::FlightState;
use crate::error::{FlightError, Result};
use crate::geo::{Projection, WebMercator};
use crate::sim::runner::{RenderLoop, TickOutcome};
use crate::sim::scheduler::FrameScheduler;
use crate::telemetry::TelemetryDisplay;
use crate::views::SceneSurface;

// ---------------------------------------------------------------------------
// Flight session
// ---------------------------------------------------------------------------

/// Sole owner of the flight state for one session.
///
/// Control calls and ticks both go through `&mut self`, so a control
/// change can only land between two ticks, never during one.
pub struct FlightSession<S, D, P = WebMercator> {
    state: FlightState,
    controls: ControlInputAdapter,
    render_loop: RenderLoop,
    scene: S,
    display: D,
    projection: P,
}

/// What a [`FlightSession::run`] did.
#[derive(Debug, Default)]
pub struct RunStats {
    pub frames: u64,
    pub advanced: u64,
    pub rejected: Vec<FlightError>,
}

impl<S: SceneSurface, D: TelemetryDisplay> FlightSession<S, D> {
    pub fn new(config: &SessionConfig, scene: S, display: D) -> Result<Self> {
        Self::with_projection(config, scene, display, WebMercator)
    }
}

impl<S: SceneSurface, D: TelemetryDisplay, P: Projection> FlightSession<S, D, P> {
    /// Fails with [`FlightError::Config`] when `config` does not validate,
    /// so a hand-built config gets the same checks as a loaded one.
    pub fn with_projection(
        config: &SessionConfig,
        scene: S,
        display: D,
        projection: P,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: config.initial_state(),
            controls: config.adapter(),
            render_loop: RenderLoop::new(config.tilts),
            scene,
            display,
            projection,
        })
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn controls(&self) -> &ControlInputAdapter {
        &self.controls
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    // -- control channels ---------------------------------------------------

    pub fn set_throttle(&mut self, value: f64) -> Result<f64> {
        self.controls.set_throttle(&mut self.state, &mut self.display, value)
    }

    pub fn set_heading(&mut self, value: f64) -> Result<f64> {
        self.controls.set_heading(&mut self.state, &mut self.display, value)
    }

    pub fn set_altitude(&mut self, value: f64) -> Result<f64> {
        self.controls.set_altitude(&mut self.state, &mut self.display, value)
    }

    pub fn adjust_altitude(&mut self, delta: f64) -> Result<f64> {
        self.controls.adjust_altitude(&mut self.state, &mut self.display, delta)
    }

    pub fn handle_joystick(&mut self, x: f64, y: f64) -> Result<()> {
        self.controls.handle_joystick(&mut self.state, &mut self.display, x, y)
    }

    pub fn apply(&mut self, event: ControlEvent) -> Result<()> {
        self.controls.apply(&mut self.state, &mut self.display, event)
    }

    // -- frames -------------------------------------------------------------

    pub fn tick(&mut self, now: f64) -> TickOutcome {
        self.render_loop.tick(
            &mut self.state,
            now,
            &mut self.scene,
            &mut self.display,
            &self.projection,
        )
    }

    /// Tick on every frame the scheduler hands out, polling `source`
    /// before each one. Returns when the scheduler stops.
    ///
    /// Rejected control events do not stop the loop; they are logged and
    /// returned in [`RunStats::rejected`].
    pub fn run(
        &mut self,
        scheduler: &mut dyn FrameScheduler,
        source: &mut dyn ControlSource,
    ) -> RunStats {
        info!("Session started (scene: {}, input: {})", self.scene.name(), source.name());
        let mut stats = RunStats::default();

        while let Some(now) = scheduler.next_frame() {
            for event in source.poll(now) {
                if let Err(e) = self.apply(event) {
                    warn!("Dropped {:?}: {}", event, e);
                    stats.rejected.push(e);
                }
            }

            if let TickOutcome::Advanced(_) = self.tick(now) {
                stats.advanced += 1;
            }
            stats.frames += 1;
        }

        info!(
            "Session stopped after {} frames ({} advanced, {} inputs rejected)",
            stats.frames,
            stats.advanced,
            stats.rejected.len()
        );
        stats
    }
}
