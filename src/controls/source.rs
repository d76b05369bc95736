// ---------------------------------------------------------------------------
// Control events
// ---------------------------------------------------------------------------

/// One control change, as delivered by a stick, lever or UI field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    Throttle(f64),
    Heading(f64),
    Altitude(f64),
    AdjustAltitude(f64),
    Joystick { x: f64, y: f64 },
}

/// Trait for control input sources.
///
/// Implement this to feed hardware or scripted inputs into a session.
/// The session polls between frames, so events land between ticks, never
/// inside one.
pub trait ControlSource {
    /// Events that became due by host time `now_ms`.
    fn poll(&mut self, now_ms: f64) -> Vec<ControlEvent>;

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// No input at all.
impl ControlSource for () {
    fn poll(&mut self, _now_ms: f64) -> Vec<ControlEvent> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "none"
    }
}

// ---------------------------------------------------------------------------
// Simulated stick: fixed deflections on a fixed period
// ---------------------------------------------------------------------------

/// Stand-in for real hardware: holds the stick and lever at fixed
/// positions and reports them every `interval_ms`.
#[derive(Debug, Clone)]
pub struct SimulatedStick {
    pub interval_ms: f64,
    pub stick_x: f64,
    pub stick_y: f64,
    pub throttle: f64,
    next_due: Option<f64>,
}

impl SimulatedStick {
    pub fn new(interval_ms: f64, stick_x: f64, stick_y: f64, throttle: f64) -> Self {
        Self { interval_ms, stick_x, stick_y, throttle, next_due: None }
    }
}

impl Default for SimulatedStick {
    fn default() -> Self {
        Self::new(100.0, 0.5, 0.8, 0.7)
    }
}

impl ControlSource for SimulatedStick {
    fn poll(&mut self, now_ms: f64) -> Vec<ControlEvent> {
        let Some(due) = self.next_due else {
            // first poll starts the period
            self.next_due = Some(now_ms + self.interval_ms);
            return Vec::new();
        };
        if !(self.interval_ms > 0.0 && now_ms.is_finite() && now_ms >= due) {
            return Vec::new();
        }

        // A held stick reads the same every period, so one report covers any
        // number of missed periods; the next one lands on the period grid.
        let missed = ((now_ms - due) / self.interval_ms).floor();
        self.next_due = Some(due + (missed + 1.0) * self.interval_ms);
        vec![
            ControlEvent::Joystick { x: self.stick_x, y: self.stick_y },
            ControlEvent::Throttle(self.throttle),
        ]
    }

    fn name(&self) -> &str {
        "SimulatedStick"
    }
}
