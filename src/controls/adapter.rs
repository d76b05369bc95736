use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::dynamics::state::{normalize_heading, FlightState, FULL_TURN};
use crate::error::{FlightError, Result};
use crate::telemetry::{format_altitude, format_heading, format_speed, TelemetryDisplay, TelemetryField};
use super::source::ControlEvent;

// ---------------------------------------------------------------------------
// Channels and input scaling
// ---------------------------------------------------------------------------

/// Logical control channel an input arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Throttle,
    Heading,
    Altitude,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Throttle => "throttle",
            Channel::Heading => "heading",
            Channel::Altitude => "altitude",
        })
    }
}

/// How a throttle value becomes a speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ThrottleMode {
    /// Value is already m/s.
    Direct,
    /// Value is a `[0, 1]` or `[-1, 1]` lever position scaled by `full_scale` m/s.
    Normalized { full_scale: f64 },
}

impl ThrottleMode {
    pub fn speed_for(&self, value: f64) -> f64 {
        let speed = match self {
            ThrottleMode::Direct => value,
            ThrottleMode::Normalized { full_scale } => value * full_scale,
        };
        speed.max(0.0)
    }
}

impl Default for ThrottleMode {
    fn default() -> Self {
        ThrottleMode::Normalized { full_scale: 1000.0 }
    }
}

/// How a heading value becomes degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingMode {
    /// Value is absolute degrees, stored as given.
    Absolute,
    /// Value is joystick X deflection; one unit is a full turn.
    #[default]
    Joystick,
}

impl HeadingMode {
    pub fn heading_for(&self, value: f64) -> f64 {
        match self {
            HeadingMode::Absolute => value,
            HeadingMode::Joystick => normalize_heading(value * FULL_TURN),
        }
    }
}

fn require_finite(channel: Channel, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        warn!("Rejected {} input {}", channel, value);
        Err(FlightError::invalid(channel, format!("{value} is not a finite number")))
    }
}

/// Parse a control value typed or read as text.
pub fn parse_control(channel: Channel, text: &str) -> Result<f64> {
    let value: f64 = text.trim().parse().map_err(|_| {
        warn!("Rejected {} input {:?}", channel, text);
        FlightError::invalid(channel, format!("{text:?} is not a number"))
    })?;
    require_finite(channel, value)
}

// ---------------------------------------------------------------------------
// Control input adapter
// ---------------------------------------------------------------------------

/// Maps control events onto flight state and refreshes the affected
/// readouts right away, independent of the render tick.
///
/// Never touches `position`; that belongs to the integrator.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlInputAdapter {
    pub throttle: ThrottleMode,
    pub heading: HeadingMode,
    pub joystick_altitude_rate: f64, // m per unit of Y deflection
}

impl ControlInputAdapter {
    pub fn new(throttle: ThrottleMode, heading: HeadingMode, joystick_altitude_rate: f64) -> Self {
        Self { throttle, heading, joystick_altitude_rate }
    }

    /// Returns the new speed.
    pub fn set_throttle(
        &self,
        state: &mut FlightState,
        display: &mut dyn TelemetryDisplay,
        value: f64,
    ) -> Result<f64> {
        let value = require_finite(Channel::Throttle, value)?;
        // scaling can overflow a finite lever value
        state.speed = require_finite(Channel::Throttle, self.throttle.speed_for(value))?;
        display.show(TelemetryField::Speed, &format_speed(state.speed));
        Ok(state.speed)
    }

    /// Returns the new heading.
    pub fn set_heading(
        &self,
        state: &mut FlightState,
        display: &mut dyn TelemetryDisplay,
        value: f64,
    ) -> Result<f64> {
        let value = require_finite(Channel::Heading, value)?;
        state.heading = require_finite(Channel::Heading, self.heading.heading_for(value))?;
        display.show(TelemetryField::Heading, &format_heading(state.heading));
        Ok(state.heading)
    }

    /// Absolute altitude, floored at zero. Returns the new altitude.
    pub fn set_altitude(
        &self,
        state: &mut FlightState,
        display: &mut dyn TelemetryDisplay,
        value: f64,
    ) -> Result<f64> {
        let value = require_finite(Channel::Altitude, value)?;
        state.altitude = value.max(0.0);
        display.show(TelemetryField::Altitude, &format_altitude(state.altitude));
        Ok(state.altitude)
    }

    /// Relative altitude change, floored at zero. Returns the new altitude.
    pub fn adjust_altitude(
        &self,
        state: &mut FlightState,
        display: &mut dyn TelemetryDisplay,
        delta: f64,
    ) -> Result<f64> {
        let delta = require_finite(Channel::Altitude, delta)?;
        self.set_altitude(state, display, state.altitude + delta)
    }

    /// Joystick: X deflection picks the heading, Y deflection climbs or descends.
    ///
    /// Both resulting values are computed and validated before either is
    /// written, so a rejected call leaves state and readouts untouched.
    pub fn handle_joystick(
        &self,
        state: &mut FlightState,
        display: &mut dyn TelemetryDisplay,
        x: f64,
        y: f64,
    ) -> Result<()> {
        let x = require_finite(Channel::Heading, x)?;
        let y = require_finite(Channel::Altitude, y)?;
        let heading = require_finite(Channel::Heading, HeadingMode::Joystick.heading_for(x))?;
        let altitude = require_finite(
            Channel::Altitude,
            state.altitude + y * self.joystick_altitude_rate,
        )?;

        state.heading = heading;
        state.altitude = altitude.max(0.0);
        display.show(TelemetryField::Heading, &format_heading(state.heading));
        display.show(TelemetryField::Altitude, &format_altitude(state.altitude));
        Ok(())
    }

    pub fn apply(
        &self,
        state: &mut FlightState,
        display: &mut dyn TelemetryDisplay,
        event: ControlEvent,
    ) -> Result<()> {
        match event {
            ControlEvent::Throttle(v) => self.set_throttle(state, display, v).map(drop),
            ControlEvent::Heading(v) => self.set_heading(state, display, v).map(drop),
            ControlEvent::Altitude(v) => self.set_altitude(state, display, v).map(drop),
            ControlEvent::AdjustAltitude(d) => self.adjust_altitude(state, display, d).map(drop),
            ControlEvent::Joystick { x, y } => self.handle_joystick(state, display, x, y),
        }
    }
}

impl Default for ControlInputAdapter {
    fn default() -> Self {
        Self::new(ThrottleMode::default(), HeadingMode::default(), 100.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
