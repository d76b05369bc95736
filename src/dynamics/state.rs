use nalgebra::{Vector2, Vector3};

// ---------------------------------------------------------------------------
// Reference frame
// ---------------------------------------------------------------------------

/// Full turn, degrees.
pub const FULL_TURN: f64 = 360.0;

/// Reference session start: Web Mercator meters (EPSG:3857).
pub const START_X: f64 = 779_232.0;
pub const START_Y: f64 = 5_780_430.0;
pub const START_ALTITUDE: f64 = 3_000.0; // m

// ---------------------------------------------------------------------------
// Flight state: position, altitude, heading, speed, frame baseline
// ---------------------------------------------------------------------------

/// Everything the render loop needs to advance and display the aircraft.
///
/// Frame: planar projected coordinates, x east, y north, meters.
/// Heading is degrees clockwise from north and may drift outside `[0, 360)`;
/// readers that care must normalize (see [`FlightState::heading_normalized`]).
#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub position: Vector2<f64>,   // m, projected
    pub altitude: f64,            // m, >= 0
    pub heading: f64,             // deg, clockwise from north
    pub speed: f64,               // m/s, >= 0
    pub last_tick: Option<f64>,   // ms, host clock; None before the first tick
}

impl FlightState {
    pub fn new(position: Vector2<f64>, altitude: f64, heading: f64, speed: f64) -> Self {
        Self {
            position,
            altitude: altitude.max(0.0),
            heading,
            speed: speed.max(0.0),
            last_tick: None,
        }
    }

    /// Position lifted to 3-D with altitude as z.
    pub fn position_at_altitude(&self) -> Vector3<f64> {
        Vector3::new(self.position.x, self.position.y, self.altitude)
    }

    /// Heading folded into `[0, 360)`.
    pub fn heading_normalized(&self) -> f64 {
        normalize_heading(self.heading)
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new(Vector2::new(START_X, START_Y), START_ALTITUDE, 0.0, 0.0)
    }
}

/// Fold any heading into `[0, 360)`.
pub fn normalize_heading(heading: f64) -> f64 {
    let h = heading.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= FULL_TURN { 0.0 } else { h }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_altitude_and_speed() {
        let s = FlightState::new(Vector2::zeros(), -50.0, 10.0, -3.0);
        assert_eq!(s.altitude, 0.0);
        assert_eq!(s.speed, 0.0);
        assert!(s.last_tick.is_none());
    }

    #[test]
    fn lifted_position_carries_altitude() {
        let s = FlightState::new(Vector2::new(1.0, 2.0), 300.0, 0.0, 0.0);
        assert_eq!(s.position_at_altitude(), Vector3::new(1.0, 2.0, 300.0));
    }

    #[test]
    fn heading_folds_into_range() {
        assert_eq!(normalize_heading(370.0), 10.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(720.0), 0.0);
        assert!(normalize_heading(-1e-15) < FULL_TURN);
    }

    #[test]
    fn default_is_reference_start() {
        let s = FlightState::default();
        assert_eq!(s.position, Vector2::new(START_X, START_Y));
        assert_eq!(s.altitude, START_ALTITUDE);
        assert_eq!(s.speed, 0.0);
    }
}
