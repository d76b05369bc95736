use nalgebra::{Rotation2, Vector2};

use crate::dynamics::state::FlightState;
use crate::error::{FlightError, Result};

// ---------------------------------------------------------------------------
// Constant-heading, constant-speed dead reckoning
// ---------------------------------------------------------------------------

/// Position after `elapsed_ms` of straight flight at the state's heading and speed.
///
/// The displacement starts along the base axis `(0, d)` and is rotated by
/// `-heading`, so increasing heading swings the track clockwise on the map,
/// matching the top view's `rotation = -heading`. Altitude is not touched.
pub fn integrate(state: &FlightState, elapsed_ms: f64) -> Vector2<f64> {
    let d = state.speed * elapsed_ms / 1000.0;
    let displacement = Rotation2::new(-state.heading.to_radians()) * Vector2::new(0.0, d);
    state.position + displacement
}

/// Integrate and store the new position. The only writer of `position`.
pub fn advance(state: &mut FlightState, elapsed_ms: f64) {
    state.position = integrate(state, elapsed_ms);
}

/// Elapsed host time between two frame timestamps.
///
/// A clock that steps backwards or reports NaN/inf yields
/// [`FlightError::DegenerateTimestep`]; callers clamp that to zero.
pub fn elapsed_ms(last: f64, now: f64) -> Result<f64> {
    let dt = now - last;
    if dt.is_finite() && dt >= 0.0 {
        Ok(dt)
    } else {
        Err(FlightError::DegenerateTimestep(dt))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn at_origin(heading: f64, speed: f64) -> FlightState {
        FlightState::new(Vector2::zeros(), 1000.0, heading, speed)
    }

    #[test]
    fn zero_elapsed_is_identity() {
        let s = FlightState::new(Vector2::new(12.5, -4.0), 0.0, 37.0, 250.0);
        assert_eq!(integrate(&s, 0.0), s.position);
    }

    #[test]
    fn heading_zero_flies_north() {
        let p = integrate(&at_origin(0.0, 100.0), 1000.0);
        assert_abs_diff_eq!(p, Vector2::new(0.0, 100.0), epsilon = 1e-9);
    }

    #[test]
    fn heading_ninety_flies_east() {
        let p = integrate(&at_origin(90.0, 100.0), 1000.0);
        assert_abs_diff_eq!(p, Vector2::new(100.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn distance_independent_of_heading() {
        for heading in [0.0, 17.0, 90.0, 181.5, 270.0, -45.0, 725.0] {
            let p = integrate(&at_origin(heading, 240.0), 1500.0);
            assert_abs_diff_eq!(p.norm(), 360.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn heading_change_only_changes_direction() {
        let a = integrate(&at_origin(30.0, 50.0), 400.0);
        let b = integrate(&at_origin(120.0, 50.0), 400.0);
        assert_abs_diff_eq!(a.norm(), b.norm(), epsilon = 1e-12);
        assert!((a - b).norm() > 1.0);
    }

    #[test]
    fn advance_leaves_altitude_alone() {
        let mut s = at_origin(45.0, 10.0);
        advance(&mut s, 2000.0);
        assert_eq!(s.altitude, 1000.0);
        assert_abs_diff_eq!(s.position.norm(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn backwards_clock_is_degenerate() {
        assert!(matches!(elapsed_ms(100.0, 50.0), Err(FlightError::DegenerateTimestep(_))));
        assert!(elapsed_ms(0.0, f64::NAN).is_err());
        assert!(elapsed_ms(0.0, f64::INFINITY).is_err());
        assert_eq!(elapsed_ms(16.0, 32.5).unwrap(), 16.5);
    }
}
