use std::path::Path;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::controls::{ControlInputAdapter, HeadingMode, ThrottleMode};
use crate::dynamics::state::{FlightState, START_ALTITUDE, START_X, START_Y};
use crate::error::{FlightError, Result};
use crate::views::sync::ViewTilts;

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

/// Initial flight state, control scaling and camera tilts for one session.
///
/// Every field has a default, so a JSON file only needs the overrides:
///
/// ```json
/// { "speed": 250.0, "throttle": { "mode": "direct" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub start_position: [f64; 2], // m, projected
    pub altitude: f64,            // m
    pub heading: f64,             // deg
    pub speed: f64,               // m/s
    pub throttle: ThrottleMode,
    pub heading_mode: HeadingMode,
    pub joystick_altitude_rate: f64, // m per unit deflection
    pub tilts: ViewTilts,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_position: [START_X, START_Y],
            altitude: START_ALTITUDE,
            heading: 0.0,
            speed: 0.0,
            throttle: ThrottleMode::default(),
            heading_mode: HeadingMode::default(),
            joystick_altitude_rate: 100.0,
            tilts: ViewTilts::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("start_position.x", self.start_position[0]),
            ("start_position.y", self.start_position[1]),
            ("altitude", self.altitude),
            ("heading", self.heading),
            ("speed", self.speed),
            ("joystick_altitude_rate", self.joystick_altitude_rate),
            ("tilts.forward", self.tilts.forward),
            ("tilts.side", self.tilts.side),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FlightError::Config(format!("{name} must be finite")));
        }
        if self.altitude < 0.0 {
            return Err(FlightError::Config("altitude must be >= 0".into()));
        }
        if self.speed < 0.0 {
            return Err(FlightError::Config("speed must be >= 0".into()));
        }
        if self.joystick_altitude_rate < 0.0 {
            return Err(FlightError::Config("joystick_altitude_rate must be >= 0".into()));
        }
        if let ThrottleMode::Normalized { full_scale } = self.throttle {
            if !(full_scale.is_finite() && full_scale > 0.0) {
                return Err(FlightError::Config("throttle full_scale must be > 0".into()));
            }
        }
        Ok(())
    }

    pub fn initial_state(&self) -> FlightState {
        let [x, y] = self.start_position;
        FlightState::new(Vector2::new(x, y), self.altitude, self.heading, self.speed)
    }

    pub fn adapter(&self) -> ControlInputAdapter {
        ControlInputAdapter::new(self.throttle, self.heading_mode, self.joystick_altitude_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(SessionConfig::from_json_str("{}").unwrap(), SessionConfig::default());
    }

    #[test]
    fn overrides_apply() {
        let json = r#"{
            "start_position": [0.0, 0.0],
            "speed": 250.0,
            "throttle": { "mode": "direct" },
            "heading_mode": "absolute",
            "tilts": { "forward": 75.0, "side": 70.0 }
        }"#;
        let c = SessionConfig::from_json_str(json).unwrap();
        assert_eq!(c.throttle, ThrottleMode::Direct);
        assert_eq!(c.heading_mode, HeadingMode::Absolute);
        assert_eq!(c.tilts.side, 70.0);

        let s = c.initial_state();
        assert_eq!(s.position, Vector2::zeros());
        assert_eq!(s.speed, 250.0);
        assert_eq!(s.altitude, START_ALTITUDE);
    }

    #[test]
    fn normalized_throttle_round_trips() {
        let c = SessionConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"mode\":\"normalized\""));
        assert_eq!(SessionConfig::from_json_str(&json).unwrap(), c);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SessionConfig::from_json_str(r#"{"altitude": -5.0}"#),
            Err(FlightError::Config(_))
        ));
        assert!(SessionConfig::from_json_str(r#"{"throttle": {"mode": "normalized", "full_scale": 0.0}}"#).is_err());
        assert!(matches!(SessionConfig::from_json_str("{not json"), Err(FlightError::Json(_))));
        assert!(SessionConfig::from_json_str(r#"{"joystick_altitude_rate": -1.0}"#).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            SessionConfig::load("/nonexistent/flyover.json"),
            Err(FlightError::Io(_))
        ));
    }
}
