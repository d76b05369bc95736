use std::fmt;

use crate::dynamics::state::FlightState;
use crate::geo::Projection;
use super::format::{format_altitude, format_dms, format_heading, format_speed};

// ---------------------------------------------------------------------------
// Telemetry display boundary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelemetryField {
    Speed,
    Altitude,
    Heading,
    Longitude,
    Latitude,
}

impl TelemetryField {
    pub const ALL: [TelemetryField; 5] = [
        TelemetryField::Speed,
        TelemetryField::Altitude,
        TelemetryField::Heading,
        TelemetryField::Longitude,
        TelemetryField::Latitude,
    ];
}

impl fmt::Display for TelemetryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TelemetryField::Speed => "speed",
            TelemetryField::Altitude => "altitude",
            TelemetryField::Heading => "heading",
            TelemetryField::Longitude => "longitude",
            TelemetryField::Latitude => "latitude",
        };
        f.pad(name)
    }
}

/// Receives formatted telemetry. Fire-and-forget: implementations must not
/// block the caller, and there is nothing to report back.
pub trait TelemetryDisplay {
    fn show(&mut self, field: TelemetryField, text: &str);
}

impl<D: TelemetryDisplay + ?Sized> TelemetryDisplay for Box<D> {
    fn show(&mut self, field: TelemetryField, text: &str) {
        (**self).show(field, text)
    }
}

/// Discards everything. Handy when only the views matter.
impl TelemetryDisplay for () {
    fn show(&mut self, _field: TelemetryField, _text: &str) {}
}

// ---------------------------------------------------------------------------
// Formatted snapshot
// ---------------------------------------------------------------------------

/// One tick's readouts, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    pub speed: String,
    pub altitude: String,
    pub heading: String,
    pub longitude: String,
    pub latitude: String,
}

impl Telemetry {
    pub fn capture(state: &FlightState, projection: &dyn Projection) -> Self {
        let geo = projection.to_geographic(&state.position);
        Self {
            speed: format_speed(state.speed),
            altitude: format_altitude(state.altitude),
            heading: format_heading(state.heading),
            longitude: format_dms(geo.longitude, true),
            latitude: format_dms(geo.latitude, false),
        }
    }

    pub fn field(&self, field: TelemetryField) -> &str {
        match field {
            TelemetryField::Speed => &self.speed,
            TelemetryField::Altitude => &self.altitude,
            TelemetryField::Heading => &self.heading,
            TelemetryField::Longitude => &self.longitude,
            TelemetryField::Latitude => &self.latitude,
        }
    }

    pub fn publish(&self, display: &mut dyn TelemetryDisplay) {
        for field in TelemetryField::ALL {
            display.show(field, self.field(field));
        }
    }
}
