pub mod format;
pub mod display;

pub use format::{format_altitude, format_dms, format_grouped, format_heading, format_speed};
pub use display::{Telemetry, TelemetryDisplay, TelemetryField};
