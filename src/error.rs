use thiserror::Error;

use crate::controls::Channel;

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("Invalid {channel} input: {reason}")]
    InvalidInput { channel: Channel, reason: String },

    #[error("Scene surfaces not loaded yet")]
    NotReady,

    #[error("Degenerate timestep: {0} ms")]
    DegenerateTimestep(f64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlightError {
    pub fn invalid(channel: Channel, reason: impl Into<String>) -> Self {
        FlightError::InvalidInput { channel, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, FlightError>;
