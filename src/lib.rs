pub mod config;
pub mod controls;
pub mod dynamics;
pub mod error;
pub mod geo;
pub mod session;
pub mod sim;
pub mod telemetry;
pub mod views;

pub use config::SessionConfig;
pub use dynamics::FlightState;
pub use error::{FlightError, Result};
pub use session::{FlightSession, RunStats};
pub use sim::{integrate, RenderLoop, TickOutcome};
pub use views::{synchronize, ViewSet};
