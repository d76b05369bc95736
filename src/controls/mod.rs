pub mod adapter;
pub mod source;

pub use adapter::{parse_control, Channel, ControlInputAdapter, HeadingMode, ThrottleMode};
pub use source::{ControlEvent, ControlSource, SimulatedStick};
