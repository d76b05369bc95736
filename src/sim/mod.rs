pub mod integrator;
pub mod runner;
pub mod scheduler;

pub use integrator::{advance, elapsed_ms, integrate};
pub use runner::{Frame, LoopState, RenderLoop, TickOutcome};
pub use scheduler::{FrameScheduler, RealtimeScheduler, ScriptedFrames, VirtualScheduler};
