pub mod sync;
pub mod surface;

pub use sync::{synchronize, synchronize_with, PerspectiveView, TopView, ViewKind, ViewSet, ViewTilts, FORWARD_TILT, SIDE_TILT};
pub use surface::SceneSurface;
