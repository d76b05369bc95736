pub mod projection;

pub use projection::{GeoPoint, Projection, WebMercator};
