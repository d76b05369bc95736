use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::dynamics::state::FlightState;

// ---------------------------------------------------------------------------
// View parameters
// ---------------------------------------------------------------------------

pub const FORWARD_TILT: f64 = 85.0; // deg from nadir
pub const SIDE_TILT: f64 = 80.0;    // deg from nadir

/// Top-down map: centered on the aircraft, rotated so travel points up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopView {
    pub center: Vector3<f64>, // m, z = altitude
    pub rotation: f64,        // deg, always -heading
}

/// One perspective camera riding on the aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveView {
    pub heading: f64,           // deg, raw (not normalized)
    pub position: Vector3<f64>, // m, z = altitude
    pub tilt: f64,              // deg from nadir
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Forward,
    Left,
    Right,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Forward, ViewKind::Left, ViewKind::Right];

    /// Offset from aircraft heading, degrees.
    pub fn heading_offset(self) -> f64 {
        match self {
            ViewKind::Forward => 0.0,
            ViewKind::Left => -90.0,
            ViewKind::Right => 90.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Forward => "Forward",
            ViewKind::Left => "Left",
            ViewKind::Right => "Right",
        }
    }
}

/// Camera pitch for the forward and side views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTilts {
    pub forward: f64,
    pub side: f64,
}

impl ViewTilts {
    pub fn for_kind(&self, kind: ViewKind) -> f64 {
        match kind {
            ViewKind::Forward => self.forward,
            ViewKind::Left | ViewKind::Right => self.side,
        }
    }
}

impl Default for ViewTilts {
    fn default() -> Self {
        Self { forward: FORWARD_TILT, side: SIDE_TILT }
    }
}

/// All four views derived from one state snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSet {
    pub top: TopView,
    pub forward: PerspectiveView,
    pub left: PerspectiveView,
    pub right: PerspectiveView,
}

impl ViewSet {
    pub fn perspective(&self, kind: ViewKind) -> &PerspectiveView {
        match kind {
            ViewKind::Forward => &self.forward,
            ViewKind::Left => &self.left,
            ViewKind::Right => &self.right,
        }
    }
}

// ---------------------------------------------------------------------------
// Synchronization
// ---------------------------------------------------------------------------

/// Derive the four views with the standard tilts.
pub fn synchronize(state: &FlightState) -> ViewSet {
    synchronize_with(state, &ViewTilts::default())
}

/// Derive the four views from a single borrow of `state`, so no view can see
/// a different position or heading than the others.
pub fn synchronize_with(state: &FlightState, tilts: &ViewTilts) -> ViewSet {
    let position = state.position_at_altitude();
    let camera = |kind: ViewKind| PerspectiveView {
        heading: state.heading + kind.heading_offset(),
        position,
        tilt: tilts.for_kind(kind),
    };

    ViewSet {
        top: TopView { center: position, rotation: -state.heading },
        forward: camera(ViewKind::Forward),
        left: camera(ViewKind::Left),
        right: camera(ViewKind::Right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn offsets_follow_heading() {
        let s = FlightState::new(Vector2::new(5.0, 6.0), 1200.0, 30.0, 80.0);
        let v = synchronize(&s);
        assert_eq!(v.forward.heading, 30.0);
        assert_eq!(v.left.heading, -60.0);
        assert_eq!(v.right.heading, 120.0);
        assert_eq!(v.top.rotation, -30.0);
    }

    #[test]
    fn all_views_share_position() {
        let s = FlightState::new(Vector2::new(-7.0, 11.0), 450.0, 200.0, 0.0);
        let v = synchronize(&s);
        for kind in ViewKind::ALL {
            assert_eq!(v.perspective(kind).position, v.top.center);
        }
        assert_eq!(v.top.center, Vector3::new(-7.0, 11.0, 450.0));
    }

    #[test]
    fn raw_offsets_are_not_normalized() {
        let s = FlightState::new(Vector2::zeros(), 0.0, 350.0, 0.0);
        let v = synchronize(&s);
        assert_eq!(v.right.heading, 440.0);
        assert_eq!(v.left.heading, 260.0);
    }

    #[test]
    fn standard_tilts() {
        let v = synchronize(&FlightState::default());
        assert_eq!(v.forward.tilt, 85.0);
        assert_eq!(v.left.tilt, 80.0);
        assert_eq!(v.right.tilt, 80.0);
    }

    #[test]
    fn custom_tilts_apply_per_kind() {
        let tilts = ViewTilts { forward: 70.0, side: 60.0 };
        let v = synchronize_with(&FlightState::default(), &tilts);
        assert_eq!(v.forward.tilt, 70.0);
        assert_eq!(v.left.tilt, 60.0);
        assert_eq!(v.right.tilt, 60.0);
    }
}
