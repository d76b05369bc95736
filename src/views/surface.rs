use super::sync::ViewSet;

/// Map/scene rendering boundary.
///
/// Implement this to drive a real map and three 3-D scenes from the
/// render loop. Nothing is pushed until [`SceneSurface::is_loaded`] says yes.
pub trait SceneSurface {
    /// Whether the underlying map and scenes can accept view updates.
    fn is_loaded(&self) -> bool;

    /// Push one tick's worth of views. Must not block.
    fn apply(&mut self, views: &ViewSet);

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "scene"
    }
}

impl<S: SceneSurface + ?Sized> SceneSurface for Box<S> {
    fn is_loaded(&self) -> bool {
        (**self).is_loaded()
    }

    fn apply(&mut self, views: &ViewSet) {
        (**self).apply(views)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
