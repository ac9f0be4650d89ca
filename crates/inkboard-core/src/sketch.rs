//! Renderer collaborator seam.
//!
//! The engine never draws. Lines and rectangles carry an opaque
//! [`SketchHandle`] naming the drawable the renderer derived from their
//! geometry, and ask an injected [`Sketcher`] for a fresh one whenever the
//! geometry changes. Everything the handle points at lives on the renderer's
//! side of the seam.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Opaque token for a renderer-side drawable.
///
/// Handles are derived data: they are skipped by serialization (the default
/// is the detached handle) and carry no meaning the engine can inspect. The
/// renderer that minted a handle is the only party that can resolve it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SketchHandle(u64);

impl SketchHandle {
    /// Handle of an element whose drawable has not been generated yet.
    pub const DETACHED: SketchHandle = SketchHandle(0);

    /// Wrap a renderer-chosen token value.
    pub fn new(token: u64) -> Self {
        SketchHandle(token)
    }
}

/// Produces drawables from element geometry.
///
/// Implemented by the rendering backend and injected into the editor at
/// construction; the engine calls it at element creation and after every
/// geometry change, and stores only the returned handle. Corner pairs are
/// passed exactly as the element holds them, unnormalized included.
pub trait Sketcher {
    /// Derive a drawable for a line segment.
    fn sketch_line(&mut self, start: Point, end: Point) -> SketchHandle;

    /// Derive a drawable for a rectangle spanned by two opposite corners.
    fn sketch_rectangle(&mut self, start: Point, end: Point) -> SketchHandle;
}

/// Sketcher that only mints distinct handles.
///
/// Enough for headless sessions and tests, where nothing resolves the
/// handles but handle freshness still matters.
#[derive(Debug, Default)]
pub struct NullSketcher {
    next: u64,
}

impl NullSketcher {
    /// Create a sketcher with no handles minted yet.
    pub fn new() -> Self {
        Self::default()
    }

    fn mint(&mut self) -> SketchHandle {
        self.next += 1;
        SketchHandle(self.next)
    }
}

impl Sketcher for NullSketcher {
    fn sketch_line(&mut self, _start: Point, _end: Point) -> SketchHandle {
        self.mint()
    }

    fn sketch_rectangle(&mut self, _start: Point, _end: Point) -> SketchHandle {
        self.mint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sketcher_mints_distinct_handles() {
        let mut sketcher = NullSketcher::new();
        let a = sketcher.sketch_line(Point::ZERO, Point::new(10.0, 0.0));
        let b = sketcher.sketch_rectangle(Point::ZERO, Point::new(10.0, 10.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_minted_handles_are_never_detached() {
        let mut sketcher = NullSketcher::new();
        let handle = sketcher.sketch_line(Point::ZERO, Point::ZERO);
        assert_ne!(handle, SketchHandle::DETACHED);
    }

    #[test]
    fn test_default_handle_is_detached() {
        assert_eq!(SketchHandle::default(), SketchHandle::DETACHED);
    }
}
