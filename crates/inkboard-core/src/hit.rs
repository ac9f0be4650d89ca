//! Hit-testing and cursor affordances.

use crate::board::Board;
use crate::element::{Element, ElementId};
use crate::geometry::{near_point, on_segment};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Maximum off-segment offset that still hits a line or rectangle edge,
/// in canvas pixels.
pub const LINE_HIT_OFFSET: f64 = 1.0;
/// Maximum off-segment offset that still hits a freehand stroke segment.
/// Coarser than straight segments because sampled points sit close together.
pub const FREEHAND_HIT_OFFSET: f64 = 2.0;

/// Which part of an element a point landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitPosition {
    /// First endpoint of a line.
    Start,
    /// Second endpoint of a line.
    End,
    /// Corner handles of a rectangle.
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// The body: on the segment, within the box, on the stroke.
    Inside,
}

/// A hit-test match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Id of the hit element.
    pub id: ElementId,
    /// Which part was hit.
    pub position: HitPosition,
}

/// Pointer cursor the boundary should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cursor {
    /// Plain arrow.
    #[default]
    Default,
    /// Grab-and-drag affordance.
    Move,
    /// Diagonal resize, top-left to bottom-right.
    NwseResize,
    /// Diagonal resize, top-right to bottom-left.
    NeswResize,
}

impl Cursor {
    /// Get the CSS cursor name, as used by the windowing boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Move => "move",
            Cursor::NwseResize => "nwse-resize",
            Cursor::NeswResize => "nesw-resize",
        }
    }
}

/// Find the element under a point.
///
/// Elements are walked front to back (reverse creation order), so the most
/// recently drawn element wins where overlaps stack. Vertex and corner
/// checks run before body checks within each element, so a point that is
/// both near a handle and inside the body reports the handle.
pub fn hit_test(p: Point, board: &Board) -> Option<Hit> {
    board.elements().iter().rev().find_map(|element| {
        position_within(p, element).map(|position| Hit {
            id: element.id(),
            position,
        })
    })
}

/// Map a hit position to the cursor affordance it implies.
pub fn cursor_for_position(position: HitPosition) -> Cursor {
    match position {
        HitPosition::Start
        | HitPosition::End
        | HitPosition::TopLeft
        | HitPosition::BottomRight => Cursor::NwseResize,
        HitPosition::TopRight | HitPosition::BottomLeft => Cursor::NeswResize,
        HitPosition::Inside => Cursor::Move,
    }
}

fn position_within(p: Point, element: &Element) -> Option<HitPosition> {
    match element {
        Element::Line(line) => {
            if near_point(p, line.start) {
                Some(HitPosition::Start)
            } else if near_point(p, line.end) {
                Some(HitPosition::End)
            } else if on_segment(line.start, line.end, p, LINE_HIT_OFFSET) {
                Some(HitPosition::Inside)
            } else {
                None
            }
        }
        Element::Rectangle(_) => {
            let bounds = element.bounds();
            let top_left = Point::new(bounds.x0, bounds.y0);
            let top_right = Point::new(bounds.x1, bounds.y0);
            let bottom_left = Point::new(bounds.x0, bounds.y1);
            let bottom_right = Point::new(bounds.x1, bounds.y1);
            if near_point(p, top_left) {
                Some(HitPosition::TopLeft)
            } else if near_point(p, top_right) {
                Some(HitPosition::TopRight)
            } else if near_point(p, bottom_left) {
                Some(HitPosition::BottomLeft)
            } else if near_point(p, bottom_right) {
                Some(HitPosition::BottomRight)
            } else if contains_inclusive(bounds, p) {
                Some(HitPosition::Inside)
            } else {
                None
            }
        }
        Element::Freehand(stroke) => stroke
            .points
            .windows(2)
            .any(|pair| on_segment(pair[0], pair[1], p, FREEHAND_HIT_OFFSET))
            .then_some(HitPosition::Inside),
        Element::Text(_) => contains_inclusive(element.bounds(), p).then_some(HitPosition::Inside),
    }
}

/// Containment with all four edges included, unlike `Rect::contains`.
fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}
