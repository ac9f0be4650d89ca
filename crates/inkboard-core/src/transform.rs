//! Resize and move transforms.

use crate::element::Element;
use crate::hit::HitPosition;
use crate::sketch::Sketcher;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Compute the corner pair after dragging a resize handle to `pointer`.
///
/// The two coordinates adjacent to the grabbed handle follow the pointer;
/// the opposite corner stays fixed. `Start` and `End` are the line aliases
/// for `TopLeft` and `BottomRight`. The result keeps whatever inversion the
/// drag produced; the caller normalizes when the interaction completes.
/// Positions that name no handle return `None` and the caller skips the
/// update.
pub fn resized_coordinates(
    pointer: Point,
    handle: HitPosition,
    start: Point,
    end: Point,
) -> Option<(Point, Point)> {
    match handle {
        HitPosition::TopLeft | HitPosition::Start => Some((pointer, end)),
        HitPosition::TopRight => Some((
            Point::new(start.x, pointer.y),
            Point::new(pointer.x, end.y),
        )),
        HitPosition::BottomLeft => Some((
            Point::new(pointer.x, start.y),
            Point::new(end.x, pointer.y),
        )),
        HitPosition::BottomRight | HitPosition::End => Some((start, pointer)),
        HitPosition::Inside => None,
    }
}

/// Grab data for moving an element, captured once at pointer-down.
///
/// Every later pointer position is turned into absolute coordinates through
/// the captured offsets, so a long drag cannot accumulate drift the way
/// repeated relative deltas would.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MoveGrip {
    /// Pointer-to-anchor delta for elements a single point pins down.
    Anchor { offset: Vec2 },
    /// One pointer delta per sampled point of a freehand stroke.
    Stroke { offsets: Vec<Vec2> },
}

impl MoveGrip {
    /// Capture the grip for an element at the pointer-down position.
    pub fn grab(element: &Element, pointer: Point) -> MoveGrip {
        match element {
            Element::Line(line) => MoveGrip::Anchor {
                offset: pointer - line.start,
            },
            Element::Rectangle(rect) => MoveGrip::Anchor {
                offset: pointer - rect.start,
            },
            Element::Freehand(stroke) => MoveGrip::Stroke {
                offsets: stroke.points.iter().map(|p| pointer - *p).collect(),
            },
            Element::Text(text) => MoveGrip::Anchor {
                offset: pointer - text.position,
            },
        }
    }

    /// Relocate the element so it keeps its grab-time offset from `pointer`.
    ///
    /// A grip only ever re-applies to the element it was grabbed from, so the
    /// cross-kind arms do nothing. Spans keep their width and height exactly;
    /// strokes translate every point from its own offset.
    pub fn apply(&self, element: &mut Element, pointer: Point, sketcher: &mut dyn Sketcher) {
        match self {
            MoveGrip::Anchor { offset } => {
                let target = pointer - *offset;
                match element {
                    Element::Line(line) => {
                        let span = line.end - line.start;
                        line.set_span(target, target + span, sketcher);
                    }
                    Element::Rectangle(rect) => {
                        let span = rect.end - rect.start;
                        rect.set_span(target, target + span, sketcher);
                    }
                    Element::Text(text) => text.position = target,
                    Element::Freehand(_) => {}
                }
            }
            MoveGrip::Stroke { offsets } => {
                if let Element::Freehand(stroke) = element {
                    for (point, offset) in stroke.points.iter_mut().zip(offsets) {
                        *point = pointer - *offset;
                    }
                }
            }
        }
    }
}
