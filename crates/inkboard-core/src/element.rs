//! Whiteboard element model.

use crate::sketch::{SketchHandle, Sketcher};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Identifier of an element: its index in the owning board.
///
/// Ids are assigned by append position and never reused within a session, so
/// an id held across history moves keeps naming the same element for as long
/// as that element exists in the visible state.
pub type ElementId = usize;

/// Font size for text elements, in pixels.
pub const TEXT_FONT_SIZE: f64 = 24.0;

/// Average glyph width as a fraction of the font size.
const TEXT_CHAR_WIDTH_FACTOR: f64 = 0.55;
/// Line height as a fraction of the font size.
const TEXT_LINE_HEIGHT_FACTOR: f64 = 1.2;
/// Smallest hit-testable text width, so empty text stays grabbable.
const TEXT_MIN_WIDTH: f64 = 20.0;

/// Error for an element-kind tag outside the closed set.
///
/// Only the string boundary can produce this; inside the crate the kind is
/// always the closed [`ElementKind`] enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element kind: {0}")]
pub struct UnknownElementKind(pub String);

/// The closed set of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Straight line segment.
    Line,
    /// Axis-aligned rectangle.
    Rectangle,
    /// Freehand stroke (polyline of sampled pointer positions).
    Freehand,
    /// Text block.
    Text,
}

impl ElementKind {
    /// Get the kind tag as used at the tool/wire boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Line => "line",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Freehand => "freehand",
            ElementKind::Text => "text",
        }
    }
}

impl FromStr for ElementKind {
    type Err = UnknownElementKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ElementKind::Line),
            "rectangle" => Ok(ElementKind::Rectangle),
            "freehand" => Ok(ElementKind::Freehand),
            "text" => Ok(ElementKind::Text),
            other => Err(UnknownElementKind(other.to_string())),
        }
    }
}

/// A straight line segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ElementId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Renderer-side drawable for the current endpoints.
    #[serde(skip)]
    pub sketch: SketchHandle,
}

impl Line {
    /// Create a new line.
    pub fn new(id: ElementId, start: Point, end: Point, sketcher: &mut dyn Sketcher) -> Self {
        Self {
            id,
            start,
            end,
            sketch: sketcher.sketch_line(start, end),
        }
    }

    /// Replace both endpoints and regenerate the drawable.
    pub fn set_span(&mut self, start: Point, end: Point, sketcher: &mut dyn Sketcher) {
        self.start = start;
        self.end = end;
        self.sketch = sketcher.sketch_line(start, end);
    }
}

/// An axis-aligned rectangle.
///
/// `start` and `end` are two opposite corners. While an interaction is in
/// flight they sit wherever the pointer put them; normalization orders them
/// into min/max form when the interaction completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ElementId,
    /// First corner (the drag origin while drawing).
    pub start: Point,
    /// Opposite corner.
    pub end: Point,
    /// Renderer-side drawable for the current corners.
    #[serde(skip)]
    pub sketch: SketchHandle,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(id: ElementId, start: Point, end: Point, sketcher: &mut dyn Sketcher) -> Self {
        Self {
            id,
            start,
            end,
            sketch: sketcher.sketch_rectangle(start, end),
        }
    }

    /// Replace both corners and regenerate the drawable.
    pub fn set_span(&mut self, start: Point, end: Point, sketcher: &mut dyn Sketcher) {
        self.start = start;
        self.end = end;
        self.sketch = sketcher.sketch_rectangle(start, end);
    }
}

/// A freehand stroke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Freehand {
    pub(crate) id: ElementId,
    /// Sampled pointer positions, in draw order. Never empty.
    pub points: Vec<Point>,
}

impl Freehand {
    /// Create a new stroke starting at a single point.
    pub fn new(id: ElementId, at: Point) -> Self {
        Self {
            id,
            points: vec![at],
        }
    }

    /// Append a sampled point to the stroke.
    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }
}

/// A text block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ElementId,
    /// Anchor point (top-left corner of the text box).
    pub position: Point,
    /// The text content.
    pub content: String,
}

impl Text {
    /// Create a new empty text block.
    pub fn new(id: ElementId, position: Point) -> Self {
        Self {
            id,
            position,
            content: String::new(),
        }
    }

    /// Approximate width based on the widest line and font size.
    fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let width = max_line_len as f64 * TEXT_FONT_SIZE * TEXT_CHAR_WIDTH_FACTOR;
        width.max(TEXT_MIN_WIDTH)
    }

    /// Approximate height based on line count and font size.
    fn approximate_height(&self) -> f64 {
        let line_count = self.content.lines().count().max(1);
        line_count as f64 * TEXT_FONT_SIZE * TEXT_LINE_HEIGHT_FACTOR
    }
}

/// Order two rectangle corners into (min, max) form.
pub fn ordered_rect_corners(a: Point, b: Point) -> (Point, Point) {
    (
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Point::new(a.x.max(b.x), a.y.max(b.y)),
    )
}

/// Order line endpoints left to right, top to bottom when vertical.
pub fn ordered_line_endpoints(a: Point, b: Point) -> (Point, Point) {
    if a.x < b.x || (a.x == b.x && a.y < b.y) {
        (a, b)
    } else {
        (b, a)
    }
}

/// One drawable element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Element {
    Line(Line),
    Rectangle(Rectangle),
    Freehand(Freehand),
    Text(Text),
}

impl Element {
    /// Create a zero-content element of the given kind.
    ///
    /// Lines and rectangles span `start` to `end` (equal while the element is
    /// being born at pointer-down). Freehand strokes start with the single
    /// point `start`; text starts empty at anchor `start`. `end` is unused
    /// for both.
    pub fn create(
        id: ElementId,
        kind: ElementKind,
        start: Point,
        end: Point,
        sketcher: &mut dyn Sketcher,
    ) -> Element {
        match kind {
            ElementKind::Line => Element::Line(Line::new(id, start, end, sketcher)),
            ElementKind::Rectangle => Element::Rectangle(Rectangle::new(id, start, end, sketcher)),
            ElementKind::Freehand => Element::Freehand(Freehand::new(id, start)),
            ElementKind::Text => Element::Text(Text::new(id, start)),
        }
    }

    /// Get the element id.
    pub fn id(&self) -> ElementId {
        match self {
            Element::Line(line) => line.id,
            Element::Rectangle(rect) => rect.id,
            Element::Freehand(stroke) => stroke.id,
            Element::Text(text) => text.id,
        }
    }

    /// Get the element kind.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Line(_) => ElementKind::Line,
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Freehand(_) => ElementKind::Freehand,
            Element::Text(_) => ElementKind::Text,
        }
    }

    /// Get the corner pair of a line or rectangle, as stored (possibly
    /// unnormalized). `None` for kinds without a two-corner span.
    pub fn span(&self) -> Option<(Point, Point)> {
        match self {
            Element::Line(line) => Some((line.start, line.end)),
            Element::Rectangle(rect) => Some((rect.start, rect.end)),
            Element::Freehand(_) | Element::Text(_) => None,
        }
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            Element::Line(line) => {
                let (min, max) = ordered_rect_corners(line.start, line.end);
                Rect::new(min.x, min.y, max.x, max.y)
            }
            Element::Rectangle(rect) => {
                let (min, max) = ordered_rect_corners(rect.start, rect.end);
                Rect::new(min.x, min.y, max.x, max.y)
            }
            Element::Freehand(stroke) => {
                let (min_x, max_x) = stroke.points.iter().fold((f64::MAX, f64::MIN), |(mn, mx), p| {
                    (mn.min(p.x), mx.max(p.x))
                });
                let (min_y, max_y) = stroke.points.iter().fold((f64::MAX, f64::MIN), |(mn, mx), p| {
                    (mn.min(p.y), mx.max(p.y))
                });
                Rect::new(min_x, min_y, max_x, max_y)
            }
            Element::Text(text) => Rect::new(
                text.position.x,
                text.position.y,
                text.position.x + text.approximate_width(),
                text.position.y + text.approximate_height(),
            ),
        }
    }

    /// Put the coordinate pair into canonical order.
    ///
    /// Rectangle corners become (min, min)-(max, max); line endpoints are
    /// ordered left to right, top to bottom on a vertical tie. Freehand and
    /// text are already canonical. Re-sketches only when the order actually
    /// changed, so normalizing twice is the same as normalizing once,
    /// drawable handle included.
    pub fn normalize(&mut self, sketcher: &mut dyn Sketcher) {
        match self {
            Element::Line(line) => {
                let (start, end) = ordered_line_endpoints(line.start, line.end);
                if start != line.start || end != line.end {
                    line.set_span(start, end, sketcher);
                }
            }
            Element::Rectangle(rect) => {
                let (start, end) = ordered_rect_corners(rect.start, rect.end);
                if start != rect.start || end != rect.end {
                    rect.set_span(start, end, sketcher);
                }
            }
            Element::Freehand(_) | Element::Text(_) => {}
        }
    }
}
