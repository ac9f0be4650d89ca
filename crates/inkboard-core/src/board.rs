//! Board state: the ordered element collection.

use crate::element::{Element, ElementId, ElementKind};
use crate::sketch::Sketcher;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// All elements on the canvas, in creation order.
///
/// The vector index is the element id, so the collection is append-only;
/// edits amend an element in place and never reorder or remove. One `Board`
/// clone is exactly one undo history entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    elements: Vec<Element>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements on the board.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the board has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Get a mutable element by id.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// All elements in creation order, back to front for painting.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Append a zero-content element of `kind` at `at` and return its id.
    ///
    /// The id is the append position, which keeps the id-equals-index
    /// invariant in one place.
    pub fn spawn(&mut self, kind: ElementKind, at: Point, sketcher: &mut dyn Sketcher) -> ElementId {
        let id = self.elements.len();
        self.elements.push(Element::create(id, kind, at, at, sketcher));
        id
    }

    /// Replace the geometry of the element at `id` with a new corner pair.
    ///
    /// Lines and rectangles are rebuilt with a fresh drawable. Freehand
    /// strokes append `end` as one new sampled point and never touch earlier
    /// points. Text moves its anchor to `start`, content untouched. Unknown
    /// ids are ignored.
    pub fn update_span(
        &mut self,
        id: ElementId,
        start: Point,
        end: Point,
        sketcher: &mut dyn Sketcher,
    ) {
        let Some(element) = self.elements.get_mut(id) else {
            return;
        };
        match element {
            Element::Line(line) => line.set_span(start, end, sketcher),
            Element::Rectangle(rect) => rect.set_span(start, end, sketcher),
            Element::Freehand(stroke) => stroke.add_point(end),
            Element::Text(text) => text.position = start,
        }
    }

    /// Replace the content of the text element at `id`.
    ///
    /// Ignored for other kinds and unknown ids.
    pub fn set_text(&mut self, id: ElementId, content: String) {
        if let Some(Element::Text(text)) = self.elements.get_mut(id) {
            text.content = content;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::NullSketcher;

    #[test]
    fn test_spawn_assigns_sequential_ids() {
        let mut sketcher = NullSketcher::new();
        let mut board = Board::new();
        let a = board.spawn(ElementKind::Line, Point::ZERO, &mut sketcher);
        let b = board.spawn(ElementKind::Rectangle, Point::new(5.0, 5.0), &mut sketcher);
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(board.get(a).map(Element::id), Some(0));
        assert_eq!(board.get(b).map(Element::id), Some(1));
    }

    #[test]
    fn test_spawn_starts_zero_size() {
        let mut sketcher = NullSketcher::new();
        let mut board = Board::new();
        let at = Point::new(30.0, 40.0);
        let id = board.spawn(ElementKind::Rectangle, at, &mut sketcher);
        assert_eq!(board.get(id).and_then(Element::span), Some((at, at)));
    }

    #[test]
    fn test_update_span_rebuilds_rectangle() {
        let mut sketcher = NullSketcher::new();
        let mut board = Board::new();
        let id = board.spawn(ElementKind::Rectangle, Point::new(10.0, 10.0), &mut sketcher);
        board.update_span(id, Point::new(10.0, 10.0), Point::new(50.0, 60.0), &mut sketcher);
        assert_eq!(
            board.get(id).and_then(Element::span),
            Some((Point::new(10.0, 10.0), Point::new(50.0, 60.0)))
        );
    }

    #[test]
    fn test_update_span_appends_freehand_point() {
        let mut sketcher = NullSketcher::new();
        let mut board = Board::new();
        let id = board.spawn(ElementKind::Freehand, Point::ZERO, &mut sketcher);
        board.update_span(id, Point::ZERO, Point::new(1.0, 1.0), &mut sketcher);
        board.update_span(id, Point::ZERO, Point::new(2.0, 3.0), &mut sketcher);
        match board.get(id) {
            Some(Element::Freehand(stroke)) => {
                assert_eq!(
                    stroke.points,
                    vec![Point::ZERO, Point::new(1.0, 1.0), Point::new(2.0, 3.0)]
                );
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn test_update_span_moves_text_anchor() {
        let mut sketcher = NullSketcher::new();
        let mut board = Board::new();
        let id = board.spawn(ElementKind::Text, Point::new(5.0, 5.0), &mut sketcher);
        board.set_text(id, "note".to_string());
        board.update_span(id, Point::new(80.0, 90.0), Point::ZERO, &mut sketcher);
        match board.get(id) {
            Some(Element::Text(text)) => {
                assert_eq!(text.position, Point::new(80.0, 90.0));
                assert_eq!(text.content, "note");
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn test_set_text_ignores_non_text_elements() {
        let mut sketcher = NullSketcher::new();
        let mut board = Board::new();
        let id = board.spawn(ElementKind::Line, Point::ZERO, &mut sketcher);
        board.set_text(id, "ignored".to_string());
        assert!(matches!(board.get(id), Some(Element::Line(_))));
    }

    #[test]
    fn test_update_span_ignores_unknown_id() {
        let mut sketcher = NullSketcher::new();
        let mut board = Board::new();
        board.update_span(3, Point::ZERO, Point::ZERO, &mut sketcher);
        assert!(board.is_empty());
    }
}
