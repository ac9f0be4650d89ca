//! Interaction state machine.
//!
//! Turns boundary events into board edits and history writes. Every mutating
//! interaction follows the same shape: one `record` at pointer-down, an
//! `amend` per pointer-move, and a final `amend` (normalizing where needed)
//! at pointer-up, so a finished interaction is exactly one undo step.

use crate::board::Board;
use crate::element::{Element, ElementId, ElementKind};
use crate::history::History;
use crate::hit::{Cursor, HitPosition, cursor_for_position, hit_test};
use crate::input::{EditCommand, InputEvent, PointerEvent};
use crate::sketch::{NullSketcher, Sketcher};
use crate::tool::Tool;
use crate::transform::{MoveGrip, resized_coordinates};
use kurbo::Point;

/// What the editor is in the middle of.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// No interaction in flight.
    Idle,
    /// Dragging out a new element.
    Drawing { id: ElementId },
    /// Dragging an element by its body.
    Moving { id: ElementId, grip: MoveGrip },
    /// Dragging a resize handle.
    Resizing { id: ElementId, handle: HitPosition },
    /// A text element is open in the external text widget.
    Writing { id: ElementId },
}

/// Side effects the boundary should carry out after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Visible state changed; repaint from the board's element order.
    Repaint,
    /// Show this pointer cursor.
    Cursor(Cursor),
    /// Hand keyboard focus to the text widget.
    FocusText,
}

/// The whiteboard editor: board history, active tool and interaction state.
///
/// The renderer collaborator is injected at construction and consulted for
/// drawables; the editor itself never draws. The board under the history
/// cursor is the only authoritative state.
pub struct Editor {
    history: History<Board>,
    phase: Phase,
    tool: Tool,
    sketcher: Box<dyn Sketcher>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Box::new(NullSketcher::new()))
    }
}

impl Editor {
    /// Create an editor over an empty board.
    pub fn new(sketcher: Box<dyn Sketcher>) -> Self {
        Self {
            history: History::new(Board::new()),
            phase: Phase::Idle,
            tool: Tool::default(),
            sketcher,
        }
    }

    /// The visible board.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// The interaction in flight.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Pick the active tool. Takes effect at the next pointer-down.
    pub fn set_tool(&mut self, tool: Tool) {
        log::debug!("tool set to {}", tool.as_str());
        self.tool = tool;
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Cursor to show while hovering at `position`.
    ///
    /// Only the selection tool advertises affordances; drawing tools keep the
    /// plain cursor.
    pub fn cursor_hint(&self, position: Point) -> Cursor {
        if self.tool != Tool::Selection {
            return Cursor::Default;
        }
        hit_test(position, self.board())
            .map(|hit| cursor_for_position(hit.position))
            .unwrap_or_default()
    }

    /// Process one boundary event and return the effects it caused.
    pub fn dispatch(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::Pointer(PointerEvent::Down { position }) => self.handle_press(position),
            InputEvent::Pointer(PointerEvent::Moved { position }) => self.handle_move(position),
            InputEvent::Pointer(PointerEvent::Up { position }) => self.handle_release(position),
            InputEvent::Command(command) => self.handle_command(command),
        }
    }

    /// Land externally entered text into the element being written.
    ///
    /// Ends the writing interaction; the content replaces whatever the
    /// element held, amending the entry recorded when writing began. A no-op
    /// unless a text element is open.
    pub fn commit_text(&mut self, content: String) -> Vec<Effect> {
        let id = match self.phase {
            Phase::Writing { id } => id,
            _ => return Vec::new(),
        };
        let mut board = self.board().clone();
        board.set_text(id, content);
        self.history.amend(board);
        log::debug!("committed text element {id}");
        self.phase = Phase::Idle;
        vec![Effect::Repaint]
    }

    fn handle_press(&mut self, position: Point) -> Vec<Effect> {
        if matches!(self.phase, Phase::Writing { .. }) {
            // The text widget owns input until commit_text lands the content.
            return Vec::new();
        }
        match self.tool.element_kind() {
            None => self.press_select(position),
            Some(ElementKind::Text) => self.press_write(position),
            Some(kind) => self.press_draw(kind, position),
        }
    }

    fn press_select(&mut self, position: Point) -> Vec<Effect> {
        let Some(hit) = hit_test(position, self.board()) else {
            return Vec::new();
        };
        // Baseline entry for the interaction: every later amend lands on this
        // snapshot, so the whole drag undoes as one step.
        let baseline = self.board().clone();
        match hit.position {
            HitPosition::Inside => {
                let Some(element) = baseline.get(hit.id) else {
                    return Vec::new();
                };
                let grip = MoveGrip::grab(element, position);
                self.history.record(baseline);
                log::debug!("moving element {}", hit.id);
                self.phase = Phase::Moving { id: hit.id, grip };
            }
            handle => {
                self.history.record(baseline);
                log::debug!("resizing element {} by {handle:?}", hit.id);
                self.phase = Phase::Resizing { id: hit.id, handle };
            }
        }
        Vec::new()
    }

    fn press_draw(&mut self, kind: ElementKind, position: Point) -> Vec<Effect> {
        let mut board = self.board().clone();
        let id = board.spawn(kind, position, self.sketcher.as_mut());
        self.history.record(board);
        log::debug!("drawing {} element {id}", kind.as_str());
        self.phase = Phase::Drawing { id };
        vec![Effect::Repaint]
    }

    fn press_write(&mut self, position: Point) -> Vec<Effect> {
        let mut board = self.board().clone();
        let id = board.spawn(ElementKind::Text, position, self.sketcher.as_mut());
        self.history.record(board);
        log::debug!("writing text element {id}");
        self.phase = Phase::Writing { id };
        vec![Effect::Repaint, Effect::FocusText]
    }

    fn handle_move(&mut self, position: Point) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.tool == Tool::Selection {
            effects.push(Effect::Cursor(self.cursor_hint(position)));
        }
        match self.phase.clone() {
            Phase::Idle | Phase::Writing { .. } => {}
            Phase::Drawing { id } => {
                // Lines and rectangles keep their origin corner and follow
                // the pointer; freehand ignores the pair and appends the
                // sample.
                let mut board = self.board().clone();
                let start = board
                    .get(id)
                    .and_then(Element::span)
                    .map_or(position, |(start, _)| start);
                board.update_span(id, start, position, self.sketcher.as_mut());
                self.history.amend(board);
                log::trace!("draw {id} to ({:.1}, {:.1})", position.x, position.y);
                effects.push(Effect::Repaint);
            }
            Phase::Moving { id, grip } => {
                let mut board = self.board().clone();
                if let Some(element) = board.get_mut(id) {
                    grip.apply(element, position, self.sketcher.as_mut());
                    self.history.amend(board);
                    log::trace!("move {id} to ({:.1}, {:.1})", position.x, position.y);
                    effects.push(Effect::Repaint);
                }
            }
            Phase::Resizing { id, handle } => {
                let mut board = self.board().clone();
                let span = board.get(id).and_then(Element::span);
                let resized =
                    span.and_then(|(start, end)| resized_coordinates(position, handle, start, end));
                if let Some((start, end)) = resized {
                    board.update_span(id, start, end, self.sketcher.as_mut());
                    self.history.amend(board);
                    log::trace!("resize {id} to ({:.1}, {:.1})", position.x, position.y);
                    effects.push(Effect::Repaint);
                }
            }
        }
        effects
    }

    fn handle_release(&mut self, _position: Point) -> Vec<Effect> {
        match self.phase.clone() {
            Phase::Idle | Phase::Writing { .. } => Vec::new(),
            Phase::Moving { id, .. } => {
                log::debug!("moved element {id}");
                self.phase = Phase::Idle;
                Vec::new()
            }
            Phase::Drawing { id } | Phase::Resizing { id, .. } => {
                let repaint = self.finalize_span(id);
                log::debug!("completed element {id}");
                self.phase = Phase::Idle;
                if repaint {
                    vec![Effect::Repaint]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Normalize a finished line or rectangle into the current entry.
    fn finalize_span(&mut self, id: ElementId) -> bool {
        let mut board = self.board().clone();
        let Some(element) = board.get_mut(id) else {
            return false;
        };
        match element {
            Element::Line(_) | Element::Rectangle(_) => {
                element.normalize(self.sketcher.as_mut());
                self.history.amend(board);
                true
            }
            Element::Freehand(_) | Element::Text(_) => false,
        }
    }

    fn handle_command(&mut self, command: EditCommand) -> Vec<Effect> {
        if self.phase != Phase::Idle {
            // An in-flight interaction holds an element id into the current
            // entry; cursor moves wait until it completes. Writing keeps the
            // widget's native undo.
            log::debug!("history command ignored mid-interaction");
            return Vec::new();
        }
        let moved = match command {
            EditCommand::Undo => self.history.undo(),
            EditCommand::Redo => self.history.redo(),
        };
        if moved {
            log::debug!("history moved to entry {}", self.history.position());
            vec![Effect::Repaint]
        } else {
            Vec::new()
        }
    }
}
