//! Input boundary event types.
//!
//! Positions are absolute canvas coordinates; scaling from device pixels is
//! the windowing boundary's job.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Primary-button pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Button pressed.
    Down { position: Point },
    /// Pointer moved, pressed or not.
    Moved { position: Point },
    /// Button released.
    Up { position: Point },
}

impl PointerEvent {
    /// The pointer position the event was reported at.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Moved { position }
            | PointerEvent::Up { position } => *position,
        }
    }
}

/// History commands from the keyboard boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditCommand {
    Undo,
    Redo,
}

/// Any event the editor dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Command(EditCommand),
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        InputEvent::Pointer(event)
    }
}

impl From<EditCommand> for InputEvent {
    fn from(command: EditCommand) -> Self {
        InputEvent::Command(command)
    }
}
