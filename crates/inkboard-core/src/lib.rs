//! Inkboard Core Library
//!
//! Element model, hit-testing, transforms, snapshot history and the
//! interaction state machine for the Inkboard whiteboard. The crate is
//! headless: rendering, windowing and text widgets live behind the seams in
//! [`sketch`] and [`input`].

pub mod board;
pub mod editor;
pub mod element;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod input;
pub mod sketch;
pub mod tool;
pub mod transform;

pub use board::Board;
pub use editor::{Editor, Effect, Phase};
pub use element::{Element, ElementId, ElementKind, UnknownElementKind};
pub use history::History;
pub use hit::{Cursor, Hit, HitPosition, cursor_for_position, hit_test};
pub use input::{EditCommand, InputEvent, PointerEvent};
pub use sketch::{NullSketcher, SketchHandle, Sketcher};
pub use tool::{Tool, UnknownTool};
pub use transform::{MoveGrip, resized_coordinates};
