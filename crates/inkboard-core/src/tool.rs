//! Tool selection vocabulary.

use crate::element::ElementKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error for a tool id outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool: {0}")]
pub struct UnknownTool(pub String);

/// The active tool, as picked in the toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Select, move and resize existing elements.
    #[default]
    Selection,
    Line,
    Rectangle,
    Pencil,
    Text,
}

impl Tool {
    /// Get the tool id as used at the toolbar boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Selection => "selection",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Pencil => "pencil",
            Tool::Text => "text",
        }
    }

    /// The element kind this tool creates, `None` for the selection tool.
    pub fn element_kind(&self) -> Option<ElementKind> {
        match self {
            Tool::Selection => None,
            Tool::Line => Some(ElementKind::Line),
            Tool::Rectangle => Some(ElementKind::Rectangle),
            Tool::Pencil => Some(ElementKind::Freehand),
            Tool::Text => Some(ElementKind::Text),
        }
    }

    /// All tools, in toolbar order.
    pub fn all() -> &'static [Tool] {
        &[
            Tool::Selection,
            Tool::Line,
            Tool::Rectangle,
            Tool::Pencil,
            Tool::Text,
        ]
    }
}

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selection" => Ok(Tool::Selection),
            "line" => Ok(Tool::Line),
            "rectangle" => Ok(Tool::Rectangle),
            "pencil" => Ok(Tool::Pencil),
            "text" => Ok(Tool::Text),
            other => Err(UnknownTool(other.to_string())),
        }
    }
}
