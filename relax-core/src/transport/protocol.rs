//! Wire Protocol
//!
//! Command and event frames, serialized as `type`-tagged JSON. Command
//! fields are raw strings because they are raw on the page too: the
//! client does no validation, it just forwards what the user typed.

use serde::{Deserialize, Serialize};

use crate::render::Scene;
use crate::session::Status;

/// A user action, one frame per button press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientCommand {
    /// "Generate Graph" with the vertex-count field.
    GenerateGraph { vertices: String },

    /// "Add Edge" with the three edge fields.
    AddEdge {
        source: String,
        dest: String,
        weight: String,
    },

    /// "Run Algorithm": advance one edge-relaxation check.
    Step,

    /// "Reset Graph".
    Reset,

    /// "Show Shortest Paths" toward the given destination field.
    ShowPaths { dest: String },
}

/// A frame from the server back to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Full redraw of the canvas.
    Scene(Scene),

    /// The text readouts beside the canvas.
    Status(Status),

    /// A blocking notice, where the original page put an `alert`.
    Notice { text: String },
}
