//! Rendering
//!
//! Turns the current graph + algorithm state into a display list the
//! browser client paints verbatim.
//!
//! # Overview
//!
//! There is no retained drawing state on either side: every render
//! describes the entire canvas from scratch, and the client clears before
//! painting. That keeps the renderer a pure function of the data model —
//! the only place pixels are touched is the thin canvas client.
//!
//! The scene encodes the visual language of the original page: black
//! arrows with the in-flight edge in blue, green discs for reached
//! vertices and red for unreachable ones, the vertex index in white, and
//! the running distance estimate in red underneath.

mod draw;
mod scene;

pub use draw::render;
pub use scene::{Color, Scene, Shape};
