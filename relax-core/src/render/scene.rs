//! Display List
//!
//! Serializable drawing primitives. The client maps these one-to-one onto
//! 2D canvas calls; colors are sent as CSS color names.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::graph::Point;

/// The palette of the visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Ordinary edges and vertex outlines.
    Black,

    /// The edge currently at the cursor.
    Blue,

    /// A reconstructed shortest-path edge.
    Orange,

    /// A vertex with a finite distance.
    Green,

    /// A vertex that is still unreachable.
    Red,

    /// Vertex index labels.
    White,
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// A straight stroke.
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },

    /// A filled polygon. Arrowheads are the only producer, so the inline
    /// capacity covers every real instance.
    Polygon {
        points: SmallVec<[Point; 4]>,
        color: Color,
    },

    /// A filled, outlined disc.
    Circle {
        center: Point,
        radius: f32,
        fill: Color,
        stroke: Color,
    },

    /// A text label anchored at its left baseline.
    Text {
        at: Point,
        text: String,
        color: Color,
    },
}

/// A complete frame: canvas dimensions plus every shape, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
}
