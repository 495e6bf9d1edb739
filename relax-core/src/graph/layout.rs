//! Circular Layout
//!
//! Maps a vertex count onto positions evenly spaced around a circle
//! centered in the drawing area. The layout is deterministic and pure:
//! the same vertex count and canvas always produce the same positions.

use serde::{Deserialize, Serialize};

/// A point on the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Angle of the segment from `self` to `other`, in radians.
    pub fn angle_to(&self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Midpoint of the segment from `self` to `other`.
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Geometry of the drawing surface.
///
/// The defaults match the original page: an 800x600 canvas with the layout
/// circle inset 50 px from the nearer edge and radius-20 vertex discs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanvasSpec {
    /// Canvas width in pixels.
    pub width: f32,

    /// Canvas height in pixels.
    pub height: f32,

    /// Gap between the layout circle and the nearer canvas edge.
    pub margin: f32,

    /// Radius of the disc drawn for each vertex.
    pub vertex_radius: f32,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 50.0,
            vertex_radius: 20.0,
        }
    }
}

impl CanvasSpec {
    /// Center of the drawing surface.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the layout circle: half the smaller canvas dimension,
    /// minus the margin.
    pub fn layout_radius(&self) -> f32 {
        (self.width.min(self.height) / 2.0) - self.margin
    }
}

/// Place `vertices` positions evenly around the layout circle.
///
/// Vertex `i` sits at angle `i * 2π / vertices`, measured from the
/// positive x axis. Zero vertices yields an empty layout.
pub fn circle(vertices: usize, canvas: &CanvasSpec) -> Vec<Point> {
    let center = canvas.center();
    let radius = canvas.layout_radius();

    let mut positions = Vec::with_capacity(vertices);
    if vertices == 0 {
        return positions;
    }

    let increment = std::f32::consts::TAU / vertices as f32;
    for i in 0..vertices {
        let angle = i as f32 * increment;
        positions.push(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }

    positions
}
