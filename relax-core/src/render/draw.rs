//! Draw Pass
//!
//! Builds a `Scene` from the graph store and the stepper. Pure: reads the
//! data model, produces shapes, touches nothing.

use smallvec::smallvec;

use super::scene::{Color, Scene, Shape};
use crate::algo::Stepper;
use crate::graph::{CanvasSpec, GraphStore, Point};

/// Length of an arrowhead, in pixels.
const HEAD_LEN: f32 = 15.0;

/// Half-opening of an arrowhead around the shaft angle.
const HEAD_ANGLE: f32 = std::f32::consts::PI / 7.0;

/// How far above the edge midpoint the weight label sits.
const WEIGHT_LABEL_RAISE: f32 = 20.0;

/// Render the complete frame.
///
/// `path` optionally names edge indices to paint as a shortest-path
/// overlay; those win over the cursor highlight.
pub fn render(
    graph: &GraphStore,
    stepper: &Stepper,
    canvas: &CanvasSpec,
    path: Option<&[usize]>,
) -> Scene {
    let mut scene = Scene::new(canvas.width, canvas.height);

    // Edges first so vertex discs paint over the arrow tips.
    for (index, edge) in graph.edges().iter().enumerate() {
        let color = if path.is_some_and(|p| p.contains(&index)) {
            Color::Orange
        } else if index == stepper.cursor() {
            Color::Blue
        } else {
            Color::Black
        };

        let (from, to) = match (graph.position(edge.source), graph.position(edge.dest)) {
            (Some(from), Some(to)) => (from, to),
            _ => continue,
        };

        arrow(&mut scene, from, to, color, canvas.vertex_radius);

        let mid = from.midpoint(to);
        scene.push(Shape::Text {
            at: Point::new(mid.x, mid.y - WEIGHT_LABEL_RAISE),
            text: edge.weight.to_string(),
            color,
        });
    }

    for vertex in 0..graph.vertex_count() {
        let center = match graph.position(vertex) {
            Some(center) => center,
            None => continue,
        };

        let distance = stepper.distance(vertex);
        let reached = distance.is_some_and(|d| d.is_finite());

        scene.push(Shape::Circle {
            center,
            radius: canvas.vertex_radius,
            fill: if reached { Color::Green } else { Color::Red },
            stroke: Color::Black,
        });
        scene.push(Shape::Text {
            at: Point::new(center.x - 5.0, center.y + 5.0),
            text: vertex.to_string(),
            color: Color::White,
        });
        if let Some(distance) = distance {
            scene.push(Shape::Text {
                at: Point::new(center.x - 30.0, center.y + 40.0),
                text: format!("Dist: {distance}"),
                color: Color::Red,
            });
        }
    }

    scene
}

/// An arrow from `from` to `to`, its tip stopped just short of the
/// destination disc.
fn arrow(scene: &mut Scene, from: Point, to: Point, color: Color, vertex_radius: f32) {
    let angle = from.angle_to(to);
    let tip = Point::new(
        to.x - vertex_radius * angle.cos(),
        to.y - vertex_radius * angle.sin(),
    );

    scene.push(Shape::Line {
        from,
        to: tip,
        color,
        width: 1.0,
    });

    let left = Point::new(
        tip.x - HEAD_LEN * (angle - HEAD_ANGLE).cos(),
        tip.y - HEAD_LEN * (angle - HEAD_ANGLE).sin(),
    );
    let right = Point::new(
        tip.x - HEAD_LEN * (angle + HEAD_ANGLE).cos(),
        tip.y - HEAD_LEN * (angle + HEAD_ANGLE).sin(),
    );
    scene.push(Shape::Polygon {
        points: smallvec![tip, left, right],
        color,
    });
}
