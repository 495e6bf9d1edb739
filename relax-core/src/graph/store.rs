//! Graph Store
//!
//! Owns the vertex count, the ordered edge sequence, and the layout
//! positions. The store is rebuilt wholesale when the user generates a new
//! graph; edges only ever grow, one explicit admission at a time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::{self, CanvasSpec, Point};

/// A directed weighted edge.
///
/// Weights are signed: Bellman-Ford handles negative weights, and the
/// visualizer accepts them. Insertion order doubles as the processing
/// order within a relaxation pass, so edges are never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub dest: usize,
    pub weight: i64,
}

impl Edge {
    pub fn new(source: usize, dest: usize, weight: i64) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }
}

/// Rejections at edge admission time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// An endpoint names a vertex the graph does not have.
    #[error("vertex {index} does not exist (the graph has {count} vertices)")]
    UnknownVertex { index: usize, count: usize },
}

/// The interactively-built graph.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Number of vertices, V. Vertices are the indices `0..V`.
    vertex_count: usize,

    /// Directed edges in insertion order.
    edges: Vec<Edge>,

    /// One drawing position per vertex, fixed at generation time.
    positions: Vec<Point>,
}

impl GraphStore {
    /// The empty store used before the first "generate graph" action.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a fresh graph: `vertices` laid out on a circle, no edges.
    pub fn generate(vertices: usize, canvas: &CanvasSpec) -> Self {
        Self {
            vertex_count: vertices,
            edges: Vec::new(),
            positions: layout::circle(vertices, canvas),
        }
    }

    /// Append one edge to the processing sequence.
    ///
    /// Both endpoints must name existing vertices. Nothing else is checked:
    /// self-loops, duplicates, and parallel edges are all admitted, and
    /// admission deliberately leaves any in-progress algorithm state alone,
    /// so an edge added mid-run changes the remaining passes.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), AdmissionError> {
        for index in [edge.source, edge.dest] {
            if index >= self.vertex_count {
                return Err(AdmissionError::UnknownVertex {
                    index,
                    count: self.vertex_count,
                });
            }
        }
        self.edges.push(edge);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Drawing position of a vertex.
    pub fn position(&self, vertex: usize) -> Option<Point> {
        self.positions.get(vertex).copied()
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }
}
