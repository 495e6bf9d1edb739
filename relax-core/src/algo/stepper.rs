//! Algorithm Stepper
//!
//! The stepper is the visualizer's state machine. It owns the distance
//! vector, the predecessor chain, and the (iteration, cursor) progress
//! pair, and it advances by exactly one edge-relaxation check per call.
//!
//! # States
//!
//! - **Running**: `iteration < V - 1`. Steps examine one edge each.
//! - **Finished**: `iteration >= V - 1`. Steps are rejected and nothing
//!   mutates, even if further relaxations could still lower a distance.
//!
//! A stepper built for zero or one vertices is finished from the start.
//!
//! # Invariants
//!
//! - `distances[0] == Finite(0)` immediately after construction or reset.
//! - No distance ever increases between resets.
//! - Every edge handed to `step()` must reference vertices below the
//!   vertex count the stepper was built with; the graph store's admission
//!   check guarantees this for edges that came through a session.

use tracing::debug;

use super::distance::Distance;
use crate::graph::Edge;

/// What one `step()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Index of the edge that was examined.
    pub edge: usize,

    /// Whether the examination lowered the destination's distance.
    pub relaxed: bool,

    /// Whether this step completed a full pass over the edge list.
    pub pass_completed: bool,

    /// Whether the stepper is finished after this step.
    pub finished: bool,
}

/// Why a step was rejected. Both conditions leave all state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("the algorithm has already finished running")]
    Finished,

    #[error("the graph has no edges to relax")]
    NoEdges,
}

/// Why a shortest path could not be reconstructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("no path to vertex {dest} has been found")]
    Unreachable { dest: usize },

    #[error("path reconstruction did not terminate; the graph has a negative cycle")]
    NegativeCycle,
}

/// Step-wise Bellman-Ford over an external edge list.
///
/// The edge list itself lives in the graph store and is passed into each
/// call, so edges added mid-run take part in the remaining passes without
/// the stepper noticing anything special.
#[derive(Debug, Clone)]
pub struct Stepper {
    /// Best-known distance per vertex. `distances.len()` is V.
    distances: Vec<Distance>,

    /// Per vertex, the edge index that most recently lowered its distance.
    predecessors: Vec<Option<usize>>,

    /// Completed full passes over the edge list.
    iteration: usize,

    /// Position within the current pass.
    cursor: usize,
}

impl Stepper {
    /// Fresh state for a graph of `vertices` vertices: vertex 0 is the
    /// fixed source at distance 0, everything else is unreachable.
    pub fn new(vertices: usize) -> Self {
        let mut distances = vec![Distance::Unreachable; vertices];
        if let Some(source) = distances.first_mut() {
            *source = Distance::Finite(0);
        }
        Self {
            distances,
            predecessors: vec![None; vertices],
            iteration: 0,
            cursor: 0,
        }
    }

    /// Unconditionally return to the initial state, keeping the vertex
    /// count. Valid in any state, including Finished.
    pub fn reset(&mut self) {
        let vertices = self.distances.len();
        *self = Stepper::new(vertices);
    }

    /// Number of passes Bellman-Ford needs for this vertex count: V - 1.
    fn pass_bound(&self) -> usize {
        self.distances.len().saturating_sub(1)
    }

    pub fn is_finished(&self) -> bool {
        self.iteration >= self.pass_bound()
    }

    /// Full passes still to run.
    pub fn passes_left(&self) -> usize {
        self.pass_bound() - self.iteration.min(self.pass_bound())
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Index of the edge the next step will examine.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn distance(&self, vertex: usize) -> Option<Distance> {
        self.distances.get(vertex).copied()
    }

    /// Perform one edge-relaxation check.
    ///
    /// Examines the edge at the cursor, lowers the destination's distance
    /// if the path through this edge is shorter, then advances the cursor,
    /// wrapping into the next pass at the end of the edge list.
    pub fn step(&mut self, edges: &[Edge]) -> Result<StepReport, StepError> {
        if self.is_finished() {
            return Err(StepError::Finished);
        }
        if edges.is_empty() {
            return Err(StepError::NoEdges);
        }

        let index = self.cursor;
        let edge = edges[index];
        debug_assert!(edge.source < self.distances.len() && edge.dest < self.distances.len());

        let candidate = self.distances[edge.source].offset(edge.weight);
        let relaxed = candidate < self.distances[edge.dest];
        if relaxed {
            debug!(
                edge = index,
                dest = edge.dest,
                distance = %candidate,
                "relaxed"
            );
            self.distances[edge.dest] = candidate;
            self.predecessors[edge.dest] = Some(index);
        }

        self.cursor += 1;
        let pass_completed = self.cursor >= edges.len();
        if pass_completed {
            self.cursor = 0;
            self.iteration += 1;
        }

        Ok(StepReport {
            edge: index,
            relaxed,
            pass_completed,
            finished: self.is_finished(),
        })
    }

    /// Reconstruct the current best path from the source to `dest` as a
    /// sequence of edge indices, source end first.
    ///
    /// Walks the predecessor chain backwards from `dest`. The path
    /// reflects whatever the run has discovered so far; before the run
    /// finishes it may not yet be the true shortest path.
    pub fn shortest_path(&self, dest: usize, edges: &[Edge]) -> Result<Vec<usize>, PathError> {
        match self.distance(dest) {
            Some(d) if d.is_finite() => {}
            _ => return Err(PathError::Unreachable { dest }),
        }

        let mut path = Vec::new();
        let mut current = dest;
        while current != 0 {
            let edge_index = self.predecessors[current]
                .ok_or(PathError::Unreachable { dest })?;
            path.push(edge_index);
            current = edges[edge_index].source;

            // A chain longer than V edges can only mean the predecessors
            // loop, which takes a negative cycle.
            if path.len() > self.distances.len() {
                return Err(PathError::NegativeCycle);
            }
        }

        path.reverse();
        Ok(path)
    }
}
