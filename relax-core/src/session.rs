//! Session
//!
//! One `Session` is one interactive page: the canvas geometry, the graph
//! being built, the algorithm state, and a transient path overlay. It is
//! the only owner of that state — the transport layer holds exactly one
//! session per connection and drives it strictly serially, so no two
//! operations ever overlap.
//!
//! # Responsibilities
//!
//! The session plays the part the original page's event handlers played:
//! it takes form input as raw strings, validates it, invokes the store and
//! the stepper, and reports either a typed outcome or a user-visible
//! error. Everything below it is pure state transition; everything above
//! it is wiring.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::algo::{PathError, StepError, StepReport, Stepper};
use crate::graph::{AdmissionError, CanvasSpec, Edge, GraphStore};
use crate::render::{self, Scene};

/// Upper bound on the vertex count a session will lay out. Input is
/// remote; an unbounded count is an unbounded allocation.
pub const MAX_VERTICES: usize = 512;

/// User-visible failures. Every variant renders as a blocking notice and
/// leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("please enter a valid number of vertices (got {value:?})")]
    InvalidVertexCount { value: String },

    #[error("a graph may have at most {MAX_VERTICES} vertices (got {got})")]
    TooManyVertices { got: usize },

    #[error("please enter a valid number for the {field} (got {value:?})")]
    NotANumber { field: &'static str, value: String },

    #[error("vertex {index} does not exist (the graph has {count} vertices)")]
    UnknownVertex { index: i64, count: usize },

    #[error(transparent)]
    Admission(#[from] AdmissionError),

    #[error(transparent)]
    Step(#[from] StepError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// The two text readouts next to the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Completed full passes.
    pub iteration: usize,

    /// Passes still to run before the V-1 bound.
    pub passes_left: usize,

    pub finished: bool,

    /// The final distance vector as a comma-separated list, unreachable
    /// entries printed as `Infinity`. Only present once finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<String>,
}

/// One interactive page session.
#[derive(Debug, Clone)]
pub struct Session {
    canvas: CanvasSpec,
    graph: GraphStore,
    stepper: Stepper,

    /// Edge indices highlighted by the last "show shortest paths" action.
    /// Cleared by any mutation, since the path it describes may go stale.
    path_overlay: Option<Vec<usize>>,
}

impl Session {
    pub fn new(canvas: CanvasSpec) -> Self {
        Self {
            canvas,
            graph: GraphStore::empty(),
            stepper: Stepper::new(0),
            path_overlay: None,
        }
    }

    /// "Generate Graph": fresh layout, empty edge set, reset distances.
    pub fn generate_graph(&mut self, vertices: &str) -> Result<(), SessionError> {
        let count = vertices
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or_else(|| SessionError::InvalidVertexCount {
                value: vertices.to_string(),
            })? as usize;

        if count > MAX_VERTICES {
            return Err(SessionError::TooManyVertices { got: count });
        }

        debug!(vertices = count, "generate graph");
        self.graph = GraphStore::generate(count, &self.canvas);
        self.stepper = Stepper::new(count);
        self.path_overlay = None;
        Ok(())
    }

    /// "Add Edge": three integer fields, appended without touching the
    /// run in progress.
    pub fn add_edge(
        &mut self,
        source: &str,
        dest: &str,
        weight: &str,
    ) -> Result<(), SessionError> {
        let source = self.parse_vertex("source vertex", source)?;
        let dest = self.parse_vertex("destination vertex", dest)?;
        let weight = parse_integer("edge weight", weight)?;

        debug!(source, dest, weight, "add edge");
        self.graph.add_edge(Edge::new(source, dest, weight))?;
        self.path_overlay = None;
        Ok(())
    }

    /// "Run Algorithm": one edge-relaxation check.
    pub fn step(&mut self) -> Result<StepReport, SessionError> {
        let report = self.stepper.step(self.graph.edges())?;
        self.path_overlay = None;
        Ok(report)
    }

    /// "Reset Graph": initial algorithm state; edges and layout stay.
    pub fn reset(&mut self) {
        debug!("reset");
        self.stepper.reset();
        self.path_overlay = None;
    }

    /// "Show Shortest Paths": reconstruct the best-known path to `dest`
    /// and highlight it until the next mutation.
    pub fn show_paths(&mut self, dest: &str) -> Result<&[usize], SessionError> {
        let dest = self.parse_vertex("destination vertex", dest)?;
        let path = self.stepper.shortest_path(dest, self.graph.edges())?;
        debug!(dest, edges = path.len(), "show path");
        Ok(self.path_overlay.insert(path))
    }

    /// Render the current state. Pure read.
    pub fn scene(&self) -> Scene {
        render::render(
            &self.graph,
            &self.stepper,
            &self.canvas,
            self.path_overlay.as_deref(),
        )
    }

    /// The text readouts. Pure read.
    pub fn status(&self) -> Status {
        let finished = self.stepper.is_finished();
        Status {
            iteration: self.stepper.iteration(),
            passes_left: self.stepper.passes_left(),
            finished,
            distances: finished.then(|| self.distance_readout()),
        }
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    fn distance_readout(&self) -> String {
        self.stepper
            .distances()
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a form field that must name an existing vertex.
    fn parse_vertex(&self, field: &'static str, raw: &str) -> Result<usize, SessionError> {
        let index = parse_integer(field, raw)?;
        usize::try_from(index)
            .ok()
            .filter(|i| *i < self.graph.vertex_count())
            .ok_or(SessionError::UnknownVertex {
                index,
                count: self.graph.vertex_count(),
            })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CanvasSpec::default())
    }
}

/// Parse a form field that must be an integer.
fn parse_integer(field: &'static str, raw: &str) -> Result<i64, SessionError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SessionError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_must_be_a_positive_integer() {
        let mut session = Session::default();

        for bad in ["", "abc", "0", "-2", "2.5"] {
            assert!(
                matches!(
                    session.generate_graph(bad),
                    Err(SessionError::InvalidVertexCount { .. })
                ),
                "{bad:?} should have been rejected"
            );
        }

        assert!(session.generate_graph(" 4 ").is_ok());
        assert_eq!(session.graph().vertex_count(), 4);
    }

    #[test]
    fn vertex_count_is_capped() {
        let mut session = Session::default();
        assert_eq!(
            session.generate_graph("100000"),
            Err(SessionError::TooManyVertices { got: 100000 })
        );
    }

    #[test]
    fn add_edge_validates_each_field() {
        let mut session = Session::default();
        session.generate_graph("3").unwrap();

        assert_eq!(
            session.add_edge("a", "1", "5"),
            Err(SessionError::NotANumber {
                field: "source vertex",
                value: "a".to_string()
            })
        );
        assert!(matches!(
            session.add_edge("0", "1", "x"),
            Err(SessionError::NotANumber { field: "edge weight", .. })
        ));
        assert!(session.graph().edges().is_empty());

        session.add_edge("0", "1", "-5").unwrap();
        assert_eq!(session.graph().edge_count(), 1);
    }

    #[test]
    fn add_edge_rejects_vertices_outside_the_graph() {
        let mut session = Session::default();
        session.generate_graph("3").unwrap();

        assert_eq!(
            session.add_edge("0", "3", "1"),
            Err(SessionError::UnknownVertex { index: 3, count: 3 })
        );
        assert_eq!(
            session.add_edge("-1", "1", "1"),
            Err(SessionError::UnknownVertex { index: -1, count: 3 })
        );
        assert!(session.graph().edges().is_empty());
    }

    #[test]
    fn stepping_with_no_graph_reports_finished() {
        // Before the first generate the vertex count is zero, which is
        // terminal from the start.
        let mut session = Session::default();
        assert_eq!(session.step(), Err(SessionError::Step(StepError::Finished)));
    }

    #[test]
    fn status_reports_the_readouts() {
        let mut session = Session::default();
        session.generate_graph("3").unwrap();
        session.add_edge("0", "1", "4").unwrap();
        session.add_edge("1", "2", "2").unwrap();
        session.add_edge("0", "2", "10").unwrap();

        let status = session.status();
        assert_eq!(status.passes_left, 2);
        assert!(!status.finished);
        assert_eq!(status.distances, None);

        for _ in 0..6 {
            session.step().unwrap();
        }

        let status = session.status();
        assert_eq!(status.iteration, 2);
        assert_eq!(status.passes_left, 0);
        assert!(status.finished);
        assert_eq!(status.distances.as_deref(), Some("0, 4, 6"));
    }

    #[test]
    fn show_paths_sets_the_overlay_and_mutations_clear_it() {
        let mut session = Session::default();
        session.generate_graph("3").unwrap();
        session.add_edge("0", "1", "4").unwrap();
        session.add_edge("1", "2", "2").unwrap();
        session.add_edge("0", "2", "10").unwrap();
        for _ in 0..6 {
            session.step().unwrap();
        }

        assert_eq!(session.show_paths("2").unwrap(), &[0, 1]);
        assert!(session.scene().shapes.iter().any(|s| matches!(
            s,
            crate::render::Shape::Line {
                color: crate::render::Color::Orange,
                ..
            }
        )));

        session.reset();
        assert!(!session.scene().shapes.iter().any(|s| matches!(
            s,
            crate::render::Shape::Line {
                color: crate::render::Color::Orange,
                ..
            }
        )));
    }

    #[test]
    fn show_paths_before_any_relaxation_fails() {
        let mut session = Session::default();
        session.generate_graph("2").unwrap();
        session.add_edge("0", "1", "1").unwrap();

        assert_eq!(
            session.show_paths("1"),
            Err(SessionError::Path(PathError::Unreachable { dest: 1 }))
        );
    }
}
