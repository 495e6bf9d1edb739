//! Relax Core
//!
//! This crate provides the core runtime for Relax, a browser-based
//! educational visualizer for the Bellman-Ford shortest-path algorithm.
//! It implements:
//!
//! - The interactively-built graph (edges, circular layout)
//! - The step-wise algorithm state machine (one edge relaxation per step)
//! - Scene generation (a serializable display list for a 2D canvas)
//! - The WebSocket transport that drives one session per browser page
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: the graph store and the circular layout
//! - `algo`: distance estimates and the Bellman-Ford stepper
//! - `render`: pure state-to-display-list rendering
//! - `session`: the per-page controller that validates input and owns state
//! - `transport`: the JSON protocol and the WebSocket server
//!
//! Everything below `transport` is synchronous and free of I/O, so the
//! whole visualizer can be exercised headlessly in tests.
//!
//! # Example
//!
//! ```rust
//! use relax_core::session::Session;
//!
//! let mut session = Session::default();
//! session.generate_graph("3").unwrap();
//! session.add_edge("0", "1", "4").unwrap();
//! session.add_edge("1", "2", "2").unwrap();
//!
//! // One edge-relaxation check per step.
//! let report = session.step().unwrap();
//! assert!(report.relaxed);
//! ```

pub mod algo;
pub mod graph;
pub mod render;
pub mod session;
pub mod transport;

pub use algo::{Distance, StepReport, Stepper};
pub use graph::{CanvasSpec, Edge, GraphStore, Point};
pub use render::{Scene, Shape};
pub use session::{Session, SessionError, Status};
pub use transport::{ClientCommand, Server, ServerEvent};
