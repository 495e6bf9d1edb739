//! Graph Model
//!
//! This module holds the interactively-built graph: an ordered edge list,
//! the vertex count, and the per-vertex positions used for drawing.
//!
//! # Overview
//!
//! Vertices are plain indices in `[0, V)` — they carry no attributes beyond
//! the position assigned by the layout and the distance estimate tracked by
//! the algorithm state. Edges are directed, weighted, and kept in insertion
//! order, because insertion order is the processing order within one
//! relaxation pass.
//!
//! # Design Decisions
//!
//! 1. Duplicate and parallel edges are allowed. Each is relaxed
//!    independently, exactly as it was entered.
//!
//! 2. Edge admission rejects endpoints that name a vertex the graph does
//!    not have. Accepting them would only defer the failure to the first
//!    render or relaxation that dereferences the missing position.

mod layout;
mod store;

pub use layout::{circle, CanvasSpec, Point};
pub use store::{AdmissionError, Edge, GraphStore};
