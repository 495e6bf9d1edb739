//! Algorithm State
//!
//! This module implements the step-wise Bellman-Ford state machine: the
//! per-vertex distance estimates and the (iteration, cursor) progress pair
//! that tracks how far the run has advanced.
//!
//! # Overview
//!
//! Bellman-Ford converges after V-1 full passes over the edge list on any
//! graph without negative-weight cycles. The visualizer exposes the
//! algorithm one relaxation check at a time: each `step()` examines exactly
//! one edge, possibly lowers one distance, and advances the cursor. A pass
//! completes when the cursor wraps; the run completes when V-1 passes have.
//!
//! # Design Decisions
//!
//! 1. Distances are a dedicated type rather than a float with `INFINITY`:
//!    the unreachable sentinel orders greater than every finite distance,
//!    which collapses the relaxation condition into a single comparison.
//!
//! 2. The stepper also records, per vertex, the edge that last improved
//!    it. That predecessor chain is what "show shortest paths" walks.
//!
//! 3. Negative cycles are not detected. The V-1 bound simply stops the
//!    run, exactly like the reference behavior.

mod distance;
mod stepper;

pub use distance::Distance;
pub use stepper::{PathError, StepError, StepReport, Stepper};
