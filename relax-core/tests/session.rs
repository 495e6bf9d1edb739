//! Integration Tests for the Visualizer Session
//!
//! These tests drive a full session headlessly — the same call sequence
//! the WebSocket layer performs for a connected page — and check the
//! user-observable behavior of every control.

use relax_core::algo::StepError;
use relax_core::render::{Color, Shape};
use relax_core::session::{Session, SessionError};
use relax_core::Distance;

/// The worked example: three vertices where the two-hop route to vertex 2
/// beats the direct edge.
fn triangle_session() -> Session {
    let mut session = Session::default();
    session.generate_graph("3").unwrap();
    session.add_edge("0", "1", "4").unwrap();
    session.add_edge("1", "2", "2").unwrap();
    session.add_edge("0", "2", "10").unwrap();
    session
}

/// Generating a graph resets distances: source at 0, the rest unreachable.
#[test]
fn generated_graph_starts_from_the_source() {
    let session = triangle_session();

    assert_eq!(session.stepper().distance(0), Some(Distance::Finite(0)));
    assert_eq!(session.stepper().distance(1), Some(Distance::Unreachable));
    assert_eq!(session.stepper().distance(2), Some(Distance::Unreachable));
    assert_eq!(session.status().passes_left, 2);
}

/// The documented scenario: after exactly two full passes the distances
/// are [0, 4, 6] and the run is finished.
#[test]
fn triangle_converges_to_the_two_hop_route() {
    let mut session = triangle_session();

    for step in 0..6 {
        let report = session.step().unwrap_or_else(|e| {
            panic!("step {step} failed: {e}");
        });
        assert_eq!(report.pass_completed, step % 3 == 2);
    }

    let status = session.status();
    assert!(status.finished);
    assert_eq!(status.iteration, 2);
    assert_eq!(status.distances.as_deref(), Some("0, 4, 6"));
}

/// Once finished, stepping is a rejected no-op forever.
#[test]
fn finished_run_is_idempotent() {
    let mut session = triangle_session();
    while session.step().is_ok() {}

    let before: Vec<_> = session.stepper().distances().to_vec();
    for _ in 0..5 {
        assert_eq!(session.step(), Err(SessionError::Step(StepError::Finished)));
    }
    assert_eq!(session.stepper().distances(), &before[..]);
}

/// No distance ever increases over the course of a run.
#[test]
fn distances_are_monotone_within_a_run() {
    let mut session = Session::default();
    session.generate_graph("4").unwrap();
    session.add_edge("0", "1", "7").unwrap();
    session.add_edge("0", "2", "3").unwrap();
    session.add_edge("2", "1", "1").unwrap();
    session.add_edge("1", "3", "2").unwrap();

    let mut previous = session.stepper().distances().to_vec();
    while session.step().is_ok() {
        let current = session.stepper().distances().to_vec();
        for (old, new) in previous.iter().zip(&current) {
            assert!(new <= old);
        }
        previous = current;
    }
}

/// A non-numeric edge field is rejected with a notice and no mutation.
#[test]
fn non_numeric_edge_input_is_rejected() {
    let mut session = triangle_session();

    let err = session.add_edge("a", "1", "5").unwrap_err();
    assert_eq!(
        err,
        SessionError::NotANumber {
            field: "source vertex",
            value: "a".to_string(),
        }
    );
    assert_eq!(session.graph().edge_count(), 3);
}

/// Out-of-range endpoints are rejected at admission rather than accepted
/// and left to fail later at render or relax time.
#[test]
fn dangling_edge_endpoints_are_rejected_at_admission() {
    let mut session = triangle_session();

    assert!(matches!(
        session.add_edge("0", "7", "1"),
        Err(SessionError::UnknownVertex { index: 7, count: 3 })
    ));
    assert_eq!(session.graph().edge_count(), 3);
}

/// Reset after a partial run: progress and distances return to their
/// initial values, edges and layout survive.
#[test]
fn reset_preserves_the_graph() {
    let mut session = triangle_session();
    let positions = session.graph().positions().to_vec();

    for _ in 0..4 {
        session.step().unwrap();
    }
    session.reset();

    assert_eq!(session.stepper().iteration(), 0);
    assert_eq!(session.stepper().cursor(), 0);
    assert_eq!(session.stepper().distance(0), Some(Distance::Finite(0)));
    assert_eq!(session.stepper().distance(1), Some(Distance::Unreachable));
    assert_eq!(session.stepper().distance(2), Some(Distance::Unreachable));
    assert_eq!(session.graph().edge_count(), 3);
    assert_eq!(session.graph().positions(), &positions[..]);
}

/// Edges may be added mid-run without resetting progress; the new edge
/// participates in the remaining passes.
#[test]
fn edges_added_mid_run_join_the_remaining_passes() {
    let mut session = Session::default();
    session.generate_graph("3").unwrap();
    session.add_edge("0", "1", "4").unwrap();
    session.add_edge("1", "2", "2").unwrap();

    // Relax 0->1 within the first pass, then grow the edge list.
    session.step().unwrap();
    session.add_edge("0", "2", "1").unwrap();
    assert_eq!(session.stepper().iteration(), 0);

    while session.step().is_ok() {}

    // The late edge won: 0->2 direct at weight 1.
    assert_eq!(session.stepper().distance(2), Some(Distance::Finite(1)));
}

/// "Show Shortest Paths" highlights the reconstructed route on the next
/// frame.
#[test]
fn shortest_path_is_highlighted() {
    let mut session = triangle_session();
    while session.step().is_ok() {}

    let path = session.show_paths("2").unwrap().to_vec();
    assert_eq!(path, vec![0, 1]);

    let scene = session.scene();
    let orange_edges = scene
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Line { color: Color::Orange, .. }))
        .count();
    assert_eq!(orange_edges, 2);
}

/// The scene always redraws in full: the same state yields the same
/// complete display list.
#[test]
fn renders_are_full_and_deterministic() {
    let session = triangle_session();
    assert_eq!(session.scene(), session.scene());

    let shape_count = session.scene().shapes.len();
    // 3 edges x (shaft + head + weight) + 3 vertices x (disc + 2 labels).
    assert_eq!(shape_count, 9 + 9);
}

/// Regenerating replaces everything: old edges do not survive a new
/// vertex count.
#[test]
fn regenerate_discards_the_old_graph() {
    let mut session = triangle_session();
    session.generate_graph("5").unwrap();

    assert_eq!(session.graph().vertex_count(), 5);
    assert_eq!(session.graph().edge_count(), 0);
    assert_eq!(session.status().passes_left, 4);
}
