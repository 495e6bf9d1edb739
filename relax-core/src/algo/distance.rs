//! Distance Estimates
//!
//! A vertex's best-known distance from the source is either a finite
//! integer or the "unreachable" sentinel. The sentinel compares greater
//! than every finite distance, so "is this candidate an improvement?" is
//! an ordinary `<`.

use std::fmt;

/// Best-known distance from the source vertex.
///
/// The variant order matters: deriving `Ord` makes every `Finite` value
/// compare below `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    /// A concrete path of this total weight has been found.
    Finite(i64),

    /// No path from the source has been found yet.
    Unreachable,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The distance reached by following an edge of the given weight from
    /// here. Unreachable stays unreachable; finite arithmetic saturates.
    pub fn offset(&self, weight: i64) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    /// Unreachable prints literally as `Infinity`, matching the on-canvas
    /// labels and the final readout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => write!(f, "Infinity"),
        }
    }
}
