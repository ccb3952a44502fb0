use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// why a trajectory stopped growing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Termination {
    /// the beam left the grid
    Edge,
    /// the beam hit an obstacle, or a splitter acting as one
    Obstacle,
    /// the beam revisited a (cell, direction) state
    Loop,
    /// the hard step ceiling fired mid-flight
    MaxLength,
    /// an incremental re-trace proved the new mirror inert
    Unchanged,
}

impl Display for Termination {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Termination::Edge => write!(f, "edge"),
            Termination::Obstacle => write!(f, "obstacle"),
            Termination::Loop => write!(f, "loop"),
            Termination::MaxLength => write!(f, "max_length"),
            Termination::Unchanged => write!(f, "unchanged"),
        }
    }
}
