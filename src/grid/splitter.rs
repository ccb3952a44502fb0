use super::direction::Direction;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// how a splitter treats an incoming beam.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum SplitterHit {
    /// fork into the two perpendicular headings
    Split,
    /// absorb the beam like an obstacle
    Wall,
    /// bounce back toward the orientation's reverse
    Reflect,
}

/// a directional beam-splitter. the orientation is the heading a beam
/// must travel to trigger a split.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Splitter(Direction);

impl Splitter {
    pub const fn new(orientation: Direction) -> Self {
        Self(orientation)
    }
    pub const fn orientation(&self) -> Direction {
        self.0
    }

    /// classify an incoming beam heading against this splitter.
    pub fn hit(&self, incoming: Direction) -> SplitterHit {
        if incoming == self.0 {
            SplitterHit::Split
        } else if incoming == self.0.opposite() {
            SplitterHit::Wall
        } else {
            SplitterHit::Reflect
        }
    }
}

impl From<Direction> for Splitter {
    fn from(orientation: Direction) -> Self {
        Self(orientation)
    }
}

impl Display for Splitter {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "splitter({})", self.0)
    }
}
