use super::direction::Direction;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// a grid coordinate. may lie outside the grid bounds, since the
/// tracer computes the candidate next cell before the bounds check.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Cell {
    x: i32,
    y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    pub const fn x(&self) -> i32 {
        self.x
    }
    pub const fn y(&self) -> i32 {
        self.y
    }
    /// the adjacent cell one move along the given heading.
    pub const fn next(&self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
