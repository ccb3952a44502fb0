use super::cell::Cell;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// caller contract violations in puzzle geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// width or height is zero
    EmptyGrid,
    /// laser origin lies outside the grid
    LaserOutOfBounds(Cell),
    /// an obstacle or splitter lies outside the grid
    CellOutOfBounds(Cell),
    /// an obstacle or splitter occupies the laser origin
    LaserOccluded(Cell),
    /// a splitter occupies an obstacle cell
    SplitterOnObstacle(Cell),
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            GridError::EmptyGrid => write!(f, "grid dimensions must be positive"),
            GridError::LaserOutOfBounds(c) => write!(f, "laser origin {} out of bounds", c),
            GridError::CellOutOfBounds(c) => write!(f, "cell {} out of bounds", c),
            GridError::LaserOccluded(c) => write!(f, "cell {} occupies the laser origin", c),
            GridError::SplitterOnObstacle(c) => write!(f, "splitter {} occupies an obstacle", c),
        }
    }
}

impl std::error::Error for GridError {}

/// caller contract violations in mirror placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// cell is out of bounds, an obstacle, a splitter, or the laser origin
    InvalidPosition(Cell),
    /// two mirrors share a cell
    DuplicatePosition(Cell),
    /// more mirrors than the puzzle allows
    BudgetExceeded { placed: usize, budget: usize },
}

impl Display for PlacementError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PlacementError::InvalidPosition(c) => {
                write!(f, "invalid mirror position {}", c)
            }
            PlacementError::DuplicatePosition(c) => {
                write!(f, "duplicate mirror position {}", c)
            }
            PlacementError::BudgetExceeded { placed, budget } => {
                write!(f, "budget exceeded: {} mirrors placed, {} allowed", placed, budget)
            }
        }
    }
}

impl std::error::Error for PlacementError {}
