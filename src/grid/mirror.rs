use super::cell::Cell;
use super::direction::Direction;
use crate::Arbitrary;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// a diagonal mirror. named for the character it is drawn with.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Mirror {
    /// `\` up->left, right->down, down->right, left->up
    #[default]
    Backslash,
    /// `/` up->right, right->up, down->left, left->down
    Slash,
}

impl Mirror {
    pub const fn all() -> [Mirror; 2] {
        [Mirror::Slash, Mirror::Backslash]
    }

    /// outgoing heading for a beam entering this mirror's cell.
    pub const fn reflect(&self, incoming: Direction) -> Direction {
        match self {
            Mirror::Backslash => match incoming {
                Direction::Up => Direction::Left,
                Direction::Right => Direction::Down,
                Direction::Down => Direction::Right,
                Direction::Left => Direction::Up,
            },
            Mirror::Slash => match incoming {
                Direction::Up => Direction::Right,
                Direction::Right => Direction::Up,
                Direction::Down => Direction::Left,
                Direction::Left => Direction::Down,
            },
        }
    }
}

/// char isomorphism
impl TryFrom<char> for Mirror {
    type Error = String;
    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            '\\' => Ok(Mirror::Backslash),
            '/' => Ok(Mirror::Slash),
            _ => Err(format!("invalid mirror char: {}", c)),
        }
    }
}
impl From<Mirror> for char {
    fn from(m: Mirror) -> char {
        match m {
            Mirror::Backslash => '\\',
            Mirror::Slash => '/',
        }
    }
}

impl Display for Mirror {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", char::from(*self))
    }
}

impl Arbitrary for Mirror {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::all().choose(rng).copied().expect("two mirror types")
    }
}

/// a mirror pinned to a cell. the unit of search: candidates grow by
/// one placement at a time, and solutions are lists of placements.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Placement {
    pub cell: Cell,
    pub mirror: Mirror,
}

impl Placement {
    pub const fn new(cell: Cell, mirror: Mirror) -> Self {
        Self { cell, mirror }
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} {}", self.cell, self.mirror)
    }
}
