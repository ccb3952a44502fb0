use super::termination::Termination;
use crate::grid::Cell;
use crate::grid::Direction;
use crate::grid::GridConfig;
use crate::trace::MirrorMap;
use crate::Score;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// the full history of a traced beam: every (cell, heading) it
/// occupied, the number of moves attempted including the terminating
/// one, and why it stopped. immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    path: Vec<(Cell, Direction)>,
    length: Score,
    reason: Termination,
}

impl Trajectory {
    pub fn new(path: Vec<(Cell, Direction)>, length: Score, reason: Termination) -> Self {
        assert!(!path.is_empty());
        Self {
            path,
            length,
            reason,
        }
    }

    pub fn path(&self) -> &[(Cell, Direction)] {
        &self.path
    }
    pub fn length(&self) -> Score {
        self.length
    }
    pub fn reason(&self) -> Termination {
        self.reason
    }

    /// cells in visit order, duplicates included.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.path.iter().map(|(cell, _)| *cell)
    }

    /// index of the first visit to a cell, if any.
    pub fn find(&self, cell: Cell) -> Option<usize> {
        self.path.iter().position(|(c, _)| *c == cell)
    }

    /// a copy of this trajectory relabeled as unaffected by a
    /// candidate mirror.
    pub fn unchanged(&self) -> Self {
        Self {
            path: self.path.clone(),
            length: self.length,
            reason: Termination::Unchanged,
        }
    }

    /// ascii rendering of the beam over the grid, for logs and debugging.
    pub fn draw(&self, grid: &GridConfig, mirrors: &MirrorMap) -> String {
        let mut rows = (0..grid.height())
            .map(|y| {
                (0..grid.width())
                    .map(|x| {
                        let cell = Cell::new(x, y);
                        if cell == grid.laser() {
                            '@'
                        } else if grid.obstacle(cell) {
                            '#'
                        } else if grid.splitter(cell).is_some() {
                            '8'
                        } else if let Some(mirror) = mirrors.get(&cell) {
                            char::from(*mirror)
                        } else {
                            '.'
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        for cell in self.cells().filter(|c| *c != grid.laser()) {
            let spot = &mut rows[cell.y() as usize][cell.x() as usize];
            if *spot == '.' {
                *spot = '*';
            }
        }
        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Display for Trajectory {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "length {} over {} states ({})",
            self.length,
            self.path.len(),
            self.reason
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::trace;
    use std::collections::HashMap;
    use std::collections::HashSet;

    #[test]
    fn drawing_marks_beam_and_fixtures() {
        let grid = GridConfig::new(
            4,
            2,
            Cell::new(0, 0),
            Direction::Right,
            HashSet::from([Cell::new(3, 0)]),
            HashMap::new(),
            1,
        )
        .unwrap();
        let trajectory = trace(&grid, &MirrorMap::new());
        assert!(trajectory.draw(&grid, &MirrorMap::new()) == "@**#\n....");
    }
}
