use crate::grid::GridConfig;
use crate::grid::Placement;
use crate::trace::retrace;
use crate::trace::trace;
use crate::trace::MirrorMap;
use crate::trace::Trajectory;
use crate::Score;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// a partial mirror layout and the trajectory it produces. immutable
/// once created: growth yields a new candidate with its own mirror
/// list and trajectory, so candidates never alias each other's state
/// and any of them can be replayed independently.
#[derive(Debug, Clone)]
pub struct Candidate {
    mirrors: Vec<Placement>,
    trajectory: Trajectory,
}

impl Candidate {
    /// the depth-0 baseline: no mirrors, full trace.
    pub fn baseline(grid: &GridConfig) -> Self {
        Self {
            mirrors: Vec::new(),
            trajectory: trace(grid, &MirrorMap::new()),
        }
    }

    /// a new candidate extended by one placement, scored by
    /// incremental re-trace.
    pub fn extend(&self, grid: &GridConfig, new: Placement) -> Self {
        let ref map = self.map();
        let trajectory = retrace(grid, map, &self.trajectory, new);
        let mut mirrors = self.mirrors.clone();
        mirrors.push(new);
        Self {
            mirrors,
            trajectory,
        }
    }

    pub fn mirrors(&self) -> &[Placement] {
        &self.mirrors
    }
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
    pub fn score(&self) -> Score {
        self.trajectory.length()
    }

    pub fn map(&self) -> MirrorMap {
        self.mirrors.iter().map(|p| (p.cell, p.mirror)).collect()
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "score {} with {} mirrors",
            self.score(),
            self.mirrors.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::grid::Direction;
    use crate::grid::Mirror;
    use std::collections::HashMap;
    use std::collections::HashSet;

    #[test]
    fn extension_leaves_parent_untouched() {
        let grid = GridConfig::new(
            10,
            10,
            Cell::new(0, 1),
            Direction::Right,
            HashSet::new(),
            HashMap::new(),
            3,
        )
        .unwrap();
        let parent = Candidate::baseline(&grid);
        let child = parent.extend(&grid, Placement::new(Cell::new(3, 1), Mirror::Backslash));
        assert!(parent.mirrors().is_empty());
        assert!(parent.score() == 10);
        assert!(child.mirrors().len() == 1);
        assert!(child.score() == 12);
    }
}
