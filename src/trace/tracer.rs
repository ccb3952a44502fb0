use super::termination::Termination;
use super::trajectory::Trajectory;
use crate::grid::Cell;
use crate::grid::Direction;
use crate::grid::GridConfig;
use crate::grid::Mirror;
use crate::grid::SplitterHit;
use crate::Score;
use crate::MAX_LENGTH;
use std::collections::HashMap;
use std::collections::HashSet;

/// mirror placements keyed by cell. owned per candidate, never shared
/// mutably across candidates.
pub type MirrorMap = HashMap<Cell, Mirror>;

/// simulate the laser from its origin over the given mirror layout.
/// pure function of its inputs: every defined input terminates with a
/// well-formed trajectory.
pub fn trace(grid: &GridConfig, mirrors: &MirrorMap) -> Trajectory {
    Walker::start(grid, mirrors).run()
}

/// the step loop shared by the full tracer and the incremental
/// re-tracer. branching beams go through an explicit work-stack rather
/// than recursion, so depth is bounded and the step ceiling applies
/// uniformly. length and path are cumulative across branches: the
/// score is total illuminated length, and the branch point appears in
/// the path exactly once.
pub(super) struct Walker<'a> {
    grid: &'a GridConfig,
    mirrors: &'a MirrorMap,
    stack: Vec<(Cell, Direction)>,
    visited: HashSet<(Cell, Direction)>,
    path: Vec<(Cell, Direction)>,
    length: Score,
    reason: Termination,
}

impl<'a> Walker<'a> {
    /// a fresh walk from the laser origin.
    pub fn start(grid: &'a GridConfig, mirrors: &'a MirrorMap) -> Self {
        let origin = (grid.laser(), grid.direction());
        Self {
            grid,
            mirrors,
            stack: vec![origin],
            visited: HashSet::new(),
            path: vec![origin],
            length: 0,
            reason: Termination::MaxLength,
        }
    }

    /// resume a walk from a truncated prefix of an earlier trajectory.
    /// the visited set is seeded with exactly the prefix states, so the
    /// continuation is indistinguishable from a full walk that arrived
    /// the same way.
    pub fn resume(
        grid: &'a GridConfig,
        mirrors: &'a MirrorMap,
        prefix: Vec<(Cell, Direction)>,
        head: (Cell, Direction),
    ) -> Self {
        let length = prefix.len();
        let visited = prefix.iter().copied().collect::<HashSet<_>>();
        let mut path = prefix;
        path.push(head);
        Self {
            grid,
            mirrors,
            stack: vec![head],
            visited,
            path,
            length,
            reason: Termination::MaxLength,
        }
    }

    pub fn run(mut self) -> Trajectory {
        while self.length < MAX_LENGTH {
            match self.stack.pop() {
                None => break,
                Some(beam) => self.beam(beam),
            }
        }
        Trajectory::new(self.path, self.length, self.reason)
    }

    /// walk one beam until it terminates, forks, or hits the ceiling.
    /// every attempted move costs one unit of length, including the
    /// terminating one.
    fn beam(&mut self, (mut cell, mut direction): (Cell, Direction)) {
        loop {
            if self.length >= MAX_LENGTH {
                self.reason = Termination::MaxLength;
                return;
            }
            if !self.visited.insert((cell, direction)) {
                self.reason = Termination::Loop;
                return;
            }
            let next = cell.next(direction);
            if !self.grid.contains(next) {
                self.length += 1;
                self.reason = Termination::Edge;
                return;
            }
            if self.grid.obstacle(next) {
                self.length += 1;
                self.reason = Termination::Obstacle;
                return;
            }
            if let Some(splitter) = self.grid.splitter(next) {
                self.length += 1;
                match splitter.hit(direction) {
                    SplitterHit::Split => {
                        let [a, b] = direction.perpendicular();
                        self.stack.push((next, a));
                        self.stack.push((next, b));
                        self.path.push((next, direction));
                        return;
                    }
                    SplitterHit::Wall => {
                        self.reason = Termination::Obstacle;
                        return;
                    }
                    SplitterHit::Reflect => {
                        cell = next;
                        direction = splitter.orientation().opposite();
                        self.path.push((cell, direction));
                        continue;
                    }
                }
            }
            self.length += 1;
            cell = next;
            if let Some(mirror) = self.mirrors.get(&cell) {
                direction = mirror.reflect(direction);
            }
            self.path.push((cell, direction));
        }
    }
}
