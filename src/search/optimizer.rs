use super::candidate::Candidate;
use super::generator;
use super::solution::Solution;
use crate::grid::GridConfig;
use crate::grid::Mirror;
use crate::grid::Placement;
use crate::BEAM_WIDTH;
use std::cmp::Reverse;
use std::collections::HashSet;

/// bounded best-first search over mirror placements. one frontier
/// grows depth by depth up to the mirror budget; the reported best is
/// tracked across every candidate at every depth, since a smaller
/// mirror set can outscore a larger one.
#[derive(Debug, Clone, Copy)]
pub struct Optimizer {
    beam_width: usize,
    pruning: bool,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            beam_width: BEAM_WIDTH,
            pruning: true,
        }
    }
}

impl Optimizer {
    pub fn new(beam_width: usize, pruning: bool) -> Self {
        Self {
            beam_width,
            pruning,
        }
    }

    pub fn solve(&self, grid: &GridConfig) -> Solution {
        let baseline = Candidate::baseline(grid);
        log::info!("baseline {}", baseline);
        log::debug!(
            "baseline beam\n{}",
            baseline.trajectory().draw(grid, &baseline.map())
        );
        let mut best = Solution::from(&baseline);
        let mut frontier = vec![baseline];
        for depth in 1..=grid.budget() {
            let mut generation = Vec::new();
            for candidate in &frontier {
                for child in self.children(grid, candidate) {
                    if child.score() > best.length() {
                        log::debug!("depth {} improves to {}", depth, child);
                        best = Solution::from(&child);
                    }
                    generation.push(child);
                }
            }
            // stable sort preserves first-discovered order among ties
            generation.sort_by_key(|c| Reverse(c.score()));
            generation.truncate(self.beam_width);
            log::info!(
                "depth {} of {}: {} survivors, best {}",
                depth,
                grid.budget(),
                generation.len(),
                best.length()
            );
            if generation.is_empty() {
                break;
            }
            frontier = generation;
        }
        debug_assert!(best.verify(grid));
        best
    }

    /// every legal one-mirror extension of a candidate, scored by
    /// incremental re-trace, in deterministic discovery order.
    fn children<'a>(
        &self,
        grid: &'a GridConfig,
        candidate: &'a Candidate,
    ) -> impl Iterator<Item = Candidate> + 'a {
        let used = candidate
            .mirrors()
            .iter()
            .map(|p| p.cell)
            .collect::<HashSet<_>>();
        let cells = match self.pruning {
            true => generator::pruned(candidate.trajectory(), grid, &used),
            false => generator::exhaustive(grid, &used),
        };
        cells.into_iter().flat_map(move |cell| {
            Mirror::all()
                .into_iter()
                .map(move |mirror| candidate.extend(grid, Placement::new(cell, mirror)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::grid::Direction;
    use crate::trace::trace;
    use crate::trace::MirrorMap;
    use crate::Score;
    use std::collections::HashMap;

    fn fixture(budget: usize) -> GridConfig {
        GridConfig::new(
            6,
            6,
            Cell::new(0, 2),
            Direction::Right,
            HashSet::from([Cell::new(4, 2), Cell::new(2, 4)]),
            HashMap::new(),
            budget,
        )
        .unwrap()
    }

    /// brute force over every placement set of size <= 2.
    fn enumerate(grid: &GridConfig) -> Score {
        let open = grid.cells().filter(|c| grid.open(*c)).collect::<Vec<_>>();
        let mut best = trace(grid, &MirrorMap::new()).length();
        for &c1 in &open {
            for m1 in Mirror::all() {
                let ref single = MirrorMap::from([(c1, m1)]);
                best = best.max(trace(grid, single).length());
                for &c2 in open.iter().filter(|&&c2| c2 != c1) {
                    for m2 in Mirror::all() {
                        let ref pair = MirrorMap::from([(c1, m1), (c2, m2)]);
                        best = best.max(trace(grid, pair).length());
                    }
                }
            }
        }
        best
    }

    #[test]
    fn matches_exhaustive_enumeration() {
        let grid = fixture(2);
        let solution = Optimizer::new(100, true).solve(&grid);
        assert!(solution.length() == enumerate(&grid));
        assert!(solution.verify(&grid));
    }

    #[test]
    fn pruning_matches_exhaustive_generation() {
        let grid = fixture(2);
        let narrow = Optimizer::new(100, true).solve(&grid);
        let wide = Optimizer::new(100, false).solve(&grid);
        assert!(narrow.length() == wide.length());
    }

    #[test]
    fn deeper_search_never_regresses() {
        let shallow = Optimizer::new(50, true).solve(&fixture(1));
        let deep = Optimizer::new(50, true).solve(&fixture(3));
        assert!(deep.length() >= shallow.length());
    }

    #[test]
    fn budget_bounds_mirror_count() {
        for budget in 0..4 {
            let solution = Optimizer::default().solve(&fixture(budget));
            assert!(solution.mirrors().len() <= budget);
        }
    }

    #[test]
    fn no_legal_positions_yields_baseline() {
        // a 1x1 grid has no placeable cell at all
        let grid = GridConfig::new(
            1,
            1,
            Cell::new(0, 0),
            Direction::Right,
            HashSet::new(),
            HashMap::new(),
            3,
        )
        .unwrap();
        let solution = Optimizer::default().solve(&grid);
        assert!(solution.mirrors().is_empty());
        assert!(solution.length() == trace(&grid, &MirrorMap::new()).length());
        assert!(solution.length() == 1);
    }

    #[test]
    fn zero_budget_yields_baseline() {
        let grid = fixture(0);
        let solution = Optimizer::default().solve(&grid);
        assert!(solution.mirrors().is_empty());
        assert!(solution.length() == 4);
    }

    #[test]
    fn determinism_across_runs() {
        let grid = fixture(3);
        let one = Optimizer::default().solve(&grid);
        let two = Optimizer::default().solve(&grid);
        assert!(one == two);
    }
}
