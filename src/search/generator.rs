use crate::grid::Cell;
use crate::grid::GridConfig;
use crate::trace::Trajectory;
use std::collections::HashSet;

/// cells where adding a mirror could possibly change the trajectory:
/// cells the beam visits, minus obstacles, splitters, the laser
/// origin, and cells already holding a mirror. a mirror anywhere else
/// is never struck, so this pruning is exact, not heuristic.
///
/// order is first visit along the path, which fixes the search's
/// tie-break order and keeps the whole optimization deterministic.
pub fn pruned(
    trajectory: &Trajectory,
    grid: &GridConfig,
    used: &HashSet<Cell>,
) -> Vec<Cell> {
    let mut seen = HashSet::new();
    trajectory
        .cells()
        .filter(|cell| grid.open(*cell))
        .filter(|cell| !used.contains(cell))
        .filter(|cell| seen.insert(*cell))
        .collect()
}

/// the non-pruned fallback for validation: every legal empty cell on
/// the grid, in row-major order.
pub fn exhaustive(grid: &GridConfig, used: &HashSet<Cell>) -> Vec<Cell> {
    grid.cells()
        .filter(|cell| grid.open(*cell))
        .filter(|cell| !used.contains(cell))
        .collect()
}
