use super::tracer::trace;
use super::tracer::MirrorMap;
use super::tracer::Walker;
use super::trajectory::Trajectory;
use crate::grid::GridConfig;
use crate::grid::Placement;

/// re-trace after adding one mirror to an already-traced layout,
/// skipping the unaffected prefix. returns exactly what a full trace
/// over `mirrors + new` would, except that a provably inert mirror
/// returns the existing trajectory relabeled `unchanged`.
///
/// the shortcut is only sound without splitters: branch points make
/// "first occurrence" ambiguous, so splitter grids take the full trace
/// unconditionally.
pub fn retrace(
    grid: &GridConfig,
    mirrors: &MirrorMap,
    existing: &Trajectory,
    new: Placement,
) -> Trajectory {
    debug_assert!(!mirrors.contains_key(&new.cell));
    let ref extended = extended(mirrors, new);
    if !grid.splitters().is_empty() {
        return trace(grid, extended);
    }
    match existing.find(new.cell) {
        // off-path mirrors are never struck
        None => existing.unchanged(),
        // the laser exits its own cell without entering it
        Some(0) => existing.unchanged(),
        Some(i) => {
            let (_, incoming) = existing.path()[i - 1];
            let outgoing = new.mirror.reflect(incoming);
            let (cell, recorded) = existing.path()[i];
            if outgoing == recorded {
                // the reflection coincides with the old heading
                existing.unchanged()
            } else {
                let prefix = existing.path()[..i].to_vec();
                Walker::resume(grid, extended, prefix, (cell, outgoing)).run()
            }
        }
    }
}

fn extended(mirrors: &MirrorMap, new: Placement) -> MirrorMap {
    let mut extended = mirrors.clone();
    extended.insert(new.cell, new.mirror);
    extended
}
