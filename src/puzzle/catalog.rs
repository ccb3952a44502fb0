use crate::grid::Cell;
use crate::grid::Direction;
use crate::grid::GridConfig;
use std::collections::HashMap;
use std::collections::HashSet;

/// built-in puzzle templates, for the CLI and for fixtures. the daily
/// rotation and level-file emission live in the surrounding tooling.
pub fn all() -> Vec<(&'static str, GridConfig)> {
    vec![
        ("corridor-run", corridor_run()),
        ("zigzag-barriers", zigzag_barriers()),
        ("central-fortress", central_fortress()),
        ("cross-pattern", cross_pattern()),
        ("spiral-inward", spiral_inward()),
    ]
}

pub fn lookup(name: &str) -> Option<GridConfig> {
    all()
        .into_iter()
        .find(|(known, _)| *known == name)
        .map(|(_, grid)| grid)
}

fn build(
    width: i32,
    height: i32,
    laser: (i32, i32),
    direction: Direction,
    obstacles: Vec<(i32, i32)>,
    budget: usize,
) -> GridConfig {
    GridConfig::new(
        width,
        height,
        Cell::new(laser.0, laser.1),
        direction,
        obstacles.into_iter().map(Cell::from).collect::<HashSet<_>>(),
        HashMap::new(),
        budget,
    )
    .expect("catalog geometry is consistent")
}

fn corridor_run() -> GridConfig {
    build(
        10,
        10,
        (0, 1),
        Direction::Right,
        vec![
            (2, 0), (3, 0), (4, 0),
            (2, 2), (3, 2), (4, 2),
            (6, 3), (7, 3), (8, 3),
            (6, 5), (7, 5), (8, 5),
            (1, 7), (2, 7), (3, 7),
        ],
        5,
    )
}

fn zigzag_barriers() -> GridConfig {
    build(
        10,
        10,
        (0, 0),
        Direction::Right,
        vec![
            (3, 0), (3, 1), (3, 2),
            (5, 3), (5, 4), (5, 5),
            (7, 6), (7, 7), (7, 8),
            (2, 5), (2, 6),
            (8, 2), (9, 2),
        ],
        6,
    )
}

fn central_fortress() -> GridConfig {
    build(
        10,
        10,
        (0, 5),
        Direction::Right,
        vec![
            (4, 3), (5, 3), (6, 3),
            (4, 4), (6, 4),
            (4, 5), (6, 5),
            (4, 6), (5, 6), (6, 6),
            (2, 2), (8, 2),
            (2, 8), (8, 8),
        ],
        5,
    )
}

fn cross_pattern() -> GridConfig {
    build(
        10,
        10,
        (0, 9),
        Direction::Up,
        vec![
            (5, 2), (5, 3), (5, 4),
            (5, 6), (5, 7), (5, 8),
            (2, 5), (3, 5), (4, 5),
            (6, 5), (7, 5), (8, 5),
            (1, 1), (9, 1),
            (1, 9), (9, 9),
        ],
        5,
    )
}

/// a 15x20 spiral that forces the beam to wind inward.
fn spiral_inward() -> GridConfig {
    let obstacles = std::iter::empty()
        .chain((0..13).map(|x| (x, 2)))
        .chain((2..17).map(|y| (13, y)))
        .chain((3..14).map(|x| (x, 17)))
        .chain((5..18).map(|y| (3, y)))
        .chain((3..11).map(|x| (x, 5)))
        .chain((5..14).map(|y| (10, y)))
        .chain((6..11).map(|x| (x, 14)))
        .chain((8..15).map(|y| (6, y)))
        .chain((6..9).map(|x| (x, 8)))
        .collect::<Vec<_>>();
    build(15, 20, (0, 0), Direction::Right, obstacles, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_is_consistent() {
        // build() panics on inconsistent geometry, so constructing the
        // whole catalog is the integrity check
        assert!(all().len() == 5);
    }

    #[test]
    fn lookup_by_name() {
        assert!(lookup("corridor-run").is_some());
        assert!(lookup("corridor-run").unwrap().budget() == 5);
        assert!(lookup("nonesuch").is_none());
    }

    #[test]
    fn spiral_keeps_origin_clear() {
        let grid = lookup("spiral-inward").unwrap();
        assert!(grid.width() == 15 && grid.height() == 20);
        assert!(!grid.obstacle(grid.laser()));
    }
}
