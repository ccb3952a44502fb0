use crate::grid::Cell;
use crate::grid::Direction;
use crate::grid::GridConfig;
use crate::grid::Mirror;
use crate::grid::Placement;
use crate::grid::Splitter;
use crate::search::Solution;
use serde::Deserialize;
use serde::Serialize;

/// the published puzzle shape consumed from and emitted to the
/// surrounding tooling. a thin serde layer over the domain types;
/// level files and date selection stay outside the solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleConfig {
    pub width: i32,
    pub height: i32,
    pub laser: LaserSpec,
    #[serde(default)]
    pub obstacles: Vec<Coordinate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub splitters: Vec<SplitterSpec>,
    pub mirror_budget: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaserSpec {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitterSpec {
    pub x: i32,
    pub y: i32,
    pub orientation: Direction,
}

/// a mirror in the published output shape, drawn as "\\" or "/".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MirrorSpec {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub kind: char,
}

/// the optimizer's published result shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub best_length: usize,
    pub mirrors: Vec<MirrorSpec>,
}

impl TryFrom<PuzzleConfig> for GridConfig {
    type Error = crate::grid::GridError;
    fn try_from(puzzle: PuzzleConfig) -> Result<Self, Self::Error> {
        GridConfig::new(
            puzzle.width,
            puzzle.height,
            Cell::new(puzzle.laser.x, puzzle.laser.y),
            puzzle.laser.direction,
            puzzle
                .obstacles
                .iter()
                .map(|c| Cell::new(c.x, c.y))
                .collect(),
            puzzle
                .splitters
                .iter()
                .map(|s| (Cell::new(s.x, s.y), Splitter::new(s.orientation)))
                .collect(),
            puzzle.mirror_budget,
        )
    }
}

impl From<&GridConfig> for PuzzleConfig {
    fn from(grid: &GridConfig) -> Self {
        let mut obstacles = grid
            .obstacles()
            .iter()
            .map(|c| Coordinate { x: c.x(), y: c.y() })
            .collect::<Vec<_>>();
        obstacles.sort_by_key(|c| (c.y, c.x));
        let mut splitters = grid
            .splitters()
            .iter()
            .map(|(c, s)| SplitterSpec {
                x: c.x(),
                y: c.y(),
                orientation: s.orientation(),
            })
            .collect::<Vec<_>>();
        splitters.sort_by_key(|s| (s.y, s.x));
        Self {
            width: grid.width(),
            height: grid.height(),
            laser: LaserSpec {
                x: grid.laser().x(),
                y: grid.laser().y(),
                direction: grid.direction(),
            },
            obstacles,
            splitters,
            mirror_budget: grid.budget(),
        }
    }
}

impl From<&Solution> for Answer {
    fn from(solution: &Solution) -> Self {
        Self {
            best_length: solution.length(),
            mirrors: solution
                .mirrors()
                .iter()
                .map(|p| MirrorSpec {
                    x: p.cell.x(),
                    y: p.cell.y(),
                    kind: char::from(p.mirror),
                })
                .collect(),
        }
    }
}

impl TryFrom<Answer> for Solution {
    type Error = String;
    fn try_from(answer: Answer) -> Result<Self, Self::Error> {
        let mirrors = answer
            .mirrors
            .iter()
            .map(|m| Ok(Placement::new(Cell::new(m.x, m.y), Mirror::try_from(m.kind)?)))
            .collect::<Result<Vec<_>, String>>()?;
        Ok(Solution::new(answer.best_length, mirrors))
    }
}
