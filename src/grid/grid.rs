use super::cell::Cell;
use super::direction::Direction;
use super::error::GridError;
use super::error::PlacementError;
use super::mirror::Placement;
use super::splitter::Splitter;
use crate::Arbitrary;
use std::collections::HashMap;
use std::collections::HashSet;

/// immutable puzzle geometry: bounds, laser emitter, obstacle and
/// splitter layout, and the mirror budget. constructed once per puzzle
/// and shared by reference through a whole optimization run.
#[derive(Debug, Clone)]
pub struct GridConfig {
    width: i32,
    height: i32,
    laser: Cell,
    direction: Direction,
    obstacles: HashSet<Cell>,
    splitters: HashMap<Cell, Splitter>,
    budget: usize,
}

impl GridConfig {
    pub fn new(
        width: i32,
        height: i32,
        laser: Cell,
        direction: Direction,
        obstacles: HashSet<Cell>,
        splitters: HashMap<Cell, Splitter>,
        budget: usize,
    ) -> Result<Self, GridError> {
        let grid = Self {
            width,
            height,
            laser,
            direction,
            obstacles,
            splitters,
            budget,
        };
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyGrid);
        }
        if !grid.contains(laser) {
            return Err(GridError::LaserOutOfBounds(laser));
        }
        if let Some(cell) = grid
            .obstacles
            .iter()
            .chain(grid.splitters.keys())
            .copied()
            .find(|c| !grid.contains(*c))
        {
            return Err(GridError::CellOutOfBounds(cell));
        }
        if grid.obstacles.contains(&laser) || grid.splitters.contains_key(&laser) {
            return Err(GridError::LaserOccluded(laser));
        }
        if let Some(cell) = grid
            .splitters
            .keys()
            .copied()
            .find(|c| grid.obstacles.contains(c))
        {
            return Err(GridError::SplitterOnObstacle(cell));
        }
        Ok(grid)
    }

    pub fn width(&self) -> i32 {
        self.width
    }
    pub fn height(&self) -> i32 {
        self.height
    }
    pub fn laser(&self) -> Cell {
        self.laser
    }
    pub fn direction(&self) -> Direction {
        self.direction
    }
    pub fn budget(&self) -> usize {
        self.budget
    }
    pub fn obstacles(&self) -> &HashSet<Cell> {
        &self.obstacles
    }
    pub fn splitters(&self) -> &HashMap<Cell, Splitter> {
        &self.splitters
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x() >= 0 && cell.x() < self.width && cell.y() >= 0 && cell.y() < self.height
    }
    pub fn obstacle(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }
    pub fn splitter(&self, cell: Cell) -> Option<Splitter> {
        self.splitters.get(&cell).copied()
    }

    /// whether a mirror may legally occupy this cell.
    pub fn open(&self, cell: Cell) -> bool {
        self.contains(cell)
            && cell != self.laser
            && !self.obstacles.contains(&cell)
            && !self.splitters.contains_key(&cell)
    }

    /// row-major scan of every cell in the grid.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    /// reject illegal mirror lists at the boundary: position legality,
    /// cell exclusivity, and the placement budget.
    pub fn validate(&self, placements: &[Placement]) -> Result<(), PlacementError> {
        if placements.len() > self.budget {
            return Err(PlacementError::BudgetExceeded {
                placed: placements.len(),
                budget: self.budget,
            });
        }
        let mut seen = HashSet::new();
        for placement in placements {
            if !self.open(placement.cell) {
                return Err(PlacementError::InvalidPosition(placement.cell));
            }
            if !seen.insert(placement.cell) {
                return Err(PlacementError::DuplicatePosition(placement.cell));
            }
        }
        Ok(())
    }
}

impl Arbitrary for GridConfig {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let (width, height) = (10, 10);
        let laser = Cell::new(rng.random_range(0..width), rng.random_range(0..height));
        let obstacles = (0..rng.random_range(0..20))
            .map(|_| Cell::new(rng.random_range(0..width), rng.random_range(0..height)))
            .filter(|c| *c != laser)
            .collect::<HashSet<_>>();
        Self::new(
            width,
            height,
            laser,
            Direction::random(),
            obstacles,
            HashMap::new(),
            rng.random_range(1..5),
        )
        .expect("random geometry is consistent")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::mirror::Mirror;

    fn empty_10x10() -> GridConfig {
        GridConfig::new(
            10,
            10,
            Cell::new(0, 1),
            Direction::Right,
            HashSet::new(),
            HashMap::new(),
            2,
        )
        .unwrap()
    }

    #[test]
    fn laser_must_be_inside() {
        let grid = GridConfig::new(
            5,
            5,
            Cell::new(5, 0),
            Direction::Left,
            HashSet::new(),
            HashMap::new(),
            1,
        );
        assert!(grid.unwrap_err() == GridError::LaserOutOfBounds(Cell::new(5, 0)));
    }

    #[test]
    fn obstacle_cannot_cover_laser() {
        let grid = GridConfig::new(
            5,
            5,
            Cell::new(2, 2),
            Direction::Up,
            HashSet::from([Cell::new(2, 2)]),
            HashMap::new(),
            1,
        );
        assert!(grid.unwrap_err() == GridError::LaserOccluded(Cell::new(2, 2)));
    }

    #[test]
    fn splitter_cannot_cover_obstacle() {
        let grid = GridConfig::new(
            5,
            5,
            Cell::new(0, 0),
            Direction::Right,
            HashSet::from([Cell::new(3, 3)]),
            HashMap::from([(Cell::new(3, 3), Splitter::new(Direction::Right))]),
            1,
        );
        assert!(grid.unwrap_err() == GridError::SplitterOnObstacle(Cell::new(3, 3)));
    }

    #[test]
    fn open_excludes_origin_and_bounds() {
        let grid = empty_10x10();
        assert!(!grid.open(grid.laser()));
        assert!(!grid.open(Cell::new(-1, 0)));
        assert!(!grid.open(Cell::new(10, 0)));
        assert!(grid.open(Cell::new(5, 5)));
    }

    #[test]
    fn validate_budget() {
        let grid = empty_10x10();
        let placements = (0..3)
            .map(|x| Placement::new(Cell::new(x + 1, 5), Mirror::Slash))
            .collect::<Vec<_>>();
        assert!(
            grid.validate(&placements)
                == Err(PlacementError::BudgetExceeded {
                    placed: 3,
                    budget: 2
                })
        );
    }

    #[test]
    fn validate_position_and_duplicates() {
        let grid = empty_10x10();
        let origin = Placement::new(grid.laser(), Mirror::Slash);
        assert!(grid.validate(&[origin]) == Err(PlacementError::InvalidPosition(grid.laser())));
        let twice = [
            Placement::new(Cell::new(4, 4), Mirror::Slash),
            Placement::new(Cell::new(4, 4), Mirror::Backslash),
        ];
        assert!(grid.validate(&twice) == Err(PlacementError::DuplicatePosition(Cell::new(4, 4))));
        let legal = [
            Placement::new(Cell::new(4, 4), Mirror::Slash),
            Placement::new(Cell::new(5, 4), Mirror::Backslash),
        ];
        assert!(grid.validate(&legal) == Ok(()));
    }
}
