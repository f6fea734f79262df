use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::Rng;
use thiserror::Error;

use crate::START;

/// Cardinal movement directions on the 4-connected grid.
///
/// [Direction::ALL] is the order in which planners expand neighbours, which
/// fixes the tie-break among equal-length paths. Any order is equally correct,
/// but keeping it stable keeps planning deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (dx, dy) offset of a single step, with y growing downwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The cell one step from `cell` in this direction. May be out of bounds.
    pub fn apply(self, cell: Point) -> Point {
        let (dx, dy) = self.offset();
        Point::new(cell.x + dx, cell.y + dy)
    }
}

/// Invalid world parameters detected at round start.
///
/// These are fatal for the round being configured but recoverable for the
/// process: the round-management layer reports them and starts over.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("grid size must be at least 2 to fit distinct start and goal cells")]
    GridTooSmall,
    #[error("requested {requested} obstacles but only {free} cells are free besides start and goal")]
    TooManyObstacles { requested: usize, free: usize },
    #[error("cell {cell} lies outside the {size}x{size} grid")]
    OutOfBounds { cell: Point, size: usize },
    #[error("cell {cell} collides with the start or goal cell")]
    CellCollision { cell: Point },
}

/// Static state of one game round: a square occupancy grid, the goal cell and
/// pre-computed connected components over the free cells.
///
/// [WorldState] is immutable once constructed; obstacles and the goal are
/// generated once per round and never change mid-round. The [UnionFind]
/// components let planners reject unreachable goals in near-constant time
/// instead of flood-filling the whole grid.
#[derive(Clone, Debug)]
pub struct WorldState {
    size: usize,
    grid: BoolGrid,
    goal: Point,
    components: UnionFind<usize>,
}

impl WorldState {
    /// Generates a fresh round world: a uniformly random goal plus
    /// `obstacle_count` distinct uniformly random blocked cells, none of which
    /// overlap each other, the goal, or the fixed start at [START].
    ///
    /// Placement retries on collisions, which terminates because a successful
    /// configuration is checked to exist up front: requesting more obstacles
    /// than `size * size - 2` fails with
    /// [ConfigurationError::TooManyObstacles].
    pub fn generate<R: Rng>(
        size: usize,
        obstacle_count: usize,
        rng: &mut R,
    ) -> Result<WorldState, ConfigurationError> {
        if size < 2 {
            return Err(ConfigurationError::GridTooSmall);
        }
        let free = size * size - 2;
        if obstacle_count > free {
            return Err(ConfigurationError::TooManyObstacles {
                requested: obstacle_count,
                free,
            });
        }
        let goal = loop {
            let candidate = Point::new(
                rng.gen_range(0..size) as i32,
                rng.gen_range(0..size) as i32,
            );
            if candidate != START {
                break candidate;
            }
        };
        let mut grid = BoolGrid::new(size, size, false);
        let mut placed = 0;
        while placed < obstacle_count {
            let candidate = Point::new(
                rng.gen_range(0..size) as i32,
                rng.gen_range(0..size) as i32,
            );
            if candidate == START || candidate == goal {
                continue;
            }
            if grid.get(candidate.x as usize, candidate.y as usize) {
                continue;
            }
            grid.set(candidate.x as usize, candidate.y as usize, true);
            placed += 1;
        }
        info!(
            "generated {}x{} world with {} obstacles, goal {}",
            size, size, obstacle_count, goal
        );
        Ok(WorldState::from_parts(size, grid, goal))
    }

    /// Builds a world from an explicit obstacle list, validating the same
    /// invariants [generate](Self::generate) maintains by construction.
    /// Intended for tests, demos and externally authored layouts.
    pub fn from_blocked(
        size: usize,
        goal: Point,
        blocked: &[Point],
    ) -> Result<WorldState, ConfigurationError> {
        if size < 2 {
            return Err(ConfigurationError::GridTooSmall);
        }
        let in_bounds = |p: Point| {
            p.x >= 0 && p.y >= 0 && (p.x as usize) < size && (p.y as usize) < size
        };
        if !in_bounds(goal) {
            return Err(ConfigurationError::OutOfBounds { cell: goal, size });
        }
        if goal == START {
            return Err(ConfigurationError::CellCollision { cell: goal });
        }
        let mut grid = BoolGrid::new(size, size, false);
        for &cell in blocked {
            if !in_bounds(cell) {
                return Err(ConfigurationError::OutOfBounds { cell, size });
            }
            if cell == START || cell == goal {
                return Err(ConfigurationError::CellCollision { cell });
            }
            grid.set(cell.x as usize, cell.y as usize, true);
        }
        Ok(WorldState::from_parts(size, grid, goal))
    }

    fn from_parts(size: usize, grid: BoolGrid, goal: Point) -> WorldState {
        let mut world = WorldState {
            size,
            grid,
            goal,
            components: UnionFind::new(size * size),
        };
        world.generate_components();
        world
    }

    /// Side length of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The round's goal cell.
    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn in_bounds(&self, cell: Point) -> bool {
        cell.x >= 0 && cell.y >= 0 && self.grid.index_in_bounds(cell.x as usize, cell.y as usize)
    }

    pub fn is_blocked(&self, cell: Point) -> bool {
        self.in_bounds(cell) && self.grid.get_point(cell)
    }

    /// Whether an agent may occupy `cell`: in bounds and unblocked.
    pub fn can_move_to(&self, cell: Point) -> bool {
        self.in_bounds(cell) && !self.grid.get_point(cell)
    }

    /// Free neighbours of `cell` in the canonical [Direction::ALL] order.
    pub fn open_neighbours(&self, cell: Point) -> Vec<Point> {
        Direction::ALL
            .into_iter()
            .map(|d| d.apply(cell))
            .filter(|&n| self.can_move_to(n))
            .collect()
    }

    /// Checks if start and goal are not on the same connected component.
    /// Out-of-bounds cells are unreachable by definition.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            let start_ix = self.cell_ix(start);
            let goal_ix = self.cell_ix(goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are on different components", start, goal);
                true
            }
        } else {
            true
        }
    }

    /// Snapshot of all blocked cells, for renderers and diagnostics.
    pub fn blocked_cells(&self) -> Vec<Point> {
        let mut cells = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.grid.get(x, y) {
                    cells.push(Point::new(x as i32, y as i32));
                }
            }
        }
        cells
    }

    fn cell_ix(&self, cell: &Point) -> usize {
        self.grid.get_ix(cell.x as usize, cell.y as usize)
    }

    /// Links up free grid neighbours into the same [UnionFind] components.
    /// Unioning only the right and down neighbour of each cell covers every
    /// 4-connected edge exactly once.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.size * self.size);
        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let point = Point::new(x, y);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.cell_ix(&point);
                let neighbours = [Point::new(x + 1, y), Point::new(x, y + 1)]
                    .into_iter()
                    .filter(|p| self.can_move_to(*p))
                    .map(|p| self.cell_ix(&p))
                    .collect::<Vec<usize>>();
                for ix in neighbours {
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let p = Point::new(x, y);
                if p == START {
                    write!(f, "S")?;
                } else if p == self.goal {
                    write!(f, "G")?;
                } else if self.is_blocked(p) {
                    write!(f, "#")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
