//! Swappable path planners behind a common contract.
//!
//! Both planners are optimal on the uniform-cost 4-connected grid, so for any
//! world they return paths of identical length; only the concrete cell
//! sequence may differ when several shortest paths exist.

use grid_util::point::Point;

use crate::world::WorldState;

pub mod astar;
pub mod bfs;

pub use astar::AstarPlanner;
pub use bfs::BfsPlanner;

/// Sum of absolute coordinate differences. Admissible and consistent on a
/// 4-connected grid with unit step cost.
pub fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

pub trait Planner {
    /// Planner-specific search between two distinct, reachable cells.
    /// Callers should go through [plan](Self::plan), which handles the
    /// trivial and degenerate cases first.
    fn search(&self, world: &WorldState, start: Point, goal: Point) -> Option<Vec<Point>>;

    /// Computes a shortest path from `start` to `goal`, both endpoints
    /// included. Returns [None] when no route exists; that is a legitimate
    /// planning outcome, not an error.
    fn plan(&self, world: &WorldState, start: Point, goal: Point) -> Option<Vec<Point>> {
        if !world.can_move_to(start) || !world.can_move_to(goal) {
            return None;
        }
        if start == goal {
            return Some(vec![start]);
        }
        // Skip the search entirely if the components already rule out a route.
        if world.unreachable(&start, &goal) {
            return None;
        }
        self.search(world, start, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::START;

    fn planners() -> Vec<Box<dyn Planner>> {
        vec![Box::new(BfsPlanner::new()), Box::new(AstarPlanner::new())]
    }

    #[test]
    fn equal_start_goal_is_a_single_cell_path() {
        let world = WorldState::from_blocked(3, Point::new(2, 2), &[]).unwrap();
        for planner in planners() {
            let path = planner.plan(&world, START, START).unwrap();
            assert_eq!(path, vec![START]);
        }
    }

    #[test]
    fn blocked_or_out_of_bounds_endpoints_yield_no_path() {
        let wall = Point::new(1, 1);
        let world = WorldState::from_blocked(3, Point::new(2, 2), &[wall]).unwrap();
        for planner in planners() {
            assert!(planner.plan(&world, START, wall).is_none());
            assert!(planner.plan(&world, wall, world.goal()).is_none());
            assert!(planner.plan(&world, START, Point::new(3, 3)).is_none());
            assert!(planner.plan(&world, Point::new(-1, 0), world.goal()).is_none());
        }
    }

    /// Walling off the middle column separates the halves of the grid.
    #[test]
    fn separated_goal_is_not_found() {
        let goal = Point::new(2, 0);
        let blocked = [Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)];
        let world = WorldState::from_blocked(3, goal, &blocked).unwrap();
        for planner in planners() {
            assert!(planner.plan(&world, START, goal).is_none());
        }
    }

    /// A closed ring of obstacles around the goal leaves no gap to enter.
    #[test]
    fn surrounded_goal_is_not_found() {
        let goal = Point::new(2, 2);
        let ring = [
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(3, 1),
            Point::new(1, 2),
            Point::new(3, 2),
            Point::new(1, 3),
            Point::new(2, 3),
            Point::new(3, 3),
        ];
        let world = WorldState::from_blocked(5, goal, &ring).unwrap();
        for planner in planners() {
            assert!(planner.plan(&world, START, goal).is_none());
        }
    }

    /// Column 0 is fully open, so the shortest route is the straight descent
    /// [(0,0), (0,1), (0,2)] regardless of planner.
    #[test]
    fn planners_agree_on_the_open_column() {
        let goal = Point::new(0, 2);
        let blocked = [Point::new(1, 0), Point::new(1, 1)];
        let world = WorldState::from_blocked(3, goal, &blocked).unwrap();
        for planner in planners() {
            let path = planner.plan(&world, START, goal).unwrap();
            assert_eq!(path, vec![START, Point::new(0, 1), Point::new(0, 2)]);
        }
    }
}
