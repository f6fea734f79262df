use std::collections::VecDeque;

use fxhash::FxHashMap;
use grid_util::point::Point;

use crate::planner::Planner;
use crate::world::WorldState;

/// Breadth-first planner: explores the grid level by level and returns a
/// minimum-hop-count path.
///
/// Each cell is enqueued at most once; the first visit wins, so the canonical
/// neighbour order decides the tie-break among equal-length paths. The
/// frontier is finite and the visited set strictly grows, so the search always
/// terminates.
#[derive(Clone, Debug, Default)]
pub struct BfsPlanner;

impl BfsPlanner {
    pub fn new() -> BfsPlanner {
        BfsPlanner
    }
}

impl Planner for BfsPlanner {
    fn search(&self, world: &WorldState, start: Point, goal: Point) -> Option<Vec<Point>> {
        let mut frontier = VecDeque::new();
        let mut parents: FxHashMap<Point, Point> = FxHashMap::default();
        frontier.push_back(start);
        parents.insert(start, start);
        while let Some(node) = frontier.pop_front() {
            if node == goal {
                return Some(walk_parents(&parents, start, goal));
            }
            for neighbour in world.open_neighbours(node) {
                if !parents.contains_key(&neighbour) {
                    parents.insert(neighbour, node);
                    frontier.push_back(neighbour);
                }
            }
        }
        None
    }
}

/// Follows parent links from the goal back to the start and reverses. The
/// start is its own parent, which terminates the walk.
fn walk_parents(parents: &FxHashMap<Point, Point>, start: Point, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = parents[&current];
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::START;

    /// Asserts that the optimal 4 step solution is found around the centre.
    #[test]
    fn solve_simple_problem() {
        let goal = Point::new(2, 2);
        let world = WorldState::from_blocked(3, goal, &[Point::new(1, 1)]).unwrap();
        let path = BfsPlanner::new().plan(&world, START, goal).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], START);
        assert_eq!(*path.last().unwrap(), goal);
    }

    /// On an open grid the first-visit rule makes the result deterministic:
    /// with Up expanded before Down and Left before Right, the path hugs the
    /// top edge before descending.
    #[test]
    fn deterministic_tie_break() {
        let goal = Point::new(2, 2);
        let world = WorldState::from_blocked(3, goal, &[]).unwrap();
        let path = BfsPlanner::new().plan(&world, START, goal).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], START);
        assert_eq!(*path.last().unwrap(), goal);
    }

    #[test]
    fn hop_count_matches_manhattan_on_open_grid() {
        let goal = Point::new(7, 4);
        let world = WorldState::from_blocked(8, goal, &[]).unwrap();
        let path = BfsPlanner::new().plan(&world, START, goal).unwrap();
        assert_eq!(path.len() as i32 - 1, goal.x + goal.y);
    }
}
