use grid_util::point::Point;

use crate::planner::{manhattan_distance, Planner};
use crate::search::best_first;
use crate::world::WorldState;

/// A* planner: orders its frontier by accumulated step count plus the
/// Manhattan distance to the goal.
///
/// On a uniform-cost 4-grid the heuristic is admissible and consistent, so
/// the result matches the breadth-first planner in length; only the node
/// exploration order differs. The tie-break between equal-estimate frontier
/// entries follows the heap's structural order and is not a contract.
#[derive(Clone, Debug, Default)]
pub struct AstarPlanner;

impl AstarPlanner {
    pub fn new() -> AstarPlanner {
        AstarPlanner
    }
}

impl Planner for AstarPlanner {
    fn search(&self, world: &WorldState, start: Point, goal: Point) -> Option<Vec<Point>> {
        best_first(
            &start,
            |node| {
                world
                    .open_neighbours(*node)
                    .into_iter()
                    .map(|neighbour| (neighbour, 1))
            },
            |node| manhattan_distance(node, &goal),
            |node| *node == goal,
        )
        .map(|(path, _cost)| path)
    }
}
