use grid_util::point::Point;
use treasure_path::{AstarPlanner, BfsPlanner, Planner, WorldState, START};

// In this demo a path is found on a 3x3 grid with shape
//  ___
// |S# |
// | # |
// | G |
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Movement is 4-connected, so both planners descend the open left column.

fn main() {
    let goal = Point::new(1, 2);
    let blocked = [Point::new(1, 0), Point::new(1, 1)];
    let world = WorldState::from_blocked(3, goal, &blocked).unwrap();
    println!("{}", world);

    let bfs_path = BfsPlanner::new().plan(&world, START, goal).unwrap();
    println!("BFS path:");
    for p in &bfs_path {
        println!("{:?}", p);
    }

    let astar_path = AstarPlanner::new().plan(&world, START, goal).unwrap();
    println!("A* path:");
    for p in &astar_path {
        println!("{:?}", p);
    }
}
