//! Fuzzes the planners by checking for many random worlds that a path is
//! found exactly when the goal is reachable through the connected components,
//! that both planners agree on the path length, and that every returned path
//! is a valid simple 4-connected route over free cells.

use super::*;
use rand::prelude::*;

fn random_world(n: usize, rng: &mut StdRng) -> WorldState {
    let goal = Point::new(n as i32 - 1, n as i32 - 1);
    let mut blocked = Vec::new();
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            let cell = Point::new(x, y);
            if cell != START && cell != goal && rng.gen_bool(0.4) {
                blocked.push(cell);
            }
        }
    }
    WorldState::from_blocked(n, goal, &blocked).unwrap()
}

fn assert_valid_path(world: &WorldState, path: &[Point], start: Point, goal: Point) {
    assert_eq!(path[0], start);
    assert_eq!(*path.last().unwrap(), goal);
    for window in path.windows(2) {
        let dx = (window[0].x - window[1].x).abs();
        let dy = (window[0].y - window[1].y).abs();
        assert_eq!(
            dx + dy,
            1,
            "step {} -> {} is not a unit move",
            window[0],
            window[1]
        );
    }
    for &cell in path {
        assert!(world.can_move_to(cell), "path visits blocked cell {}", cell);
    }
    let mut seen = path.to_vec();
    seen.sort_by_key(|p| (p.x, p.y));
    seen.dedup();
    assert_eq!(seen.len(), path.len(), "path repeats a cell");
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_WORLDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    let bfs = BfsPlanner::new();
    let astar = AstarPlanner::new();

    let start = START;
    let goal = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_WORLDS {
        let world = random_world(N, &mut rng);
        let reachable = !world.unreachable(&start, &goal);
        let bfs_path = bfs.plan(&world, start, goal);
        let astar_path = astar.plan(&world, start, goal);
        // Show the world if the planners and components disagree
        if bfs_path.is_some() != reachable || astar_path.is_some() != reachable {
            println!("{}", world);
        }
        assert!(bfs_path.is_some() == reachable);
        assert!(astar_path.is_some() == reachable);
        if let (Some(bfs_path), Some(astar_path)) = (bfs_path, astar_path) {
            assert_valid_path(&world, &bfs_path, start, goal);
            assert_valid_path(&world, &astar_path, start, goal);
            if bfs_path.len() != astar_path.len() {
                println!("{}", world);
                println!("BFS path: {:?}\nA* path: {:?}", bfs_path, astar_path);
            }
            assert_eq!(bfs_path.len(), astar_path.len());
        }
    }
}

#[test]
fn fuzz_generated_worlds() {
    const N: usize = 10;
    const OBSTACLES: usize = 25;
    const N_WORLDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(1);
    let bfs = BfsPlanner::new();
    let astar = AstarPlanner::new();

    for _ in 0..N_WORLDS {
        let world = WorldState::generate(N, OBSTACLES, &mut rng).unwrap();
        assert_eq!(world.blocked_cells().len(), OBSTACLES);
        assert!(world.can_move_to(START));
        assert!(world.can_move_to(world.goal()));

        let goal = world.goal();
        let bfs_path = bfs.plan(&world, START, goal);
        let astar_path = astar.plan(&world, START, goal);
        assert_eq!(bfs_path.is_some(), astar_path.is_some());
        if let (Some(bfs_path), Some(astar_path)) = (bfs_path, astar_path) {
            assert_valid_path(&world, &bfs_path, START, goal);
            assert_valid_path(&world, &astar_path, START, goal);
            assert_eq!(bfs_path.len(), astar_path.len());
        }
    }
}
