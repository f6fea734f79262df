use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use treasure_path::{AstarPlanner, Round, WorldState};

// Generates a random 10x10 world and plays a full automatic round: the A*
// planner computes a route and the round is ticked every 200 simulated
// milliseconds until it ends, printing the agent position after each tick.

const GRID_SIZE: usize = 10;
const OBSTACLE_COUNT: usize = 25;
const TIME_LIMIT: Duration = Duration::from_secs(60);
const TICK: Duration = Duration::from_millis(200);

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let world = WorldState::generate(GRID_SIZE, OBSTACLE_COUNT, &mut rng).unwrap();
    println!("{}", world);

    let t0 = Instant::now();
    let mut round = Round::new(world, TIME_LIMIT, t0);
    round.start_auto(&AstarPlanner::new()).unwrap();

    let mut now = t0;
    let outcome = loop {
        if let Some(outcome) = round.tick(now) {
            break outcome;
        }
        now += TICK;
        println!(
            "t={:>5}ms agent at {:?}",
            round.clock().elapsed(now).as_millis(),
            round.agent()
        );
    };
    println!("Outcome: {:?}", outcome);
}
