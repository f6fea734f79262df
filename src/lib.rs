//! # treasure_path
//!
//! Pathfinding and timed path playback for a treasure-hunt game on a square
//! grid. Two swappable planners sit behind the common [Planner] contract: a
//! breadth-first planner ([BfsPlanner]) and an
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) planner
//! ([AstarPlanner]) guided by the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry).
//! Movement is 4-connected with uniform step cost, so both planners return
//! shortest paths of identical length. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! A computed path is consumed by a [PathPlayer], which a timer collaborator
//! drives one cell per tick until arrival or time expiry; [Round] bundles the
//! world, agent, playback and clock state of one game round.

pub mod planner;
pub mod playback;
pub mod round;
mod search;
pub mod world;

#[cfg(test)]
mod fuzz_test;

use grid_util::point::Point;

pub use planner::{AstarPlanner, BfsPlanner, Planner};
pub use playback::{PathPlayer, PlaybackError, Status};
pub use round::{Outcome, Round, RoundClock};
pub use world::{ConfigurationError, Direction, WorldState};

/// The agent spawns at the grid origin every round.
pub const START: Point = Point { x: 0, y: 0 };
