//! Round management: one aggregate owning the static world, the agent, the
//! playback state and the clock.
//!
//! The surrounding game loop creates a [Round] when a round starts, drives it
//! through [Round::attempt_move] (manual play) or [Round::start_auto] plus
//! [Round::tick] (automatic play), and turns the returned [Outcome] into a
//! victory or loss screen. Rendering, input translation and the tick cadence
//! all live outside this crate; the round only consumes the "now" instants it
//! is handed.

use std::time::{Duration, Instant};

use grid_util::point::Point;
use log::info;

use crate::planner::Planner;
use crate::playback::{PathPlayer, PlaybackError, Status};
use crate::world::{Direction, WorldState};
use crate::START;

/// Wall-clock tracking for a single round. The caller supplies every "now"
/// instant, which keeps ticks deterministic in tests.
#[derive(Clone, Copy, Debug)]
pub struct RoundClock {
    started_at: Instant,
}

impl RoundClock {
    pub fn new(now: Instant) -> RoundClock {
        RoundClock { started_at: now }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.duration_since(self.started_at)
    }

    /// Whole seconds since the round started, for the on-screen timer.
    pub fn elapsed_seconds(&self, now: Instant) -> u64 {
        self.elapsed(now).as_secs()
    }
}

/// Terminal result of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The agent reached the goal in time.
    Won,
    /// The time budget ran out first.
    TimedOut,
    /// Planning established that no route to the goal exists.
    NoPathFound,
}

/// One game round. Owns everything mutable so no state leaks between rounds:
/// dropping the round discards the agent position, playback and clock along
/// with it.
#[derive(Clone, Debug)]
pub struct Round {
    world: WorldState,
    agent: Point,
    player: PathPlayer,
    clock: RoundClock,
    time_limit: Duration,
    outcome: Option<Outcome>,
}

impl Round {
    /// Starts a round over `world` with the agent at [START] and a fresh
    /// clock anchored at `now`.
    pub fn new(world: WorldState, time_limit: Duration, now: Instant) -> Round {
        Round {
            world,
            agent: START,
            player: PathPlayer::new(time_limit),
            clock: RoundClock::new(now),
            time_limit,
            outcome: None,
        }
    }

    /// Manual play: steps the agent one cell in `direction` if the
    /// destination is in bounds and unblocked. Returns whether the move was
    /// performed. Reaching the goal wins the round.
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        let destination = direction.apply(self.agent);
        if !self.world.can_move_to(destination) {
            return false;
        }
        self.agent = destination;
        if self.agent == self.world.goal() {
            self.outcome = Some(Outcome::Won);
        }
        true
    }

    /// Automatic play: plans a route from the agent to the goal and hands it
    /// to the player. A world without a route resolves immediately to
    /// [Outcome::NoPathFound] with zero playback steps.
    pub fn start_auto<P: Planner>(&mut self, planner: &P) -> Result<(), PlaybackError> {
        match planner.plan(&self.world, self.agent, self.world.goal()) {
            Some(path) => {
                self.player.start(path)?;
                self.absorb_playback();
                Ok(())
            }
            None => {
                info!("no route from {} to {}", self.agent, self.world.goal());
                self.player.abort();
                self.outcome = Some(Outcome::NoPathFound);
                Ok(())
            }
        }
    }

    /// Timer collaborator entry point, invoked once per tick. Advances
    /// playback when one is running and enforces the round time limit either
    /// way. Returns the outcome once the round has ended; ticking a finished
    /// round changes nothing.
    pub fn tick(&mut self, now: Instant) -> Option<Outcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }
        let elapsed = self.clock.elapsed(now);
        if self.player.status() == Status::InProgress {
            self.player.advance(elapsed);
            self.absorb_playback();
        } else if elapsed >= self.time_limit {
            self.outcome = Some(Outcome::TimedOut);
        }
        self.outcome
    }

    /// Folds the player's state back into the round: the agent follows the
    /// playback position, arrival wins and an aborted run times out.
    fn absorb_playback(&mut self) {
        if let Some(cell) = self.player.current() {
            self.agent = cell;
        }
        match self.player.status() {
            Status::Arrived => self.outcome = Some(Outcome::Won),
            Status::Aborted => self.outcome = Some(Outcome::TimedOut),
            Status::NotStarted | Status::InProgress => {}
        }
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Cell the agent currently occupies.
    pub fn agent(&self) -> Point {
        self.agent
    }

    pub fn goal(&self) -> Point {
        self.world.goal()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn player(&self) -> &PathPlayer {
        &self.player
    }

    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}
