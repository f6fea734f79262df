//! Step-wise playback of a planned path.
//!
//! A timer collaborator outside the crate drives the player by calling
//! [PathPlayer::advance] once per tick; the player moves one cell per call
//! and reports where the agent now stands. The path itself stays immutable
//! for the whole run so it remains available for replay and diagnostics;
//! consumption happens through a cursor.

use std::time::Duration;

use grid_util::point::Point;
use thiserror::Error;

/// Lifecycle of a playback run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    InProgress,
    /// The agent reached the final path cell.
    Arrived,
    /// The run was stopped, either by the time limit or by [PathPlayer::abort].
    Aborted,
}

/// Out-of-sequence playback calls. Recoverable: the player state is left
/// untouched and the caller may reset or retry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("cannot start playback with an empty path")]
    EmptyPath,
    #[error("playback is already in progress")]
    AlreadyStarted,
}

/// Replays a computed path one cell per tick under a time budget.
#[derive(Clone, Debug)]
pub struct PathPlayer {
    path: Vec<Point>,
    cursor: usize,
    status: Status,
    time_limit: Duration,
}

impl PathPlayer {
    pub fn new(time_limit: Duration) -> PathPlayer {
        PathPlayer {
            path: Vec::new(),
            cursor: 0,
            status: Status::NotStarted,
            time_limit,
        }
    }

    /// Begins playback of `path`, whose first cell is the agent's position.
    ///
    /// A single-cell path means the agent already stands on the goal, so the
    /// run arrives without any [advance](Self::advance) calls. Restarting a
    /// finished player is allowed and resets it; restarting one that is still
    /// [Status::InProgress] is rejected.
    pub fn start(&mut self, path: Vec<Point>) -> Result<(), PlaybackError> {
        if self.status == Status::InProgress {
            return Err(PlaybackError::AlreadyStarted);
        }
        if path.is_empty() {
            return Err(PlaybackError::EmptyPath);
        }
        self.status = if path.len() == 1 {
            Status::Arrived
        } else {
            Status::InProgress
        };
        self.path = path;
        self.cursor = 0;
        Ok(())
    }

    /// Moves the agent to the next path cell and returns the new status.
    ///
    /// `elapsed` is the round time consumed so far, as measured by the caller's
    /// clock. Arrival is checked before the time limit, so a run that reaches
    /// the goal exactly when the budget runs out still counts as
    /// [Status::Arrived]. Calling this on a player that is not in progress is
    /// a no-op, never an error.
    pub fn advance(&mut self, elapsed: Duration) -> Status {
        if self.status != Status::InProgress {
            return self.status;
        }
        self.cursor += 1;
        if self.cursor == self.path.len() - 1 {
            self.status = Status::Arrived;
        } else if elapsed >= self.time_limit {
            self.status = Status::Aborted;
        }
        self.status
    }

    /// Stops the run. Also used when planning found no path at all, in which
    /// case the round resolves as aborted with zero advances. Idempotent, and
    /// a no-op on a player that already arrived.
    pub fn abort(&mut self) {
        if matches!(self.status, Status::NotStarted | Status::InProgress) {
            self.status = Status::Aborted;
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Index of the cell the agent currently occupies.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cell the agent currently occupies, if playback has started.
    pub fn current(&self) -> Option<Point> {
        if self.status == Status::NotStarted {
            return None;
        }
        self.path.get(self.cursor).copied()
    }

    /// The full planned path, unchanged since [start](Self::start).
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}
