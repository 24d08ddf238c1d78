//! Game loop - drives the simulation from ticks and player input
//!
//! The loop owns the grid, the piece controller, the piece source and the
//! tick timer. Timer ticks and player actions are the only two entry points;
//! callers serialize them (one handler runs to completion before the next).

use serde::Serialize;
use tracing::{debug, info};

use crate::controller::{ActivePiece, PieceController};
use crate::grid::Grid;
use crate::rng::{PieceSource, RandomPieces};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, TICK_MS};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Created, waiting for `start`
    Idle,
    Running,
    /// Ended by `stop`
    Stopped,
    /// A new piece could not be spawned
    GameOver,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running
    Ignored,
    /// The active piece moved down one row
    Descended,
    /// The active piece landed, full rows were cleared and the next piece spawned
    Locked { lines_cleared: u8 },
    /// The active piece landed and the next piece had no room
    GameOver,
}

/// Fixed-period timer fed with elapsed wall-clock milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    period_ms: u32,
    elapsed_ms: u32,
}

impl TickTimer {
    /// A zero period is clamped to 1ms.
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Accumulate `elapsed_ms`; returns how many periods completed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.elapsed_ms.saturating_add(elapsed_ms);
        self.elapsed_ms = total % self.period_ms;
        total / self.period_ms
    }

    /// Time left until the next period completes
    pub fn remaining_ms(&self) -> u32 {
        self.period_ms - self.elapsed_ms
    }

    /// Restart the current period from zero
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

#[derive(Debug, Clone)]
pub struct GameLoop<S = RandomPieces> {
    grid: Grid,
    controller: PieceController,
    source: S,
    status: GameStatus,
    timer: TickTimer,
}

impl GameLoop<RandomPieces> {
    /// Create a game with uniformly random pieces and the default tick period
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomPieces::new(seed), TICK_MS)
    }
}

impl<S: PieceSource> GameLoop<S> {
    pub fn with_source(source: S, tick_ms: u32) -> Self {
        Self {
            grid: Grid::new(),
            controller: PieceController::new(),
            source,
            status: GameStatus::Idle,
            timer: TickTimer::new(tick_ms),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access, for setting up positions before `start`.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.controller.active()
    }

    pub fn controller(&self) -> &PieceController {
        &self.controller
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn tick_ms(&self) -> u32 {
        self.timer.period_ms()
    }

    /// Milliseconds until the next natural tick
    pub fn ms_until_tick(&self) -> u32 {
        self.timer.remaining_ms()
    }

    /// Start the game and spawn the first piece. Only valid once, from `Idle`.
    pub fn start(&mut self) {
        if self.status != GameStatus::Idle {
            return;
        }
        self.status = GameStatus::Running;
        self.timer.reset();
        info!(tick_ms = self.timer.period_ms(), "game started");
        self.spawn_next();
    }

    /// End a running game. Ticks and input are ignored afterwards.
    pub fn stop(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.status = GameStatus::Stopped;
        info!("game stopped");
    }

    /// Feed elapsed wall-clock time; runs one tick per completed period.
    ///
    /// Returns the number of ticks that ran.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let due = self.timer.advance(elapsed_ms);
        let mut ran = 0;
        while ran < due && self.is_running() {
            self.on_tick();
            ran += 1;
        }
        ran
    }

    /// One gravity step: descend, or settle the piece and spawn the next one.
    pub fn on_tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        if !self.controller.has_landed(&self.grid) {
            self.controller.translate(&mut self.grid, Direction::Down);
            return TickOutcome::Descended;
        }

        if let Some(piece) = self.controller.lock() {
            debug!(
                kind = piece.kind.class_name(),
                row = piece.anchor.row,
                col = piece.anchor.col,
                "piece landed"
            );
        }

        let cleared = self.grid.clear_completed_lines();
        if !cleared.is_empty() {
            debug!(rows = ?cleared.as_slice(), "cleared lines");
        }

        if self.spawn_next() {
            TickOutcome::Locked {
                lines_cleared: cleared.len() as u8,
            }
        } else {
            TickOutcome::GameOver
        }
    }

    /// Apply a player action. Returns `true` if the action changed the game.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.is_running() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.controller.translate(&mut self.grid, Direction::Left),
            GameAction::MoveRight => self.controller.translate(&mut self.grid, Direction::Right),
            GameAction::MoveDown => self.controller.translate(&mut self.grid, Direction::Down),
            GameAction::Rotate => self.controller.rotate(&mut self.grid),
            GameAction::HardDrop => {
                self.controller.drop_to_floor(&mut self.grid);
                // Settle right away and re-time the next tick from now.
                self.on_tick();
                self.timer.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.active = self.controller.active();
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn spawn_next(&mut self) -> bool {
        let kind = self.source.next_piece();
        match self.controller.spawn(&mut self.grid, kind) {
            Ok(()) => true,
            Err(err) => {
                self.status = GameStatus::GameOver;
                info!(%err, "game over");
                false
            }
        }
    }
}
