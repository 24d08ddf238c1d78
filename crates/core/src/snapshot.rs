use serde::Serialize;

use crate::controller::ActivePiece;
use crate::game::GameStatus;
use crate::grid::GridRows;
use crate::types::{COLS, ROWS};

/// Immutable view of a game handed to renderers.
///
/// Serializes each cell as `null` or the piece kind's class name, so a
/// renderer outside this process can map cells straight to display classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub grid: GridRows,
    pub active: Option<ActivePiece>,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; COLS as usize]; ROWS as usize],
            active: None,
            status: GameStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameLoop;
    use crate::rng::ScriptedPieces;
    use crate::types::{PieceKind, TICK_MS};

    #[test]
    fn serializes_cells_as_class_names() {
        let mut game = GameLoop::with_source(ScriptedPieces::new(vec![PieceKind::Skew]), TICK_MS);
        game.start();
        let snap = game.snapshot();
        assert!(snap.playable());

        let value = serde_json::to_value(snap).unwrap();
        assert_eq!(value["status"], "running");
        assert_eq!(value["active"]["kind"], "skew");
        assert_eq!(value["active"]["rotation"], "north");

        let placed: Vec<(usize, usize)> = snap
            .grid
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_some())
                    .map(move |(c, _)| (r, c))
            })
            .collect();
        assert_eq!(placed.len(), 4);
        for (r, c) in placed {
            assert_eq!(value["grid"][r][c], "skew");
        }
        assert!(value["grid"][ROWS as usize - 1][0].is_null());
    }

    #[test]
    fn default_is_empty_and_idle() {
        let snap = GameSnapshot::default();
        assert!(!snap.playable());
        assert!(snap.active.is_none());
        assert_eq!(snap.grid.len(), ROWS as usize);
        assert!(snap.grid.iter().all(|row| row.len() == COLS as usize));
        assert!(snap.grid.iter().flatten().all(|cell| cell.is_none()));
    }
}
