use crate::board::Board;
use crate::types::{Game, MoveList};

use shakmaty::{Move, san::SanPlus};

/// Undo/redo walk over the mainline of one game.
///
/// `nm` counts the moves currently applied to `board`. It always stays in
/// `0..=moves.len()`, and `board` always equals the starting position with
/// `moves[..nm]` played on it. Stepping past either end does nothing.
#[derive(Debug, Clone)]
pub struct MoveCursor {
    board: Board,
    moves: MoveList,
    sans: Vec<SanPlus>,
    nm: usize,
}

impl MoveCursor {
    pub fn new(game: &Game) -> Self {
        Self {
            board: Board::from_position(game.starting_position().clone()),
            moves: game.moves.clone(),
            sans: game.sans.clone(),
            nm: 0,
        }
    }

    /// Replaces everything with a fresh walk over `game`.
    pub fn reset(&mut self, game: &Game) {
        *self = Self::new(game);
    }

    pub fn step_back(&mut self) -> bool {
        if self.nm == 0 {
            return false;
        }
        self.board.pop();
        self.nm -= 1;
        true
    }

    pub fn step_forward(&mut self) -> bool {
        let Some(&m) = self.moves.get(self.nm) else {
            return false;
        };
        self.board.push(m);
        self.nm += 1;
        true
    }

    /// Steps until `target` (clamped to the move count) moves are applied.
    pub fn seek(&mut self, target: usize) {
        let target = target.min(self.moves.len());
        while self.nm < target && self.step_forward() {}
        while self.nm > target && self.step_back() {}
    }

    pub fn nm(&self) -> usize {
        self.nm
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn at_start(&self) -> bool {
        self.nm == 0
    }

    pub fn at_end(&self) -> bool {
        self.nm == self.moves.len()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// SAN of the most recently applied move.
    pub fn current_san(&self) -> Option<&SanPlus> {
        self.nm.checked_sub(1).and_then(|i| self.sans.get(i))
    }
}
