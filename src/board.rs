use shakmaty::{Chess, EnPassantMode, Move, Position, fen::Fen};

/// A position that can be stepped forward with `push` and back with `pop`.
///
/// Moves handed to `push` must be legal in the current position; the cursor
/// only ever pushes moves the visitor already resolved.
#[derive(Debug, Clone)]
pub struct Board {
    pos: Chess,
    history: Vec<Chess>,
    move_stack: Vec<Move>,
}

impl Board {
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_position(pos: Chess) -> Self {
        Self {
            pos,
            history: Vec::new(),
            move_stack: Vec::new(),
        }
    }

    pub fn push(&mut self, m: Move) {
        let prior = self.pos.clone();
        self.pos.play_unchecked(m);
        self.history.push(prior);
        self.move_stack.push(m);
    }

    /// Takes back the last pushed move. Does nothing on an untouched board.
    pub fn pop(&mut self) -> Option<Move> {
        let m = self.move_stack.pop()?;
        if let Some(prior) = self.history.pop() {
            self.pos = prior;
        }
        Some(m)
    }

    pub fn position(&self) -> &Chess {
        &self.pos
    }

    pub fn move_stack(&self) -> &[Move] {
        &self.move_stack
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_stack.last()
    }

    pub fn ply(&self) -> usize {
        self.move_stack.len()
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.pos, EnPassantMode::Legal).to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::san::San;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn san_move(board: &Board, san: &str) -> Move {
        san.parse::<San>()
            .unwrap()
            .to_move(board.position())
            .unwrap()
    }

    #[test]
    fn test_new_board_is_standard_start() {
        let board = Board::new();
        assert_eq!(board.fen(), START_FEN);
        assert_eq!(board.ply(), 0);
        assert!(board.last_move().is_none());
    }

    #[test]
    fn test_push_then_pop_restores_position() {
        let mut board = Board::new();
        let e4 = san_move(&board, "e4");
        board.push(e4);

        assert_eq!(
            board.fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
        assert_eq!(board.last_move(), Some(&e4));

        assert_eq!(board.pop(), Some(e4));
        assert_eq!(board.fen(), START_FEN);
        assert!(board.move_stack().is_empty());
    }

    #[test]
    fn test_pop_on_untouched_board_is_noop() {
        let mut board = Board::new();
        assert!(board.pop().is_none());
        assert_eq!(board.fen(), START_FEN);
    }

    #[test]
    fn test_pop_restores_castling_rights() {
        let mut board = Board::from_position(
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"
                .parse::<Fen>()
                .unwrap()
                .into_position(shakmaty::CastlingMode::Standard)
                .unwrap(),
        );
        let before = board.fen();

        let castle = san_move(&board, "O-O");
        board.push(castle);
        assert!(board.fen().starts_with("r3k2r/8/8/8/8/8/8/R4RK1 b kq"));

        board.pop();
        assert_eq!(board.fen(), before);
    }
}
