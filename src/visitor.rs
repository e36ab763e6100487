use crate::error::ErrorAccumulator;
use crate::types::{Game, GameSummary, Headers, MoveList};

use pgn_reader::{Outcome, RawTag, SanPlus, Skip, Visitor};
use shakmaty::{CastlingMode, Chess, Position, fen::Fen};
use std::mem;
use std::ops::ControlFlow;

/// Streaming PGN visitor (pgn-reader) that materializes one full game.
///
/// Every mainline SAN is resolved against the running position, so the
/// resulting move list can be replayed without further checks. Variations are
/// skipped; comments and NAGs are ignored. The first SAN that does not
/// resolve ends the move list and is reported through `Game::parse_error`.
pub struct GameVisitor {
    start: Chess,
    pos: Chess,
    moves: MoveList,
    sans: Vec<SanPlus>,
    outcome: Option<String>,
    halted: bool,
    parse_error: ErrorAccumulator,
    pub current_game: Option<Game>,
}

impl GameVisitor {
    pub fn new() -> Self {
        Self {
            start: Chess::default(),
            pos: Chess::default(),
            moves: MoveList::new(),
            sans: Vec::new(),
            outcome: None,
            halted: false,
            parse_error: ErrorAccumulator::default(),
            current_game: None,
        }
    }

    fn starting_position(headers: &Headers, parse_error: &mut ErrorAccumulator) -> Chess {
        let castling_mode = match headers.get("Variant") {
            Some(variant) if variant.eq_ignore_ascii_case("chess960") => CastlingMode::Chess960,
            _ => CastlingMode::Standard,
        };

        let Some(raw) = headers.get("FEN") else {
            return Chess::default();
        };

        match raw.parse::<Fen>() {
            Ok(fen) => match fen.into_position(castling_mode) {
                Ok(pos) => pos,
                Err(e) => {
                    parse_error.push(&format!("invalid FEN position '{}': {}", raw, e));
                    Chess::default()
                }
            },
            Err(e) => {
                parse_error.push(&format!("failed to parse FEN '{}': {}", raw, e));
                Chess::default()
            }
        }
    }
}

impl Default for GameVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for GameVisitor {
    type Tags = Headers;
    type Movetext = Headers;
    type Output = ();

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        self.moves.clear();
        self.sans.clear();
        self.outcome = None;
        self.halted = false;
        self.parse_error = ErrorAccumulator::default();
        self.current_game = None;
        ControlFlow::Continue(Headers::default())
    }

    fn tag(
        &mut self,
        tags: &mut Self::Tags,
        key: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        tags.insert(
            &String::from_utf8_lossy(key),
            &String::from_utf8_lossy(value.as_bytes()),
        );
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, tags: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        self.start = Self::starting_position(&tags, &mut self.parse_error);
        self.pos = self.start.clone();
        ControlFlow::Continue(tags)
    }

    fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn san(&mut self, _: &mut Self::Movetext, san_plus: SanPlus) -> ControlFlow<Self::Output> {
        if self.halted {
            return ControlFlow::Continue(());
        }

        match san_plus.san.to_move(&self.pos) {
            Ok(m) => {
                self.pos.play_unchecked(m);
                self.moves.push(m);
                self.sans.push(san_plus);
            }
            Err(err) => {
                self.parse_error.push(&format!(
                    "illegal move at ply {}: {} ({})",
                    self.moves.len() + 1,
                    san_plus,
                    err
                ));
                self.halted = true;
            }
        }
        ControlFlow::Continue(())
    }

    fn outcome(&mut self, _: &mut Self::Movetext, outcome: Outcome) -> ControlFlow<Self::Output> {
        self.outcome = Some(outcome.to_string());
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, headers: Self::Movetext) -> Self::Output {
        self.current_game = Some(Game {
            headers,
            start: mem::take(&mut self.start),
            moves: mem::take(&mut self.moves),
            sans: mem::take(&mut self.sans),
            outcome: self.outcome.take(),
            parse_error: self.parse_error.take(),
        });
    }
}

/// Reads only the tags a dropdown label needs and skips the movetext.
pub struct SummaryVisitor {
    next_index: usize,
}

impl SummaryVisitor {
    pub fn new() -> Self {
        Self { next_index: 0 }
    }
}

impl Default for SummaryVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for SummaryVisitor {
    type Tags = Headers;
    type Movetext = ();
    type Output = GameSummary;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        ControlFlow::Continue(Headers::default())
    }

    fn tag(
        &mut self,
        tags: &mut Self::Tags,
        key: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        let name = match key {
            b"White" => "White",
            b"Black" => "Black",
            b"Result" => "Result",
            _ => return ControlFlow::Continue(()),
        };
        tags.insert(name, &String::from_utf8_lossy(value.as_bytes()));
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, tags: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        let summary = GameSummary::from_headers(&tags, self.next_index);
        self.next_index += 1;
        ControlFlow::Break(summary)
    }

    fn end_game(&mut self, _: Self::Movetext) -> Self::Output {
        // Reached only if movetext was not skipped.
        let summary = GameSummary::from_headers(&Headers::default(), self.next_index);
        self.next_index += 1;
        summary
    }
}

/// Passes over a whole game without looking at it.
#[derive(Default)]
pub struct SkipVisitor;

impl Visitor for SkipVisitor {
    type Tags = ();
    type Movetext = ();
    type Output = ();

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        ControlFlow::Break(())
    }

    fn begin_movetext(&mut self, _: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Break(())
    }

    fn end_game(&mut self, _: Self::Movetext) -> Self::Output {}
}
