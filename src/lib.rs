//! Browse a PGN archive one game at a time and step through its mainline.
//!
//! [`Archive`] finds games by position in the file, [`MoveCursor`] walks a
//! game's moves back and forth over a [`Board`], and [`Viewer`] wires both to
//! a display host through the [`Frontend`] trait.

pub mod archive;
pub mod board;
pub mod cursor;
pub mod error;
mod log;
pub mod svg;
pub mod types;
pub mod viewer;
pub mod visitor;

pub use archive::{Archive, Compression, get_game, list_summaries, summaries_to_json};
pub use board::Board;
pub use cursor::MoveCursor;
pub use error::ArchiveError;
pub use svg::{BOARD_SIZE, render_board};
pub use types::{Game, GameSummary, Headers, MoveList};
pub use viewer::{Frontend, Viewer};
