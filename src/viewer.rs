use crate::archive::Archive;
use crate::cursor::MoveCursor;
use crate::error::ArchiveError;
use crate::log;
use crate::svg::{BOARD_SIZE, render_board};
use crate::types::GameSummary;

/// Display host for the viewer: a notebook, a GUI, or a test recorder.
pub trait Frontend {
    /// Presents the selectable games. Picking one should call
    /// `Viewer::select` with the summary's `index`.
    fn show_game_list(&mut self, games: &[GameSummary]);

    /// Replaces the displayed board with a freshly rendered SVG document.
    fn show_board(&mut self, svg: &str);
}

/// Game picker plus back/forward buttons over one archive.
pub struct Viewer<F> {
    archive: Archive,
    frontend: F,
    cursor: Option<MoveCursor>,
    board_size: u32,
}

impl<F: Frontend> Viewer<F> {
    pub fn new(archive: Archive, frontend: F) -> Self {
        Self {
            archive,
            frontend,
            cursor: None,
            board_size: BOARD_SIZE,
        }
    }

    pub fn with_board_size(mut self, board_size: u32) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn make_game_list(&mut self) -> Result<Vec<GameSummary>, ArchiveError> {
        let games = self
            .archive
            .list_summaries()
            .inspect_err(|e| log::error(e.to_string()))?;
        self.frontend.show_game_list(&games);
        Ok(games)
    }

    /// Loads game `index` and shows its starting position. Returns `false`
    /// without touching the current selection when the archive has no such
    /// game.
    pub fn select(&mut self, index: usize) -> Result<bool, ArchiveError> {
        log::debug(format!("selecting game {}", index));
        let found = self
            .archive
            .get_game(index)
            .inspect_err(|e| log::error(e.to_string()))?;
        let Some(game) = found else {
            return Ok(false);
        };

        self.cursor = Some(MoveCursor::new(&game));
        self.refresh();
        Ok(true)
    }

    pub fn undo(&mut self) -> bool {
        let moved = self.cursor.as_mut().is_some_and(MoveCursor::step_back);
        self.refresh();
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.cursor.as_mut().is_some_and(MoveCursor::step_forward);
        self.refresh();
        moved
    }

    fn refresh(&mut self) {
        let Some(cursor) = &self.cursor else {
            return;
        };
        log::debug(format!("showing ply {}/{}", cursor.nm(), cursor.len()));
        let svg = render_board(cursor.board(), self.board_size);
        self.frontend.show_board(&svg);
    }

    pub fn cursor(&self) -> Option<&MoveCursor> {
        self.cursor.as_ref()
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }
}
