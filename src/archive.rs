use crate::error::ArchiveError;
use crate::log;
use crate::types::{Game, GameSummary};
use crate::visitor::{GameVisitor, SkipVisitor, SummaryVisitor};

use pgn_reader::Reader;
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zstd::stream::read::Decoder as ZstdDecoder;

pub type PgnInput = Box<dyn Read + Send>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Compression {
    Plain,
    Zstd,
}

impl Compression {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("zst") => Self::Zstd,
            _ => Self::Plain,
        }
    }
}

/// Read-only handle on a PGN file.
///
/// Holds no open file: every query reopens the file and scans forward from
/// the first game, and the stream is dropped before the query returns.
#[derive(Clone, Debug)]
pub struct Archive {
    path: PathBuf,
    compression: Compression,
}

impl Archive {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let compression = Compression::from_path(&path);
        Self { path, compression }
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    fn reader(&self) -> Result<Reader<PgnInput>, ArchiveError> {
        // pgn-reader buffers internally, so no BufReader here.
        open_input_stream(&self.path, self.compression).map(Reader::new)
    }

    fn read_error(&self, game_index: usize, source: std::io::Error) -> ArchiveError {
        ArchiveError::Read {
            path: self.path.clone(),
            game_index,
            source,
        }
    }

    /// Returns the game at 0-based position `index`, or `None` when the
    /// archive holds fewer games.
    pub fn get_game(&self, index: usize) -> Result<Option<Game>, ArchiveError> {
        let mut reader = self.reader()?;

        for skipped in 0..index {
            match reader.read_game(&mut SkipVisitor) {
                Ok(Some(())) => {}
                Ok(None) => {
                    log::info(format!(
                        "game {} not found in '{}': archive holds {} games",
                        index,
                        self.path.display(),
                        skipped
                    ));
                    return Ok(None);
                }
                Err(e) => return Err(self.read_error(skipped, e)),
            }
        }

        let mut visitor = GameVisitor::new();
        match reader.read_game(&mut visitor) {
            Ok(Some(())) => {}
            Ok(None) => {
                log::info(format!(
                    "game {} not found in '{}': archive holds {} games",
                    index,
                    self.path.display(),
                    index
                ));
                return Ok(None);
            }
            Err(e) => return Err(self.read_error(index, e)),
        }

        let game = visitor.current_game.take();
        if let Some(parse_error) = game.as_ref().and_then(|g| g.parse_error()) {
            log::warn(format!(
                "game {} in '{}': {}",
                index,
                self.path.display(),
                parse_error
            ));
        }
        Ok(game)
    }

    /// One summary per game, in archive order.
    pub fn list_summaries(&self) -> Result<Vec<GameSummary>, ArchiveError> {
        let mut reader = self.reader()?;
        let mut visitor = SummaryVisitor::new();
        let mut summaries = Vec::new();

        loop {
            match reader.read_game(&mut visitor) {
                Ok(Some(summary)) => summaries.push(summary),
                Ok(None) => break,
                Err(e) => return Err(self.read_error(summaries.len(), e)),
            }
        }

        log::debug(format!(
            "listed {} games from '{}'",
            summaries.len(),
            self.path.display()
        ));
        Ok(summaries)
    }

    pub fn count_games(&self) -> Result<usize, ArchiveError> {
        let mut reader = self.reader()?;
        let mut count = 0;

        loop {
            match reader.read_game(&mut SkipVisitor) {
                Ok(Some(())) => count += 1,
                Ok(None) => return Ok(count),
                Err(e) => return Err(self.read_error(count, e)),
            }
        }
    }
}

fn open_input_stream(path: &Path, compression: Compression) -> Result<PgnInput, ArchiveError> {
    let file = File::open(path).map_err(|source| ArchiveError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    match compression {
        Compression::Plain => Ok(Box::new(file)),
        Compression::Zstd => ZstdDecoder::new(file)
            .map(|decoder| Box::new(decoder) as PgnInput)
            .map_err(|source| ArchiveError::Decompress {
                path: path.to_path_buf(),
                source,
            }),
    }
}

pub fn get_game(path: impl AsRef<Path>, index: usize) -> Result<Option<Game>, ArchiveError> {
    Archive::open(path.as_ref()).get_game(index)
}

pub fn list_summaries(path: impl AsRef<Path>) -> Result<Vec<GameSummary>, ArchiveError> {
    Archive::open(path.as_ref()).list_summaries()
}

/// Dropdown options as `[[label, index], ...]`.
pub fn summaries_to_json(summaries: &[GameSummary]) -> Value {
    Value::Array(
        summaries
            .iter()
            .map(|s| serde_json::json!([s.label, s.index]))
            .collect(),
    )
}
