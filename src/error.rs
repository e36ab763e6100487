use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that abort an archive scan. A missing game is not one of them.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to open archive '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to initialize zstd decoder for '{}': {source}", .path.display())]
    Decompress {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read game {game_index} from '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        game_index: usize,
        #[source]
        source: io::Error,
    },
}

impl ArchiveError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Decompress { path, .. } | Self::Read { path, .. } => {
                path
            }
        }
    }
}

/// Per-game diagnostics that do not stop the scan.
#[derive(Debug, Clone, Default)]
pub struct ErrorAccumulator(Option<String>);

impl ErrorAccumulator {
    pub fn push(&mut self, msg: &str) {
        match &mut self.0 {
            Some(existing) => {
                existing.push_str("; ");
                existing.push_str(msg);
            }
            None => {
                self.0 = Some(msg.to_string());
            }
        }
    }

    pub fn take(&mut self) -> Option<String> {
        self.0.take()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_single_message() {
        let mut accumulator = ErrorAccumulator::default();
        accumulator.push("illegal move: Qh5");

        assert_eq!(accumulator.take().as_deref(), Some("illegal move: Qh5"));
    }

    #[test]
    fn test_push_multiple_messages_uses_separator() {
        let mut accumulator = ErrorAccumulator::default();
        accumulator.push("invalid FEN");
        accumulator.push("illegal move");

        assert_eq!(
            accumulator.take().as_deref(),
            Some("invalid FEN; illegal move")
        );
    }

    #[test]
    fn test_take_consumes_accumulator() {
        let mut accumulator = ErrorAccumulator::default();
        accumulator.push("error");

        assert!(!accumulator.is_empty());
        assert_eq!(accumulator.take().as_deref(), Some("error"));
        assert!(accumulator.is_empty());
        assert!(accumulator.take().is_none());
    }

    #[test]
    fn test_archive_error_display_names_path() {
        let err = ArchiveError::Open {
            path: PathBuf::from("games/missing.pgn"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        let msg = err.to_string();
        assert!(msg.contains("games/missing.pgn"));
        assert!(msg.contains("no such file"));
        assert_eq!(err.path(), Path::new("games/missing.pgn"));
    }

    #[test]
    fn test_read_error_display_names_game_index() {
        let err = ArchiveError::Read {
            path: PathBuf::from("a.pgn"),
            game_index: 7,
            source: io::Error::new(io::ErrorKind::InvalidData, "line too long"),
        };

        assert_eq!(
            err.to_string(),
            "failed to read game 7 from 'a.pgn': line too long"
        );
    }
}
