use std::path::PathBuf;

/// Errors raised when placing or removing a piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} has no pieces to remove")]
    EmptyColumn(usize),

    #[error("column {column} is not the most recent move (last was {last})")]
    UndoOutOfOrder { column: usize, last: usize },
}

/// Errors raised when a search cannot be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves; check for a terminal position before searching")]
    NoLegalMoves,

    #[error("search depth must be at least 1, got {0}")]
    InvalidConfiguration(u32),
}

/// Errors raised while running an engine-vs-engine match.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    #[error("agent played an illegal move: {0}")]
    IllegalMove(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
