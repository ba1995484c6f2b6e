use thiserror::Error;

/// Errors surfaced by the grid, the engine and the pattern loader.
///
/// None of them is recoverable: they mean the caller asked for something
/// impossible, so the simulation should stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("cell ({x}, {y}) is outside of the {cols}x{rows} grid")]
    Index {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },

    #[error("malformed pattern at byte {position}: {reason}")]
    Pattern { position: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, LifeError>;
