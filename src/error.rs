use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: i64, height: i64 },
    #[error("grid {width}x{height} is too large: at most {max} cells are allowed")]
    GridTooLarge { width: i64, height: i64, max: u64 },
    #[error("invalid speed {0}ms: speed must be non-negative")]
    InvalidSpeed(i64),
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}
