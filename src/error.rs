#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} grid", size = crate::grid::SIZE)]
    InvalidCoordinate { row: usize, col: usize },

    #[error("cell ({row}, {col}) must hold a single letter, got {content:?}")]
    InvalidCell {
        row: usize,
        col: usize,
        content: String,
    },

    #[error("grid must be {size}x{size}, got {rows}x{cols}", size = crate::grid::SIZE)]
    InvalidShape { rows: usize, cols: usize },

    #[error("could not parse grid: {0}")]
    InvalidGrid(String),
}

pub type Result<T> = std::result::Result<T, Error>;
