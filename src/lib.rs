//! Finds every dictionary word that can be traced through a 5x5 letter grid by
//! stepping between neighbouring cells (diagonals included) without reusing a
//! cell.

pub mod error;
pub mod grid;
pub mod navigation;
pub mod search;
pub mod words;

pub use error::{Error, Result};
pub use grid::{Coord, Grid, Path};
pub use navigation::Navigator;
pub use search::{Engine, FoundWord, ResultSet};
