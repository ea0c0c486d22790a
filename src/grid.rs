use crate::error::{Error, Result};

pub const SIZE: usize = 5;

/// Marks an unfilled cell.
pub const EMPTY: char = '\0';

pub type Coord = (usize, usize);
pub type Path = Vec<Coord>;

/// A 5x5 snapshot of the letters on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid(ndarray::Array2<char>);

impl Default for Grid {
    fn default() -> Self {
        Self(ndarray::Array2::from_elem((SIZE, SIZE), EMPTY))
    }
}

fn check(row: usize, col: usize) -> Result<()> {
    if row >= SIZE || col >= SIZE {
        return Err(Error::InvalidCoordinate { row, col });
    }
    Ok(())
}

/// Turns the text of a cell into the letter the engine matches against.
fn normalize_cell(row: usize, col: usize, content: &str) -> Result<char> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(EMPTY);
    }

    let mut letters = content.chars().flat_map(crate::words::normalize_char);
    match (letters.next(), letters.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(c),
        _ => Err(Error::InvalidCell {
            row,
            col,
            content: content.to_string(),
        }),
    }
}

impl Grid {
    /// Builds a grid by asking `cell` for the contents of each coordinate in
    /// row-major order. An empty string is an unfilled cell.
    pub fn from_fn<S: AsRef<str>>(mut cell: impl FnMut(usize, usize) -> S) -> Result<Self> {
        let mut grid = Self::default();
        for row in 0..SIZE {
            for col in 0..SIZE {
                grid.0[[row, col]] = normalize_cell(row, col, cell(row, col).as_ref())?;
            }
        }
        Ok(grid)
    }

    /// Parses 25 cells written row by row. Whitespace and `/` are ignored and
    /// `.` or `_` is an empty cell.
    pub fn parse(s: &str) -> Result<Self> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect::<Vec<_>>();
        if cells.len() != SIZE * SIZE {
            return Err(Error::InvalidGrid(format!(
                "expected {} cells, got {}",
                SIZE * SIZE,
                cells.len()
            )));
        }

        Self::from_fn(|row, col| match cells[row * SIZE + col] {
            '.' | '_' => String::new(),
            c => c.to_string(),
        })
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Option<char>> {
        check(row, col)?;
        Ok(Some(self.0[[row, col]]).filter(|&c| c != EMPTY))
    }

    pub fn set(&mut self, row: usize, col: usize, content: &str) -> Result<()> {
        check(row, col)?;
        self.0[[row, col]] = normalize_cell(row, col, content)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.0.fill(EMPTY);
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == EMPTY)
    }

    /// Letters along `path`, skipping anything out of bounds.
    pub fn spell(&self, path: &[Coord]) -> String {
        path.iter()
            .filter_map(|&(i, j)| self.0.get([i, j]))
            .filter(|&&c| c != EMPTY)
            .collect()
    }

    pub fn cells(&self) -> &ndarray::Array2<char> {
        &self.0
    }
}

impl TryFrom<ndarray::Array2<char>> for Grid {
    type Error = Error;

    fn try_from(cells: ndarray::Array2<char>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if (rows, cols) != (SIZE, SIZE) {
            return Err(Error::InvalidShape { rows, cols });
        }
        Self::from_fn(|row, col| match cells[[row, col]] {
            EMPTY => String::new(),
            c => c.to_string(),
        })
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.0.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{}", if c == EMPTY { '.' } else { c })?;
            }
        }
        Ok(())
    }
}

pub fn is_adjacent((ia, ja): Coord, (ib, jb): Coord) -> bool {
    (ia, ja) != (ib, jb) && ia.abs_diff(ib) <= 1 && ja.abs_diff(jb) <= 1
}

/// Whether `path` is non-empty, in bounds, steps between neighbours and never
/// revisits a cell.
pub fn is_valid_path(path: &[Coord]) -> bool {
    !path.is_empty()
        && path.iter().all(|&(i, j)| i < SIZE && j < SIZE)
        && path.windows(2).all(|w| is_adjacent(w[0], w[1]))
        && path
            .iter()
            .enumerate()
            .all(|(k, c)| !path[..k].contains(c))
}
