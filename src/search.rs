use rayon::iter::{IntoParallelIterator as _, ParallelIterator as _};

use crate::grid::{Coord, Grid, Path, SIZE};
use crate::words;

/// Paths never get longer than the number of cells.
pub const MAX_DEPTH: usize = SIZE * SIZE;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FoundWord {
    pub word: String,
    pub path: Path,
}

/// Every word found by one search, longest first and then alphabetical.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    words: Vec<FoundWord>,
    #[serde(skip)]
    index: std::collections::HashMap<String, usize>,
}

impl ResultSet {
    fn new(mut words: Vec<FoundWord>) -> Self {
        words.sort_by(|a, b| {
            b.word
                .chars()
                .count()
                .cmp(&a.word.chars().count())
                .then_with(|| a.word.cmp(&b.word))
        });
        let index = words
            .iter()
            .enumerate()
            .map(|(i, found)| (found.word.clone(), i))
            .collect();
        Self { words, index }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&FoundWord> {
        self.position(word).map(|i| &self.words[i])
    }

    pub fn position(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn words(&self) -> &[FoundWord] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoundWord> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a FoundWord;
    type IntoIter = std::slice::Iter<'a, FoundWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct Walk<'a> {
    grid: &'a Grid,
    path: Path,
    word: String,
    seen: std::collections::HashSet<String>,
    found: Vec<FoundWord>,
}

impl Walk<'_> {
    fn visit(&mut self, node: &words::Node) {
        if node.is_end()
            && self.path.len() >= words::MIN_WORD_LEN
            && self.seen.insert(self.word.clone())
        {
            self.found.push(FoundWord {
                word: self.word.clone(),
                path: self.path.clone(),
            });
        }

        if self.path.len() >= MAX_DEPTH {
            return;
        }

        let Some(&(oi, oj)) = self.path.last() else {
            return;
        };
        for di in -1..=1 {
            for dj in -1..=1 {
                if di == 0 && dj == 0 {
                    continue;
                }

                let Some(i) = oi.checked_add_signed(di) else {
                    continue;
                };

                let Some(j) = oj.checked_add_signed(dj) else {
                    continue;
                };

                if i >= SIZE || j >= SIZE {
                    continue;
                }

                if self.path.contains(&(i, j)) {
                    continue;
                }

                let Some(c) = self.grid.get(i, j).ok().flatten() else {
                    continue;
                };

                let Some(child) = node.get(c) else {
                    continue;
                };

                self.path.push((i, j));
                self.word.push(c);
                self.visit(child);
                self.word.pop();
                self.path.pop();
            }
        }
    }
}

/// Words reachable from one start cell, in the order they were first reached.
fn find_from(grid: &Grid, root: &words::Node, start: Coord) -> Vec<FoundWord> {
    let (i, j) = start;
    let Some(c) = grid.get(i, j).ok().flatten() else {
        return vec![];
    };
    let Some(child) = root.get(c) else {
        return vec![];
    };

    let mut walk = Walk {
        grid,
        path: vec![start],
        word: c.to_string(),
        seen: Default::default(),
        found: vec![],
    };
    walk.visit(child);
    walk.found
}

/// Finds every dictionary word traceable on `grid`. When a word can be spelled
/// along several paths, the one reached first is kept: start cells are tried in
/// row-major order and neighbours from the top-left around to the bottom-right.
pub fn find_words(grid: &Grid, root: &words::Node) -> ResultSet {
    // Each start cell is searched independently; the collected order is still
    // row-major so the merge below sees paths in sequential discovery order.
    let per_start = (0..SIZE * SIZE)
        .into_par_iter()
        .map(|k| find_from(grid, root, (k / SIZE, k % SIZE)))
        .collect::<Vec<_>>();

    let mut seen = std::collections::HashSet::new();
    ResultSet::new(
        per_start
            .into_iter()
            .flatten()
            .filter(|found| seen.insert(found.word.clone()))
            .collect(),
    )
}

/// Holds the dictionary and runs searches against grid snapshots.
#[derive(Debug, Default)]
pub struct Engine {
    root: words::Node,
}

impl Engine {
    pub fn new(root: words::Node) -> Self {
        Self { root }
    }

    /// Loads the dictionary at `path`, falling back to the built-in words.
    pub fn load(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(words::load(path))
    }

    pub fn dictionary(&self) -> &words::Node {
        &self.root
    }

    pub fn search(&self, grid: &Grid) -> ResultSet {
        let start = std::time::Instant::now();
        let results = find_words(grid, &self.root);
        log::info!(
            words = results.len(),
            elapsed_ms = start.elapsed().as_millis() as u64;
            "search finished"
        );
        results
    }

    /// Snapshots the grid through `cell` and searches it.
    pub fn search_cells<S: AsRef<str>>(
        &self,
        cell: impl FnMut(usize, usize) -> S,
    ) -> crate::error::Result<ResultSet> {
        Ok(self.search(&Grid::from_fn(cell)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(list: &[&str]) -> Engine {
        Engine::new(words::from_words(list.iter().copied()))
    }

    fn found(results: &ResultSet) -> Vec<(&str, &[Coord])> {
        results
            .iter()
            .map(|f| (f.word.as_str(), f.path.as_slice()))
            .collect()
    }

    #[test]
    fn finds_word_in_a_row() {
        let grid = Grid::parse("КОТ.. ..... ..... ..... .....").unwrap();
        let results = engine(&["КОТ"]).search(&grid);
        assert_eq!(found(&results), [("КОТ", &[(0, 0), (0, 1), (0, 2)][..])]);
    }

    #[test]
    fn finds_diagonal_and_backwards_paths() {
        let grid = Grid::parse("Т.... .О... ..К.. ..... .....").unwrap();
        let results = engine(&["КОТ", "ТОК"]).search(&grid);
        assert_eq!(
            found(&results),
            [
                ("КОТ", &[(2, 2), (1, 1), (0, 0)][..]),
                ("ТОК", &[(0, 0), (1, 1), (2, 2)][..]),
            ]
        );
    }

    #[test]
    fn cells_are_not_reused() {
        let grid = Grid::parse("АН... ..... ..... ..... .....").unwrap();
        let results = engine(&["АНА", "НА"]).search(&grid);
        assert_eq!(found(&results), [("НА", &[(0, 1), (0, 0)][..])]);
    }

    #[test]
    fn single_letters_are_never_words() {
        let mut root = words::Node::default();
        root.insert("ЯЯ");
        let grid = Grid::parse("Я.... ..... ..... ..... .....").unwrap();
        assert!(Engine::new(root).search(&grid).is_empty());
    }

    #[test]
    fn gaps_break_paths() {
        let grid = Grid::parse("КО.Т. ..... ..... ..... .....").unwrap();
        assert!(engine(&["КОТ"]).search(&grid).is_empty());
    }

    #[test]
    fn first_discovered_path_wins() {
        // Д(1,0) reaches О(0,1) before О(1,1).
        let grid = Grid::parse(".ОМ.. ДО... ..... ..... .....").unwrap();
        let results = engine(&["ДОМ"]).search(&grid);
        assert_eq!(
            results.get("ДОМ").map(|f| f.path.as_slice()),
            Some(&[(1, 0), (0, 1), (0, 2)][..])
        );
    }

    #[test]
    fn earlier_start_cell_wins() {
        let grid = Grid::parse("..... ДА..Д ...АД ..... .....").unwrap();
        let results = engine(&["ДА"]).search(&grid);
        assert_eq!(results.len(), 1);
        assert_eq!(results.get("ДА").unwrap().path, vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn ordered_by_length_then_alphabet() {
        let grid = Grid::parse("СТОЛ. ЛОН.. ..... ..... .....").unwrap();
        let results = engine(&["СТОЛ", "СЛОН", "ТОН", "ТОЛ", "НОС", "ЛОТ"]).search(&grid);
        let words = results.iter().map(|f| f.word.as_str()).collect::<Vec<_>>();
        assert_eq!(words, ["СЛОН", "СТОЛ", "ЛОТ", "НОС", "ТОЛ", "ТОН"]);
        for f in &results {
            assert_eq!(grid.spell(&f.path), f.word);
            assert!(crate::grid::is_valid_path(&f.path));
        }
    }

    #[test]
    fn folded_letters_match() {
        let grid = Grid::parse("ЁЖ... ..... ..... ..... .....").unwrap();
        let results = engine(&["ЁЖ"]).search(&grid);
        assert_eq!(results.get("ЕЖ").unwrap().path, vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn search_cells_rejects_bad_input() {
        let result = engine(&["КОТ"]).search_cells(|row, col| {
            if (row, col) == (2, 3) {
                "ОК"
            } else {
                ""
            }
        });
        assert!(matches!(
            result,
            Err(crate::error::Error::InvalidCell { row: 2, col: 3, .. })
        ));
    }

    #[test]
    fn full_grid_terminates() {
        let grid = Grid::parse("ААААА ААААА ААААА ААААА ААААА").unwrap();
        let results = engine(&["АА", "ААА", "ААААА"]).search(&grid);
        let words = results.iter().map(|f| f.word.chars().count()).collect::<Vec<_>>();
        assert_eq!(words, [5, 3, 2]);
    }
}
