use slovogrid::{grid, words, Engine, Grid, Navigator};

const GRIDS: &[&str] = &[
    "КОТСХ ОДЯЩИ ЙСЯМА ЛОНЕР ТКИША",
    "СЛОНК ТОЛМА ДОМЯЧ КОШКА СТОЛЫ",
    "ААААА ББББВ ВВВВГ ГГГГД ДДДДЕ",
    "К.О.Т .Л.Н. С.Т.О ..... МЯЧ..",
];

fn engine() -> Engine {
    Engine::new(words::from_words([
        "КОТ", "КОШКА", "СЛОН", "СТОЛ", "ДОМ", "МЯЧ", "ТОК", "КИТ", "ЛОТ", "НОС", "ТОН", "СОН",
        "ХОД", "ЩИ", "ЯМА", "МАЛО", "ТОЛК", "ШАЙКА", "СЛОТ", "ОКО", "СТОЛЫ", "КОМ", "МОЛ",
    ]))
}

#[test]
fn word_in_first_row_is_found() {
    let grid = Grid::parse(GRIDS[0]).unwrap();
    let results = engine().search(&grid);
    assert_eq!(
        results.get("КОТ").map(|f| f.path.clone()),
        Some(vec![(0, 0), (0, 1), (0, 2)])
    );
}

#[test]
fn empty_grid_has_no_results() {
    let results = engine().search(&Grid::default());
    assert!(results.is_empty());
    assert!(Navigator::new(results).current().is_none());
}

#[test]
fn fallback_dictionary_is_searchable() {
    let engine = Engine::load("/definitely/missing/russian_utf8.txt");
    assert_eq!(engine.dictionary().len(), words::FALLBACK_WORDS.len());

    let results = engine
        .search_cells(|row, col| match (row, col) {
            (2, 1) => "м",
            (2, 2) => "я",
            (3, 3) => "ч",
            _ => "",
        })
        .unwrap();
    let found = results.iter().map(|f| f.word.as_str()).collect::<Vec<_>>();
    assert_eq!(found, ["МЯЧ"]);
    assert_eq!(results.words()[0].path, vec![(2, 1), (2, 2), (3, 3)]);
}

#[test]
fn repeated_word_keeps_first_path() {
    // ОКО can be read from either О; the top-left one is reached first, and from
    // there the left-hand К comes before the right-hand one.
    let grid = Grid::parse("О.... КК... .О... ..... .....").unwrap();
    let engine = Engine::new(words::from_words(["ОКО"]));
    let results = engine.search(&grid);
    assert_eq!(results.len(), 1);
    assert_eq!(results.get("ОКО").unwrap().path, vec![(0, 0), (1, 0), (2, 1)]);
}

#[test]
fn searches_are_deterministic() {
    let engine = engine();
    for cells in GRIDS {
        let grid = Grid::parse(cells).unwrap();
        assert_eq!(engine.search(&grid), engine.search(&grid));
    }
}

#[test]
fn found_paths_spell_their_words() {
    let engine = engine();
    for cells in GRIDS {
        let grid = Grid::parse(cells).unwrap();
        for found in &engine.search(&grid) {
            assert!(found.word.chars().count() >= 2);
            assert!(grid::is_valid_path(&found.path), "{found:?}");
            assert_eq!(grid.spell(&found.path), found.word);
            assert!(engine.dictionary().contains(&found.word));
        }
    }
}

#[test]
fn results_are_longest_first_then_alphabetical() {
    let engine = engine();
    for cells in GRIDS {
        let results = engine.search(&Grid::parse(cells).unwrap());
        for pair in results.words().windows(2) {
            let (a, b) = (&pair[0].word, &pair[1].word);
            let (la, lb) = (a.chars().count(), b.chars().count());
            assert!(la > lb || (la == lb && a < b), "{a} before {b}");
        }
    }
}

#[test]
fn navigation_wraps_around() {
    let results = engine().search(&Grid::parse(GRIDS[1]).unwrap());
    assert!(results.len() > 1);

    let mut nav = Navigator::new(results);
    let first = nav.current().cloned();
    for _ in 0..nav.len() {
        nav.next();
    }
    assert_eq!(nav.current().cloned(), first);

    let last = nav.previous().cloned();
    assert_eq!(last.as_ref(), nav.results().words().last());
}

#[test]
fn previous_on_empty_results_is_a_no_op() {
    let mut nav = Navigator::new(engine().search(&Grid::default()));
    assert!(nav.previous().is_none());
    assert_eq!(nav.cursor(), 0);
}

#[test]
fn results_serialize_as_word_path_list() {
    let grid = Grid::parse("КОТ.. ..... ..... ..... .....").unwrap();
    let results = Engine::new(words::from_words(["КОТ"])).search(&grid);
    assert_eq!(
        serde_json::to_value(&results).unwrap(),
        serde_json::json!([{ "word": "КОТ", "path": [[0, 0], [0, 1], [0, 2]] }])
    );
}
