mod pretty;

use std::io::BufRead as _;

use clap::Parser as _;
use slovogrid::{words, Engine, FoundWord, Grid, Navigator};

#[derive(clap::Parser)]
struct Args {
    /// The 25 cells, row by row. Rows may be separated by spaces or `/`, and `.`
    /// or `_` leaves a cell empty.
    #[arg(num_args = 0..)]
    grid: Vec<String>,

    #[arg(long, default_value = "russian_utf8.txt")]
    dictionary: std::path::PathBuf,

    /// Select this word instead of the longest one.
    #[arg(long)]
    word: Option<String>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Read navigation commands from stdin.
    #[arg(long)]
    interactive: bool,
}

fn print_results(grid: &Grid, nav: &Navigator) {
    if nav.is_empty() {
        println!("No results :(");
        println!("{}", pretty::pretty_grid(grid, None, &[]));
        return;
    }

    for (i, found) in nav.results().iter().enumerate() {
        let marker = if i == nav.cursor() { '>' } else { ' ' };
        println!("{marker} {} (length: {})", found.word, found.word.chars().count());
    }
    println!("Words found: {}", nav.len());
    print_word(grid, nav.current());
}

fn print_word(grid: &Grid, found: Option<&FoundWord>) {
    match found {
        Some(found) => println!(
            "{}",
            pretty::pretty_grid(grid, Some(&found.word), &found.path)
        ),
        None => println!("{}", pretty::pretty_grid(grid, None, &[])),
    }
}

fn normalize_query(word: &str) -> String {
    words::normalize(word).unwrap_or_else(|| word.trim().to_string())
}

/// Commands: an empty line searches if the grid hasn't been searched yet and
/// otherwise moves to the next word, `p` goes back, `c` clears the grid,
/// `g <cells>` loads a new grid, `q` quits, and anything else selects a word.
fn interactive(engine: &Engine, mut grid: Grid, mut nav: Option<Navigator>) -> anyhow::Result<()> {
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "q" => break,
            "" | "n" => {
                if let Some(nav) = nav.as_mut() {
                    print_word(&grid, nav.next());
                    continue;
                }
                let searched = Navigator::new(engine.search(&grid));
                print_results(&grid, &searched);
                nav = Some(searched);
            }
            "p" => {
                if let Some(nav) = nav.as_mut() {
                    print_word(&grid, nav.previous());
                }
            }
            "c" => {
                grid.clear();
                nav = None;
                print_word(&grid, None);
            }
            _ => {
                if let Some(cells) = command.strip_prefix("g ") {
                    match Grid::parse(cells) {
                        Ok(new_grid) => {
                            grid = new_grid;
                            nav = None;
                            print_word(&grid, None);
                        }
                        Err(e) => log::error!(error = e.to_string().as_str(); "invalid grid"),
                    }
                    continue;
                }

                let Some(nav) = nav.as_mut() else {
                    continue;
                };
                let word = normalize_query(command);
                match nav.jump_to(&word) {
                    Some(found) => print_word(&grid, Some(found)),
                    None => log::warn!(word = word.as_str(); "word not found"),
                }
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let engine = Engine::load(&args.dictionary);

    let grid = if args.grid.is_empty() {
        Grid::default()
    } else {
        Grid::parse(&args.grid.join(" "))?
    };

    log::info!(dictionary_words = engine.dictionary().len(), interactive = args.interactive; "slovogrid");

    if grid.is_empty() && args.interactive {
        println!("{}", pretty::pretty_grid(&grid, None, &[]));
        return interactive(&engine, grid, None);
    }

    let results = engine.search(&grid);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let mut nav = Navigator::new(results);
    if let Some(word) = args.word {
        let word = normalize_query(&word);
        if nav.jump_to(&word).is_none() {
            log::warn!(word = word.as_str(); "word not found");
        }
    }

    print_results(&grid, &nav);

    if args.interactive {
        return interactive(&engine, grid, Some(nav));
    }

    Ok(())
}
