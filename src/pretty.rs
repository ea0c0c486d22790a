use slovogrid::grid::{Coord, Grid, EMPTY, SIZE};

#[derive(Clone, Copy, PartialEq)]
enum LinkType {
    None,
    Vertical,
    Horizontal,
    Diagonal,
    Antidiagonal,
    Cross,
}

/// Colour of the `index`th cell of a path of `len` cells: green at the start
/// fading to red at the end.
pub fn gradient(index: usize, len: usize) -> (u8, u8, u8) {
    let ratio = index as f64 / len.saturating_sub(1).max(1) as f64;
    (
        (ratio * 255.0).round() as u8,
        ((1.0 - ratio) * 255.0).round() as u8,
        0,
    )
}

fn links(path: &[Coord]) -> ndarray::Array2<LinkType> {
    let mut links = ndarray::Array2::from_elem((SIZE * 2 + 1, SIZE * 2 + 1), LinkType::None);

    for (&(ia, ja), &(ib, jb)) in path.iter().zip(path.iter().skip(1)) {
        let li = ia * 2 + 1;
        let lj = ja * 2 + 1;

        let di = ib as isize - ia as isize;
        let dj = jb as isize - ja as isize;

        let l = &mut links[[(li as isize + di) as usize, (lj as isize + dj) as usize]];
        *l = match (di, dj) {
            (-1, 0) | (1, 0) => LinkType::Vertical,
            (0, -1) | (0, 1) => LinkType::Horizontal,
            (-1, -1) | (1, 1) => {
                if *l == LinkType::Antidiagonal {
                    LinkType::Cross
                } else {
                    LinkType::Diagonal
                }
            }
            (1, -1) | (-1, 1) => {
                if *l == LinkType::Diagonal {
                    LinkType::Cross
                } else {
                    LinkType::Antidiagonal
                }
            }
            _ => unreachable!(),
        };
    }

    links
}

/// Draws the grid in a box with `path` highlighted and, if given, `word` in the
/// top border.
pub fn pretty_grid(grid: &Grid, word: Option<&str>, path: &[Coord]) -> String {
    let cells = grid.cells();
    let links = links(path);
    let mut pretty = ndarray::Array2::from_elem((SIZE * 2 + 1, SIZE * 2 + 1), " ".to_string());

    for i in 0..SIZE {
        for j in 0..SIZE {
            let pi = i * 2 + 1;
            let pj = j * 2 + 1;

            for di in -1..=1 {
                for dj in -1..=1 {
                    if di == 0 && dj == 0 {
                        continue;
                    }

                    let li = (pi as isize + di) as usize;
                    let lj = (pj as isize + dj) as usize;

                    pretty[[li, lj]] = match links[[li, lj]] {
                        LinkType::None => {
                            if dj == 0 {
                                "   "
                            } else {
                                " "
                            }
                        }
                        LinkType::Vertical => "\x1b[1;35m │ \x1b[0m",
                        LinkType::Horizontal => "\x1b[1;35m─\x1b[0m",
                        LinkType::Diagonal => "\x1b[1;35m╲\x1b[0m",
                        LinkType::Antidiagonal => "\x1b[1;35m╱\x1b[0m",
                        LinkType::Cross => "\x1b[1;35m╳\x1b[0m",
                    }
                    .to_string();
                }
            }

            let c = match cells[[i, j]] {
                EMPTY => '·',
                v => v,
            };
            pretty[[pi, pj]] = match path.iter().position(|&p| p == (i, j)) {
                Some(k) => {
                    let (r, g, b) = gradient(k, path.len());
                    format!("\x1b[1;30;48;2;{r};{g};{b}m {c} \x1b[0m")
                }
                None => format!(" {c} "),
            };
        }
    }

    let width = (SIZE - 1) + SIZE * 3;
    let bottom_border = "═".repeat(width);

    let top_border = match word {
        Some(word) => {
            let header = format!("{word} ({})", word.chars().count());
            let rest = width.saturating_sub(header.chars().count() + 1);
            format!("═{header}{}", "═".repeat(rest))
        }
        None => bottom_border.clone(),
    };

    let body = pretty
        .slice(ndarray::s![1..SIZE * 2, 1..SIZE * 2])
        .rows()
        .into_iter()
        .map(|cols| {
            format!(
                "║{}║",
                cols.into_iter().flat_map(|v| v.chars()).collect::<String>()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("╔{top_border}╗\n{body}\n╚{bottom_border}╝")
}
