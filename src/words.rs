use std::io::BufRead as _;

pub const MIN_WORD_LEN: usize = 2;
pub const MAX_WORD_LEN: usize = 15;

/// Used when the dictionary file can't be read.
pub const FALLBACK_WORDS: &[&str] = &["КОШКА", "СЛОН", "ДОМ", "СТОЛ", "МЯЧ"];

#[derive(Default, Debug)]
pub struct Node {
    children: std::collections::HashMap<char, Node>,
    is_end: bool,
}

/// Uppercases a letter and folds Ё into Е.
pub fn normalize_char(c: char) -> impl Iterator<Item = char> {
    c.to_uppercase().map(|c| if c == 'Ё' { 'Е' } else { c })
}

/// Normalizes a dictionary entry, returning `None` if it should be skipped.
pub fn normalize(word: &str) -> Option<String> {
    let word = word.trim().chars().flat_map(normalize_char).collect::<String>();
    let len = word.chars().count();
    if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) || !word.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(word)
}

impl Node {
    pub fn get(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Inserts `word` after normalization. Returns false if the word was
    /// rejected or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let Some(word) = normalize(word) else {
            return false;
        };
        let mut node = self;
        for letter in word.chars() {
            node = node.children.entry(letter).or_default();
        }
        !std::mem::replace(&mut node.is_end, true)
    }

    /// Follows `prefix` from this node one letter at a time.
    pub fn walk(&self, prefix: &str) -> Option<&Node> {
        prefix.chars().try_fold(self, |node, c| node.get(c))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(Node::is_end)
    }

    /// Number of words ending at or below this node.
    pub fn len(&self) -> usize {
        usize::from(self.is_end) + self.children.values().map(Node::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_end && self.children.is_empty()
    }
}

pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Node {
    let mut root = Node::default();
    for word in words {
        root.insert(word);
    }
    root
}

pub fn from_reader(reader: impl std::io::BufRead) -> std::io::Result<Node> {
    let mut root = Node::default();
    for word in reader.lines() {
        root.insert(&word?);
    }
    Ok(root)
}

pub fn fallback() -> Node {
    from_words(FALLBACK_WORDS.iter().copied())
}

/// Loads the dictionary at `path`, or the fallback list if it can't be read.
pub fn load(path: impl AsRef<std::path::Path>) -> Node {
    let path = path.as_ref();
    let start = std::time::Instant::now();

    let root = std::fs::File::open(path)
        .and_then(|file| from_reader(std::io::BufReader::new(file)));

    match root {
        Ok(root) => {
            log::info!(
                path = path.display().to_string().as_str(),
                words = root.len(),
                elapsed_ms = start.elapsed().as_millis() as u64;
                "dictionary loaded"
            );
            root
        }
        Err(e) => {
            log::warn!(
                path = path.display().to_string().as_str(),
                error = e.to_string().as_str();
                "could not load dictionary, using fallback words"
            );
            fallback()
        }
    }
}
