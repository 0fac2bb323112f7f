//! Token pools - candidate strings for each token kind.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::pattern::TokenKind;

/// Default number pool, one entry per digit.
pub const DEFAULT_NUMBERS: &str = "0123456789";

/// Default symbol pool, one entry per character.
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/`~";

/// Ordered candidate strings for one token kind.
///
/// Zero-length entries are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    entries: Vec<String>,
}

impl Pool {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(Into::into)
            .filter(|e: &String| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// One entry per character of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        Self {
            entries: chars.chars().map(String::from).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    /// Uniform pick with replacement. `None` if the pool is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.entries.choose(rng).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Pool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Pool::new(iter)
    }
}

/// The word, number and symbol pools used by one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pools {
    pub words: Pool,
    pub numbers: Pool,
    pub symbols: Pool,
}

impl Pools {
    pub fn new(words: Pool, numbers: Pool, symbols: Pool) -> Self {
        Self {
            words,
            numbers,
            symbols,
        }
    }

    /// Word pool plus the default digit and punctuation pools.
    pub fn with_words(words: Pool) -> Self {
        Self::new(
            words,
            Pool::from_chars(DEFAULT_NUMBERS),
            Pool::from_chars(DEFAULT_SYMBOLS),
        )
    }

    pub fn get(&self, kind: TokenKind) -> &Pool {
        match kind {
            TokenKind::Word => &self.words,
            TokenKind::Number => &self.numbers,
            TokenKind::Symbol => &self.symbols,
        }
    }

    /// Total entries across all three pools.
    pub fn union_len(&self) -> usize {
        self.words.len() + self.numbers.len() + self.symbols.len()
    }

    /// Uniform pick over the concatenation words + numbers + symbols.
    pub fn choose_any<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        let total = self.union_len();
        if total == 0 {
            return None;
        }
        let mut index = rng.random_range(0..total);
        for pool in [&self.words, &self.numbers, &self.symbols] {
            if index < pool.len() {
                return Some(pool.entries[index].as_str());
            }
            index -= pool.len();
        }
        None
    }
}

impl Default for Pools {
    /// Empty word pool, default numbers and symbols.
    fn default() -> Self {
        Self::with_words(Pool::default())
    }
}
