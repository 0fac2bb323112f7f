//! Pattern model - token kinds, patterns and preset combinations.

use std::fmt;
use std::str::FromStr;

use crate::generator::GenerateError;

/// Classification of a pattern element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Number,
    Symbol,
}

impl TokenKind {
    /// Single-letter form used in pattern strings.
    pub fn letter(self) -> char {
        match self {
            TokenKind::Word => 'W',
            TokenKind::Number => 'N',
            TokenKind::Symbol => 'S',
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

impl FromStr for TokenKind {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "W" | "w" => Ok(TokenKind::Word),
            "N" | "n" => Ok(TokenKind::Number),
            "S" | "s" => Ok(TokenKind::Symbol),
            other => Err(GenerateError::InvalidPattern(format!(
                "unknown token '{}' (expected W, N or S)",
                other
            ))),
        }
    }
}

/// Ordered, non-empty sequence of token kinds.
///
/// The order is the concatenation order of the generated segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<TokenKind>,
}

impl Pattern {
    /// Builds a pattern from a list of token kinds.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::InvalidPattern` if `tokens` is empty.
    pub fn new(tokens: Vec<TokenKind>) -> Result<Self, GenerateError> {
        if tokens.is_empty() {
            return Err(GenerateError::InvalidPattern(
                "pattern must contain at least one token".to_string(),
            ));
        }
        Ok(Self { tokens })
    }

    /// Parses a pattern such as `"W N W"` or `"W,N,S,W"`.
    ///
    /// Tokens may be separated by whitespace, commas, or both.
    pub fn parse(text: &str) -> Result<Self, GenerateError> {
        let tokens = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(TokenKind::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tokens)
    }

    pub fn tokens(&self) -> &[TokenKind] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the pattern has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.tokens.contains(&kind)
    }
}

impl FromStr for Pattern {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = self.tokens.iter().map(|t| t.letter().to_string()).collect();
        f.write_str(&letters.join(","))
    }
}

/// Preset pattern shapes for the random mode, selected by `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    WordsOnly,
    WordsNumbers,
    WordsSymbols,
    WordsNumbersSymbols,
    NumbersOnly,
    SymbolsOnly,
    NumbersSymbols,
}

impl Combination {
    /// Lenient lookup: an unrecognized choice falls back to words + numbers + symbols.
    pub fn from_choice(choice: &str) -> Self {
        match choice.parse() {
            Ok(combination) => combination,
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Unknown combination '{}', falling back to W,N,S", choice);
                Combination::WordsNumbersSymbols
            }
        }
    }

    pub fn pattern(self) -> Pattern {
        use TokenKind::{Number, Symbol, Word};
        let tokens = match self {
            Combination::WordsOnly => vec![Word],
            Combination::WordsNumbers => vec![Word, Number],
            Combination::WordsSymbols => vec![Word, Symbol],
            Combination::WordsNumbersSymbols => vec![Word, Number, Symbol],
            Combination::NumbersOnly => vec![Number],
            Combination::SymbolsOnly => vec![Symbol],
            Combination::NumbersSymbols => vec![Number, Symbol],
        };
        Pattern { tokens }
    }
}

impl FromStr for Combination {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Combination::WordsOnly),
            "2" => Ok(Combination::WordsNumbers),
            "3" => Ok(Combination::WordsSymbols),
            "4" => Ok(Combination::WordsNumbersSymbols),
            "5" => Ok(Combination::NumbersOnly),
            "6" => Ok(Combination::SymbolsOnly),
            "7" => Ok(Combination::NumbersSymbols),
            other => Err(GenerateError::InvalidPattern(format!(
                "unknown combination '{}' (expected 1-7)",
                other
            ))),
        }
    }
}

impl From<Combination> for Pattern {
    fn from(combination: Combination) -> Self {
        combination.pattern()
    }
}
