//! Password generator - pattern-driven synthesis logic.

use rand::Rng;
use thiserror::Error;

use crate::pattern::{Pattern, TokenKind};
use crate::pools::Pools;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("No candidates available for {0} tokens")]
    EmptyPool(TokenKind),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

/// How a pattern is turned into a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Cycle the pattern until `target_length` characters are reached, then truncate.
    FixedLength(usize),
    /// Apply the pattern once; optionally pad from all pools up to `min_length`.
    ExactPattern { min_length: Option<usize> },
}

impl GenerationMode {
    pub fn exact() -> Self {
        GenerationMode::ExactPattern { min_length: None }
    }

    fn capacity_hint(self) -> usize {
        match self {
            GenerationMode::FixedLength(target) => target,
            GenerationMode::ExactPattern { min_length } => min_length.unwrap_or(16),
        }
    }
}

/// Checks that `pattern`, `pools` and `mode` can produce a password.
///
/// # Errors
///
/// - `InvalidPattern` if the pattern is empty or a fixed target length is zero
/// - `EmptyPool` if a token kind used by the pattern has no candidates
pub fn validate(pattern: &Pattern, pools: &Pools, mode: GenerationMode) -> Result<(), GenerateError> {
    if pattern.is_empty() {
        return Err(GenerateError::InvalidPattern(
            "pattern must contain at least one token".to_string(),
        ));
    }
    if mode == GenerationMode::FixedLength(0) {
        return Err(GenerateError::InvalidPattern(
            "target length must be at least 1".to_string(),
        ));
    }
    for kind in [TokenKind::Word, TokenKind::Number, TokenKind::Symbol] {
        if pattern.contains(kind) && pools.get(kind).is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Generation rejected: empty {} pool for pattern {}", kind, pattern);
            return Err(GenerateError::EmptyPool(kind));
        }
    }
    Ok(())
}

/// Generates one password in the given mode.
///
/// # Arguments
/// * `pattern` - Token order to follow
/// * `pools` - Candidate strings per token kind
/// * `mode` - Fixed-length or exact-pattern generation
/// * `rng` - Random source; pass a seeded generator for reproducible output
pub fn generate<R: Rng + ?Sized>(
    pattern: &Pattern,
    pools: &Pools,
    mode: GenerationMode,
    rng: &mut R,
) -> Result<String, GenerateError> {
    validate(pattern, pools, mode)?;
    render(pattern, pools, mode, rng)
}

/// Fixed-length entry point. See [`GenerationMode::FixedLength`].
pub fn generate_fixed_length<R: Rng + ?Sized>(
    pattern: &Pattern,
    pools: &Pools,
    target_length: usize,
    rng: &mut R,
) -> Result<String, GenerateError> {
    generate(pattern, pools, GenerationMode::FixedLength(target_length), rng)
}

/// Exact-pattern entry point. See [`GenerationMode::ExactPattern`].
pub fn generate_exact_pattern<R: Rng + ?Sized>(
    pattern: &Pattern,
    pools: &Pools,
    min_length: Option<usize>,
    rng: &mut R,
) -> Result<String, GenerateError> {
    generate(pattern, pools, GenerationMode::ExactPattern { min_length }, rng)
}

/// Renders a password for inputs that already passed [`validate`].
pub(crate) fn render<R: Rng + ?Sized>(
    pattern: &Pattern,
    pools: &Pools,
    mode: GenerationMode,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let mut password = PasswordBuffer::with_capacity(mode.capacity_hint());

    match mode {
        GenerationMode::FixedLength(target) => {
            // Length is checked before every token, so a pass may stop early.
            'fill: loop {
                for &kind in pattern.tokens() {
                    if password.chars >= target {
                        break 'fill;
                    }
                    password.push(pick(pools, kind, rng)?);
                }
            }
            password.truncate_chars(target);
        }
        GenerationMode::ExactPattern { min_length } => {
            for &kind in pattern.tokens() {
                password.push(pick(pools, kind, rng)?);
            }
            if let Some(floor) = min_length {
                while password.chars < floor {
                    let piece = pools.choose_any(rng).ok_or_else(|| {
                        GenerateError::InvalidPattern("all pools are empty".to_string())
                    })?;
                    password.push(piece);
                }
            }
        }
    }

    Ok(password.into_string())
}

fn pick<'a, R: Rng + ?Sized>(
    pools: &'a Pools,
    kind: TokenKind,
    rng: &mut R,
) -> Result<&'a str, GenerateError> {
    pools.get(kind).choose(rng).ok_or(GenerateError::EmptyPool(kind))
}

/// String builder that tracks its length in characters.
struct PasswordBuffer {
    text: String,
    chars: usize,
}

impl PasswordBuffer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            chars: 0,
        }
    }

    fn push(&mut self, piece: &str) {
        self.text.push_str(piece);
        self.chars += piece.chars().count();
    }

    fn truncate_chars(&mut self, limit: usize) {
        if self.chars <= limit {
            return;
        }
        if let Some((byte_index, _)) = self.text.char_indices().nth(limit) {
            self.text.truncate(byte_index);
            self.chars = limit;
        }
    }

    fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Combination;
    use crate::pools::{DEFAULT_NUMBERS, Pool};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn pools(words: &[&str], numbers: &[&str], symbols: &[&str]) -> Pools {
        Pools::new(
            Pool::new(words.iter().copied()),
            Pool::new(numbers.iter().copied()),
            Pool::new(symbols.iter().copied()),
        )
    }

    /// Splits `password` into segments following `pattern`, trying every pool entry.
    fn decompose(password: &str, pattern: &Pattern, pools: &Pools) -> Option<Vec<String>> {
        fn walk(rest: &str, tokens: &[TokenKind], pools: &Pools, out: &mut Vec<String>) -> bool {
            let Some((&kind, tail)) = tokens.split_first() else {
                return rest.is_empty();
            };
            for entry in pools.get(kind).entries() {
                if let Some(next) = rest.strip_prefix(entry.as_str()) {
                    out.push(entry.clone());
                    if walk(next, tail, pools, out) {
                        return true;
                    }
                    out.pop();
                }
            }
            false
        }
        let mut out = Vec::new();
        walk(password, pattern.tokens(), pools, &mut out).then_some(out)
    }

    #[test]
    fn test_exact_pattern_word_number_word() {
        let pools = pools(&["cat", "dog"], &["1", "2", "3"], &["!"]);
        let pattern = Pattern::parse("W N W").unwrap();
        let mut rng = rng();

        for _ in 0..50 {
            let pwd = generate_exact_pattern(&pattern, &pools, None, &mut rng).unwrap();
            assert_eq!(pwd.len(), 7, "unexpected password {}", pwd);
            let segments = decompose(&pwd, &pattern, &pools).expect("password must follow pattern");
            assert_eq!(segments.len(), 3);
            assert!(["cat", "dog"].contains(&segments[0].as_str()));
            assert!(["1", "2", "3"].contains(&segments[1].as_str()));
            assert!(["cat", "dog"].contains(&segments[2].as_str()));
        }
    }

    #[test]
    fn test_exact_pattern_segment_count_matches_pattern() {
        let pools = pools(&["alpha", "beta", "gamma"], &["7", "8"], &["#", "%"]);
        let pattern = Pattern::parse("S,W,N,W,S").unwrap();
        let mut rng = rng();

        for _ in 0..50 {
            let pwd = generate(&pattern, &pools, GenerationMode::exact(), &mut rng).unwrap();
            let segments = decompose(&pwd, &pattern, &pools).expect("password must follow pattern");
            assert_eq!(segments.len(), pattern.len());
        }
    }

    #[test]
    fn test_fixed_length_cycles_and_truncates() {
        let pools = pools(&["pass"], &[], &[]);
        let pattern = Pattern::parse("W").unwrap();
        let pwd = generate_fixed_length(&pattern, &pools, 10, &mut rng()).unwrap();
        assert_eq!(pwd, "passpasspa");
    }

    #[test]
    fn test_fixed_length_cuts_mid_token() {
        let pools = pools(&["abcdefgh"], &["1"], &[]);
        let pattern = Pattern::parse("W N").unwrap();
        let pwd = generate_fixed_length(&pattern, &pools, 3, &mut rng()).unwrap();
        assert_eq!(pwd, "abc");
    }

    #[test]
    fn test_fixed_length_stops_mid_pass() {
        let pools = pools(&["ab"], &["1"], &["!"]);
        let pattern = Pattern::parse("W N S").unwrap();
        // "ab" reaches 2, the symbol is never drawn.
        let pwd = generate_fixed_length(&pattern, &pools, 2, &mut rng()).unwrap();
        assert_eq!(pwd, "ab");
        let pwd = generate_fixed_length(&pattern, &pools, 6, &mut rng()).unwrap();
        assert_eq!(pwd, "ab1!ab");
    }

    #[test]
    fn test_fixed_length_exact_for_many_targets() {
        let pools = Pools::with_words(Pool::new(["correct", "horse", "battery", "staple"]));
        let pattern = Pattern::parse("W N S W").unwrap();
        let mut rng = rng();

        for target in 1..=64 {
            let pwd = generate_fixed_length(&pattern, &pools, target, &mut rng).unwrap();
            assert_eq!(pwd.chars().count(), target);
        }
    }

    #[test]
    fn test_fixed_length_counts_characters_not_bytes() {
        let pools = pools(&["héllo", "wörld"], &[], &[]);
        let pattern = Pattern::parse("W").unwrap();
        let pwd = generate_fixed_length(&pattern, &pools, 7, &mut rng()).unwrap();
        assert_eq!(pwd.chars().count(), 7);
    }

    #[test]
    fn test_numbers_only_combination() {
        let pools = Pools::default();
        let pattern = Combination::NumbersOnly.pattern();
        let mut rng = rng();

        for _ in 0..20 {
            let pwd = generate_fixed_length(&pattern, &pools, 6, &mut rng).unwrap();
            assert_eq!(pwd.len(), 6);
            assert!(pwd.chars().all(|c| DEFAULT_NUMBERS.contains(c)));
        }
    }

    #[test]
    fn test_exact_pattern_with_floor() {
        let pools = pools(&["cat", "dog"], &["1", "2"], &["!"]);
        let pattern = Pattern::parse("W N").unwrap();
        let mut rng = rng();

        for _ in 0..50 {
            let pwd = generate_exact_pattern(&pattern, &pools, Some(12), &mut rng).unwrap();
            assert!(pwd.len() >= 12);
            let head = &pwd[..4];
            assert!(decompose(head, &pattern, &pools).is_some(), "bad head {}", head);
        }
    }

    #[test]
    fn test_exact_pattern_floor_already_met() {
        let pools = pools(&["lengthy"], &["1"], &["!"]);
        let pattern = Pattern::parse("W N").unwrap();
        let pwd = generate_exact_pattern(&pattern, &pools, Some(3), &mut rng()).unwrap();
        assert_eq!(pwd, "lengthy1");
    }

    #[test]
    fn test_exact_pattern_floor_may_use_other_kinds() {
        let pools = pools(&["w"], &[], &["!"]);
        let pattern = Pattern::parse("W").unwrap();
        let mut rng = rng();
        let mut saw_symbol = false;
        for _ in 0..20 {
            let pwd = generate_exact_pattern(&pattern, &pools, Some(10), &mut rng).unwrap();
            assert_eq!(pwd.len(), 10);
            saw_symbol |= pwd.contains('!');
        }
        assert!(saw_symbol);
    }

    #[test]
    fn test_empty_word_pool() {
        let pools = Pools::default();
        let pattern = Pattern::parse("W N").unwrap();
        let result = generate(&pattern, &pools, GenerationMode::exact(), &mut rng());
        assert_eq!(result, Err(GenerateError::EmptyPool(TokenKind::Word)));
    }

    #[test]
    fn test_unused_empty_pool_is_fine() {
        let pools = pools(&[], &["4"], &[]);
        let pattern = Pattern::parse("N").unwrap();
        let pwd = generate_fixed_length(&pattern, &pools, 3, &mut rng()).unwrap();
        assert_eq!(pwd, "444");
    }

    #[test]
    fn test_zero_target_length() {
        let pools = Pools::with_words(Pool::new(["cat"]));
        let pattern = Pattern::parse("W").unwrap();
        let result = generate_fixed_length(&pattern, &pools, 0, &mut rng());
        assert!(matches!(result, Err(GenerateError::InvalidPattern(_))));
    }

    #[test]
    fn test_not_idempotent_but_valid() {
        let pools = Pools::with_words(Pool::new(["a", "b", "c", "d", "e", "f"]));
        let pattern = Pattern::parse("W W W W W W W W").unwrap();
        let mut rng = rng();
        let first = generate_exact_pattern(&pattern, &pools, None, &mut rng).unwrap();
        let second = generate_exact_pattern(&pattern, &pools, None, &mut rng).unwrap();
        assert_eq!(first.len(), 8);
        assert_eq!(second.len(), 8);
        assert_ne!(first, second);
    }
}
