//! Pattern-based password generation library
//!
//! This library builds bulk password lists from a pattern of word, number
//! and symbol tokens, drawing from a word list and configurable character pools.
//!
//! # Features
//!
//! - `async` (default): Enables channel streaming with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-generator` binary
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to the word list file
//!   (default: `./assets/words.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_generator::{GenerationMode, Generator, Pattern, Pool, Pools};
//!
//! let pools = Pools::with_words(Pool::new(["cat", "dog"]));
//! let pattern = Pattern::parse("W N W").expect("valid pattern");
//!
//! let generator = Generator::new(pattern, pools, GenerationMode::FixedLength(10))
//!     .expect("word pool is not empty");
//!
//! let batch = generator.batch(5, &mut rand::rng());
//! assert_eq!(batch.len(), 5);
//! assert!(batch.iter().all(|p| p.chars().count() == 10));
//! ```

// Internal modules
mod batch;
mod generator;
mod output;
mod pattern;
mod pools;
mod wordlist;

// Public API
pub use batch::{Generator, generate_batch};
pub use generator::{
    GenerateError, GenerationMode, generate, generate_exact_pattern, generate_fixed_length, validate,
};
pub use output::{OutputError, write_passwords, write_passwords_to_path};
pub use pattern::{Combination, Pattern, TokenKind};
pub use pools::{DEFAULT_NUMBERS, DEFAULT_SYMBOLS, Pool, Pools};
pub use wordlist::{
    WORDLIST_PATH_ENV, WordlistError, get_wordlist_path, load_word_pool, load_words,
    load_words_from_path,
};

#[cfg(feature = "async")]
pub use batch::{BatchError, generate_batch_tx};
