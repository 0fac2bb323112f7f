//! Word list loading
//!
//! Reads the word pool from an external text file.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pools::Pool;

/// Environment variable overriding the default word list location.
pub const WORDLIST_PATH_ENV: &str = "PWD_WORDLIST_PATH";

const DEFAULT_WORDLIST_PATH: &str = "./assets/words.txt";

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file contains no words")]
    EmptyFile,
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/words.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var(WORDLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORDLIST_PATH))
}

/// Loads words from the configured word list path.
///
/// See [`get_wordlist_path`] for how the path is resolved.
pub fn load_words() -> Result<Vec<String>, WordlistError> {
    load_words_from_path(get_wordlist_path())
}

/// Loads words from a specific file, one word per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
/// Order and duplicates are preserved.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no non-blank lines
pub fn load_words_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordlistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list loading FAILED: FileNotFound {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let words = parse_words(&content);

    if words.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list loading FAILED: Empty file {:?}", path);
        return Err(WordlistError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Word list loaded: {} words from {:?}", words.len(), path);

    Ok(words)
}

/// Loads the word list straight into a [`Pool`].
pub fn load_word_pool<P: AsRef<Path>>(path: P) -> Result<Pool, WordlistError> {
    load_words_from_path(path).map(Pool::new)
}

fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
