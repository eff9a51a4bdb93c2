//! Predictable pattern registry
//!
//! Holds the substrings that mark a password as predictable. The built-in
//! set is always active; extra patterns can be loaded once from a file.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Substrings that are always treated as predictable.
pub const COMMON_PATTERNS: [&str; 5] = ["123", "abc", "password", "admin", "test"];

const PATTERNS_PATH_ENV: &str = "PWD_AUDIT_PATTERNS_PATH";
const DEFAULT_PATTERNS_PATH: &str = "./assets/patterns.txt";

static EXTRA_PATTERNS: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum PatternsError {
    #[error("Pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Pattern file is empty")]
    EmptyFile,
}

/// Returns the pattern file path.
///
/// Priority:
/// 1. Environment variable `PWD_AUDIT_PATTERNS_PATH`
/// 2. Default path `./assets/patterns.txt`
pub fn get_patterns_path() -> PathBuf {
    std::env::var(PATTERNS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_PATTERNS_PATH))
}

/// Loads extra predictable patterns from the configured file.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or is empty.
pub fn init_patterns() -> Result<usize, PatternsError> {
    init_patterns_from_path(get_patterns_path())
}

/// Loads extra predictable patterns from a specific file path.
///
/// One pattern per line; entries are trimmed and lowercased, blank lines
/// are skipped. Only the first successful load takes effect, later calls
/// return the number of patterns already loaded.
pub fn init_patterns_from_path<P: AsRef<Path>>(path: P) -> Result<usize, PatternsError> {
    {
        let guard = EXTRA_PATTERNS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(loaded) = guard.as_ref() {
            return Ok(loaded.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Pattern registry initialization FAILED: file not found {:?}", path);
        return Err(PatternsError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Pattern registry initialization FAILED: empty file {:?}", path);
        return Err(PatternsError::EmptyFile);
    }

    let mut patterns: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();
    patterns.sort();
    patterns.dedup();

    let count = {
        let mut guard = EXTRA_PATTERNS.write().unwrap_or_else(PoisonError::into_inner);
        // another caller may have loaded while the file was being read
        if let Some(loaded) = guard.as_ref() {
            return Ok(loaded.len());
        }
        let count = patterns.len();
        *guard = Some(patterns);
        count
    };

    #[cfg(feature = "tracing")]
    tracing::info!("Pattern registry initialized: {} extra patterns from {:?}", count, path);

    Ok(count)
}

/// Checks whether the password contains a predictable substring.
///
/// Matching is case-insensitive and covers the built-in patterns plus any
/// patterns loaded with [`init_patterns`].
pub fn contains_common_pattern(password: &str) -> bool {
    let lowered = password.to_lowercase();
    if COMMON_PATTERNS.iter().any(|p| lowered.contains(p)) {
        return true;
    }

    let guard = EXTRA_PATTERNS.read().unwrap_or_else(PoisonError::into_inner);
    guard
        .as_ref()
        .is_some_and(|extra| extra.iter().any(|p| lowered.contains(p.as_str())))
}

/// Clears loaded patterns for testing purposes.
#[cfg(test)]
pub fn reset_patterns_for_testing() {
    let mut guard = EXTRA_PATTERNS.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
