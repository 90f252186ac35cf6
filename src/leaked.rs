//! Leaked-password list
//!
//! Loads the most common leaked passwords once and keeps them, with their
//! rank, for the lifetime of the process.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard};
use thiserror::Error;

static LEAKED_PASSWORDS: RwLock<Option<LeakedList>> = RwLock::new(None);

/// How many entries of the list file are used.
pub const DEFAULT_LIMIT: usize = 10_000;

/// Used when no list file is available.
pub const FALLBACK_PASSWORDS: [&str; 10] = [
    "123456", "password", "123456789", "12345678", "qwerty",
    "111111", "abc123", "password1", "iloveyou", "admin",
];

#[derive(Error, Debug)]
pub enum LeakedListError {
    #[error("Failed to read leaked-password list: {0}")]
    Read(#[from] std::io::Error),
    #[error("Leaked-password list is empty")]
    EmptyFile,
}

/// Lowercased passwords mapped to their 1-based rank.
#[derive(Debug, Clone, Default)]
struct LeakedList {
    ranks: HashMap<String, usize>,
}

impl LeakedList {
    fn from_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I, limit: usize) -> Self {
        let mut ranks = HashMap::new();
        for (idx, line) in lines
            .into_iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .take(limit)
            .enumerate()
        {
            ranks.entry(line).or_insert(idx + 1);
        }
        Self { ranks }
    }

    fn fallback() -> Self {
        Self::from_lines(FALLBACK_PASSWORDS, DEFAULT_LIMIT)
    }
}

/// Returns the list file path.
///
/// Priority:
/// 1. Environment variable `PWD_LEAKED_LIST_PATH`
/// 2. Default path `./assets/top_100k.txt`
pub fn get_leaked_list_path() -> PathBuf {
    std::env::var("PWD_LEAKED_LIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/top_100k.txt"))
}

fn read_guard() -> RwLockReadGuard<'static, Option<LeakedList>> {
    LEAKED_PASSWORDS.read().unwrap_or_else(|e| e.into_inner())
}

/// Initializes the list from the configured path.
///
/// A missing file is not an error: the built-in fallback list is used.
/// Returns the number of distinct passwords loaded.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read, or is empty.
pub fn init_leaked_list() -> Result<usize, LeakedListError> {
    init_leaked_list_from_path(get_leaked_list_path())
}

/// Initializes the list from a specific file path, keeping the first
/// [`DEFAULT_LIMIT`] entries.
///
/// Idempotent: once a list is loaded, later calls return its size.
pub fn init_leaked_list_from_path<P: AsRef<Path>>(path: P) -> Result<usize, LeakedListError> {
    {
        let guard = read_guard();
        if let Some(list) = guard.as_ref() {
            return Ok(list.ranks.len());
        }
    }

    let path = path.as_ref();
    let list = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Leaked list initialization FAILED: Empty file {:?}", path);
            return Err(LeakedListError::EmptyFile);
        }
        LeakedList::from_lines(content.lines(), DEFAULT_LIMIT)
    } else {
        #[cfg(feature = "tracing")]
        tracing::warn!("Leaked list not found at {:?}, using built-in fallback", path);
        LeakedList::fallback()
    };

    let count = list.ranks.len();
    store(list);

    #[cfg(feature = "tracing")]
    tracing::info!("Leaked list initialized: {} passwords", count);

    Ok(count)
}

fn store(list: LeakedList) {
    let mut guard = LEAKED_PASSWORDS.write().unwrap_or_else(|e| e.into_inner());
    if guard.is_none() {
        *guard = Some(list);
    }
}

fn ensure_initialized() {
    if read_guard().is_some() {
        return;
    }
    if let Err(_e) = init_leaked_list() {
        #[cfg(feature = "tracing")]
        tracing::error!("Leaked list initialization failed ({}), using built-in fallback", _e);
        store(LeakedList::fallback());
    }
}

/// 1-based rank of `password` in the list (case-insensitive).
///
/// Loads the list on first use.
pub fn leaked_rank(password: &str) -> Option<usize> {
    ensure_initialized();
    read_guard()
        .as_ref()
        .and_then(|list| list.ranks.get(&password.to_lowercase()).copied())
}

/// Checks if a password is in the leaked list (case-insensitive).
pub fn is_leaked(password: &str) -> bool {
    leaked_rank(password).is_some()
}

/// Number of distinct passwords in the loaded list.
pub fn leaked_list_len() -> usize {
    ensure_initialized();
    read_guard().as_ref().map(|list| list.ranks.len()).unwrap_or(0)
}

/// Resets the list for testing purposes.
#[cfg(test)]
pub fn reset_leaked_list_for_testing() {
    let mut guard = LEAKED_PASSWORDS.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
}

/// Loads `passwords` (in rank order) from a temp file via the environment path.
#[cfg(test)]
pub(crate) fn setup_leaked_list_for_testing(passwords: &[&str]) {
    use std::io::Write;

    reset_leaked_list_for_testing();
    let mut temp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    for pwd in passwords {
        writeln!(temp_file, "{}", pwd).expect("Failed to write");
    }
    init_leaked_list_from_path(temp_file.path()).expect("Failed to load test list");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_get_leaked_list_path_default() {
        remove_env("PWD_LEAKED_LIST_PATH");

        let path = get_leaked_list_path();
        assert_eq!(path, PathBuf::from("./assets/top_100k.txt"));
    }

    #[test]
    #[serial]
    fn test_get_leaked_list_path_from_env() {
        let custom_path = "/custom/path/leaked.txt";
        set_env("PWD_LEAKED_LIST_PATH", custom_path);

        let path = get_leaked_list_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_LEAKED_LIST_PATH");
    }

    #[test]
    #[serial]
    fn test_missing_file_uses_fallback() {
        reset_leaked_list_for_testing();
        set_env("PWD_LEAKED_LIST_PATH", "/nonexistent/path/leaked.txt");

        let count = init_leaked_list().expect("fallback should load");
        assert_eq!(count, FALLBACK_PASSWORDS.len());
        assert_eq!(leaked_rank("123456"), Some(1));
        assert_eq!(leaked_rank("admin"), Some(10));

        remove_env("PWD_LEAKED_LIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_empty_file() {
        reset_leaked_list_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n").expect("Failed to write empty content");

        let result = init_leaked_list_from_path(temp_file.path());
        assert!(matches!(result, Err(LeakedListError::EmptyFile)));
    }

    #[test]
    #[serial]
    fn test_first_use_recovers_from_empty_file() {
        reset_leaked_list_for_testing();
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        set_env("PWD_LEAKED_LIST_PATH", temp_file.path().to_str().unwrap());

        assert!(is_leaked("password"));
        assert_eq!(leaked_list_len(), FALLBACK_PASSWORDS.len());

        remove_env("PWD_LEAKED_LIST_PATH");
    }

    #[test]
    #[serial]
    fn test_ranks_follow_file_order() {
        setup_leaked_list_for_testing(&["dragon", "", "Monkey", "dragon", "letmein"]);

        assert_eq!(leaked_rank("dragon"), Some(1));
        assert_eq!(leaked_rank("monkey"), Some(2));
        assert_eq!(leaked_rank("letmein"), Some(4));
        assert_eq!(leaked_list_len(), 3);
    }

    #[test]
    #[serial]
    fn test_limit_applies() {
        reset_leaked_list_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for i in 0..DEFAULT_LIMIT + 5 {
            writeln!(temp_file, "pw{}", i).expect("Failed to write");
        }

        let count = init_leaked_list_from_path(temp_file.path()).unwrap();
        assert_eq!(count, DEFAULT_LIMIT);
        assert!(is_leaked("pw9999"));
        assert!(!is_leaked("pw10000"));
    }

    #[test]
    #[serial]
    fn test_is_leaked_case_insensitive() {
        setup_leaked_list_for_testing(&["testpassword"]);

        assert!(is_leaked("testpassword"));
        assert!(is_leaked("TESTPASSWORD"));
        assert!(!is_leaked("veryuncommonpassword987"));
    }

    #[test]
    #[serial]
    fn test_init_is_idempotent() {
        setup_leaked_list_for_testing(&["one", "two"]);

        let count = init_leaked_list_from_path("/nonexistent/other.txt").unwrap();
        assert_eq!(count, 2);
        assert!(!is_leaked("123456"));
    }
}
