//! Parser warnings with colored terminal output.
//!
//! Fatal problems are reported as [`ParseError`](crate::error::ParseError)s.
//! Warnings cover input the tokenizer accepts but that is probably a mistake,
//! such as an unknown named character reference passed through as text. Each
//! distinct warning is printed once per process (or until [`clear_warnings`]).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about suspicious input (prints once per unique message).
///
/// Returns `true` if the warning was printed, `false` if it had already been
/// seen.
///
/// # Example
/// ```ignore
/// warn_once("Tokenizer", "unknown named character reference &foo;");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{YELLOW}[Tessel {component}] ⚠ {message}{RESET}");
    }
    should_print
}

/// Clear all recorded warnings (call before parsing an unrelated input)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
