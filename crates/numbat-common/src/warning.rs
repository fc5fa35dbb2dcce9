//! Renderer diagnostics with colored terminal output.
//!
//! Style and layout run repeatedly over the same document, so a bad
//! input value would otherwise be reported on every pass. Messages are
//! deduplicated globally: each unique component/message pair prints at
//! most once until [`clear_warnings`] is called for a new document.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Report a clamped or ignored value, printing once per unique message.
///
/// # Example
/// ```ignore
/// warn_once("Style", "font-weight 1200 out of range, clamping");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = WARNED.lock().unwrap().insert(key);
    if first_time {
        eprintln!("{YELLOW}[Numbat {component}] ⚠ {message}{RESET}");
    }
}

/// Forget all recorded warnings; call when a new document is loaded so
/// its problems are reported afresh.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}

/// Number of distinct warnings recorded since the last
/// [`clear_warnings`].
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn warning_count() -> usize {
    WARNED.lock().unwrap().len()
}
