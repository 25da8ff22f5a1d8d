//! Identifier normalization
//!
//! Converts TypeScript-style identifiers (`PascalCase`, `camelCase`) into the
//! lowercase, underscore-separated form used for table and column names.

use regex::Regex;
use std::sync::LazyLock;

// An uppercase letter starting a lowercase run, preceded by anything
static FIRST_CAP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));

// A lowercase letter or digit directly followed by an uppercase letter
static ALL_CAP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

/// Normalizes an identifier into snake case.
///
/// # Example
///
/// ```
/// use ts2psql_core::normalize;
///
/// assert_eq!(normalize("UserAccount"), "user_account");
/// assert_eq!(normalize("timeLastLogin"), "time_last_login");
/// assert_eq!(normalize("HTTPRequest"), "http_request");
/// ```
pub fn normalize(name: &str) -> String {
    let snake = FIRST_CAP_REGEX.replace_all(name, "${1}_${2}");
    let snake = ALL_CAP_REGEX.replace_all(&snake, "${1}_${2}");
    snake.to_lowercase()
}
