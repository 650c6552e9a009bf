//! App name normalization.
//!
//! Names are reduced to Latin and Cyrillic letters, digits and whitespace
//! before being split into search terms. Punctuation, emoji and every other
//! symbol are deleted outright, so `"Test-App!"` becomes `"TestApp"`.

use std::sync::LazyLock;

use regex::Regex;

/// Everything outside `a-zA-Z`, `0-9`, `А-Я`, `а-я` and whitespace.
/// `Ё`/`ё` sit outside the contiguous Cyrillic block and are removed.
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9А-Яа-я\s]").unwrap());

/// Delete every character outside the allowlist, keeping order and
/// whitespace intact.
#[must_use]
pub fn normalize(text: &str) -> String {
    DISALLOWED_CHARS.replace_all(text, "").into_owned()
}

/// Normalize `name` and split it on whitespace into non-empty words.
#[must_use]
pub fn split_words(name: &str) -> Vec<String> {
    normalize(name).split_whitespace().map(str::to_owned).collect()
}
