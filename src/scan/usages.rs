//! Tag usage extraction.
//!
//! Scans source text line by line for capitalized tag-opening tokens
//! (`<Button`, `<App.Header` matches `App`) and records each occurrence with
//! its 1-indexed line number and trimmed line text. When a [`BindingMap`] is
//! supplied, each usage is decorated with the import statement that declared
//! its name.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::scan::bindings::BindingMap;

// A `<` immediately followed by an uppercase ASCII letter, then zero or more
// letters/digits/underscore. Deliberately does NOT require the `<` to follow
// a non-identifier character, so generic-type syntax like `Promise<Character>`
// also matches `<Character`. The stricter lookbehind variant was rejected to
// keep the scanner simple; keep this behavior as-is.
static TAG_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Z][A-Za-z0-9_]*)").unwrap());

/// A single detected tag usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    /// 1-indexed line number.
    pub line: usize,
    /// The containing line with leading/trailing whitespace stripped.
    pub line_text: String,
    /// The import statement that declared this name, when known.
    pub origin: Option<String>,
}

/// Map from tag name to its usages in first-to-last discovery order.
pub type UsageIndex = HashMap<String, Vec<Usage>>;

/// Extract all capitalized tag usages from source text.
///
/// Every non-overlapping occurrence on a line is a separate usage. `origin`
/// is populated iff `bindings` contains the tag name; it is never an empty
/// string.
pub fn extract_usages(text: &str, bindings: Option<&BindingMap>) -> UsageIndex {
    let mut usages = UsageIndex::new();

    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        for caps in TAG_OPEN_REGEX.captures_iter(line) {
            let name = &caps[1];
            let origin = bindings.and_then(|b| b.get(name)).cloned();
            usages.entry(name.to_string()).or_default().push(Usage {
                line: i + 1,
                line_text: trimmed.to_string(),
                origin,
            });
        }
    }

    usages
}
