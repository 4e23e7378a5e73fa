//! Restricted wildcard matching for ignore patterns.
//!
//! Supports exactly two wildcards: `*` matches any run of characters within a
//! path segment (never `/`), `**` matches any run of characters including
//! `/`. A leading `**/` additionally allows the whole pattern to match with
//! or without an arbitrary path prefix. Patterns are compiled into fully
//! anchored regexes; matching is case-sensitive over the literal path string
//! supplied by the caller (no normalization, no symlink resolution).

use regex::Regex;

// Internal stand-in for `**` during translation. NUL cannot appear in
// patterns coming from the CLI or a JSON config file.
const DOUBLE_STAR_TOKEN: char = '\0';

/// Compile a wildcard pattern into an anchored matching regex.
///
/// Every regex metacharacter in the pattern is escaped during translation,
/// so well-formed wildcard patterns always compile; a failure here is a
/// caller bug, not a recoverable runtime error.
pub fn compile_glob(pattern: &str) -> Regex {
    let (prefix, rest) = match pattern.strip_prefix("**/") {
        // The match may optionally skip any path prefix ending in a
        // separator, so the start anchor is not a bare `^`.
        Some(rest) => ("^(?:.*/)?", rest),
        None => ("^", pattern),
    };

    let rest = rest.replace("**", &DOUBLE_STAR_TOKEN.to_string());

    let mut translated = String::with_capacity(rest.len() + 16);
    translated.push_str(prefix);
    for ch in rest.chars() {
        match ch {
            '.' | '+' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\' => {
                translated.push('\\');
                translated.push(ch);
            }
            '*' => translated.push_str("[^/]*"),
            DOUBLE_STAR_TOKEN => translated.push_str(".*"),
            _ => translated.push(ch),
        }
    }
    translated.push('$');

    Regex::new(&translated).unwrap()
}

/// Check whether a path matches a wildcard pattern in full.
pub fn matches(path: &str, pattern: &str) -> bool {
    compile_glob(pattern).is_match(path)
}

/// Parse a comma-separated ignore-pattern string into trimmed, non-empty
/// patterns.
pub fn parse_ignore_patterns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Pre-compiled set of ignore patterns.
///
/// A path is ignored when any pattern matches either its full form or its
/// final segment (basename) alone.
pub struct IgnoreMatcher {
    patterns: Vec<Regex>,
}

impl IgnoreMatcher {
    pub fn new(patterns: &[String]) -> Self {
        Self {
            patterns: patterns.iter().map(|p| compile_glob(p)).collect(),
        }
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        let basename = path.rsplit('/').next().unwrap_or(path);
        self.patterns
            .iter()
            .any(|re| re.is_match(path) || re.is_match(basename))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_literal_pattern() {
        assert!(matches("src/index.tsx", "src/index.tsx"));
        assert!(!matches("src/index.tsx", "src/index.ts"));
        // Anchored at both ends: no substring matching.
        assert!(!matches("a/src/index.tsx", "src/index.tsx"));
        assert!(!matches("src/index.tsx", "index.tsx"));
    }

    #[test]
    fn test_single_star_stays_within_segment() {
        assert!(matches("src/index.tsx", "src/*.tsx"));
        assert!(!matches("src/components/index.tsx", "src/*.tsx"));
    }

    #[test]
    fn test_double_star_crosses_segments() {
        assert!(matches("src/components/index.tsx", "src/**/*.tsx"));
        assert!(matches("src/a/b/c/index.tsx", "src/**/*.tsx"));
    }

    #[test]
    fn test_leading_double_star_prefix_is_optional() {
        assert!(matches("node_modules/lib.js", "**/node_modules/**"));
        assert!(matches("a/b/node_modules/lib.js", "**/node_modules/**"));
        assert!(!matches("src/lib.js", "**/node_modules/**"));
    }

    #[test]
    fn test_dots_are_literal() {
        assert!(matches("app.test.tsx", "*test*"));
        assert!(!matches("appXtestXtsx/y", "*test*"));
        assert!(!matches("a-tsx", "*.tsx"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!matches("SRC/index.tsx", "src/*.tsx"));
    }

    #[test]
    fn test_parse_ignore_patterns() {
        assert_eq!(
            parse_ignore_patterns("node_modules/*, src/ignore.ts"),
            vec!["node_modules/*", "src/ignore.ts"]
        );
        assert_eq!(
            parse_ignore_patterns(",a, ,b,"),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(parse_ignore_patterns("").is_empty());
        assert!(parse_ignore_patterns(" , ").is_empty());
    }

    #[test]
    fn test_ignore_matcher_full_path_or_basename() {
        let matcher = IgnoreMatcher::new(&[
            "**/node_modules/**".to_string(),
            "*test*".to_string(),
        ]);

        let paths = ["src/App.tsx", "src/App.test.tsx", "node_modules/lib.js"];
        let survivors: Vec<&str> = paths
            .iter()
            .copied()
            .filter(|p| !matcher.is_ignored(p))
            .collect();

        // `*test*` matches App.test.tsx only via its basename.
        assert_eq!(survivors, vec!["src/App.tsx"]);
    }

    #[test]
    fn test_ignore_matcher_empty_pattern_set() {
        let matcher = IgnoreMatcher::new(&[]);
        assert!(!matcher.is_ignored("src/App.tsx"));
    }
}
