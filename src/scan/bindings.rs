//! Import binding extraction.
//!
//! Recovers scope-introducing import statements from raw source text without
//! parsing. Two shapes are recognized:
//!
//! - Default-style: `import Button from "./ui/button";`
//! - Grouped-style: `import { Card, Button as Btn } from "./ui";`
//!
//! Each locally visible name maps to the verbatim statement text that
//! introduced it. Re-exports, dynamic imports, and import lists spanning
//! multiple matched regions are not recognized.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Map from a locally visible name to the verbatim import statement that
/// introduced it. For aliased items (`X as Y`) the key is the alias `Y`.
pub type BindingMap = HashMap<String, String>;

// `import <Identifier> from '<module>'` with optional trailing semicolon.
static DEFAULT_IMPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+([A-Za-z0-9_$]+)\s+from\s+['"][^'"]*['"];?"#).unwrap()
});

// `import { <items> } from '<module>'` with optional trailing semicolon.
static GROUPED_IMPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s*\{([^}]*)\}\s*from\s*['"][^'"]*['"];?"#).unwrap()
});

/// Extract all import bindings from source text.
///
/// Both patterns are matched across the whole input via `captures_iter`
/// (non-overlapping, left to right, no cursor state between calls). A name
/// bound more than once keeps the last statement processed; since the grouped
/// pass runs second, a name bound by both shapes resolves to the grouped
/// statement.
///
/// Malformed or absent import syntax simply yields no bindings.
pub fn extract_bindings(text: &str) -> BindingMap {
    let mut bindings = BindingMap::new();

    for caps in DEFAULT_IMPORT_REGEX.captures_iter(text) {
        let statement = &caps[0];
        bindings.insert(caps[1].to_string(), statement.to_string());
    }

    for caps in GROUPED_IMPORT_REGEX.captures_iter(text) {
        let statement = caps[0].to_string();
        for item in caps[1].split(',') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            // `X as Y` binds the alias Y, never the original X.
            let name = item.split(" as ").nth(1).map(str::trim).unwrap_or(item);
            bindings.insert(name.to_string(), statement.clone());
        }
    }

    bindings
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_import() {
        let src = r#"import Button from "./ui/button";"#;
        let bindings = extract_bindings(src);

        assert_eq!(bindings.len(), 1);
        assert_eq!(
            bindings.get("Button").map(String::as_str),
            Some(r#"import Button from "./ui/button";"#)
        );
    }

    #[test]
    fn test_default_import_single_quotes_no_semicolon() {
        let src = "import App from './App'";
        let bindings = extract_bindings(src);

        assert_eq!(
            bindings.get("App").map(String::as_str),
            Some("import App from './App'")
        );
    }

    #[test]
    fn test_grouped_import() {
        let src = r#"import { Card, Button } from "./ui";"#;
        let bindings = extract_bindings(src);

        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get("Card").map(String::as_str), Some(src));
        assert_eq!(bindings.get("Button").map(String::as_str), Some(src));
    }

    #[test]
    fn test_grouped_import_with_alias() {
        let src = r#"import { A, B as C } from "m";"#;
        let bindings = extract_bindings(src);

        // The alias is the bound name, the original is not.
        assert!(bindings.contains_key("A"));
        assert!(bindings.contains_key("C"));
        assert!(!bindings.contains_key("B"));
        assert_eq!(bindings.get("A"), bindings.get("C"));
    }

    #[test]
    fn test_multiple_statements() {
        let src = "\
import React from 'react';
import { useState, useEffect } from 'react';
import Layout from './Layout';
";
        let bindings = extract_bindings(src);

        assert_eq!(bindings.len(), 4);
        assert_eq!(
            bindings.get("Layout").map(String::as_str),
            Some("import Layout from './Layout';")
        );
        assert_eq!(
            bindings.get("useState").map(String::as_str),
            Some("import { useState, useEffect } from 'react';")
        );
    }

    #[test]
    fn test_duplicate_binding_last_wins() {
        let src = "\
import Button from './a';
import Button from './b';
";
        let bindings = extract_bindings(src);

        assert_eq!(
            bindings.get("Button").map(String::as_str),
            Some("import Button from './b';")
        );
    }

    #[test]
    fn test_grouped_overrides_default_for_same_name() {
        let src = "\
import Button from './a';
import { Button } from './b';
";
        let bindings = extract_bindings(src);

        assert_eq!(
            bindings.get("Button").map(String::as_str),
            Some("import { Button } from './b';")
        );
    }

    #[test]
    fn test_trailing_comma_does_not_bind_empty_name() {
        let src = "import { Button, } from './ui';";
        let bindings = extract_bindings(src);

        assert_eq!(bindings.len(), 1);
        assert!(bindings.contains_key("Button"));
    }

    #[test]
    fn test_no_imports() {
        assert!(extract_bindings("const x = 1;").is_empty());
        assert!(extract_bindings("").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let src = r#"import { A, B as C } from "m"; import D from "n";"#;
        assert_eq!(extract_bindings(src), extract_bindings(src));
    }
}
