//! Tagscan - static scanner for capitalized JSX tag usages
//!
//! Tagscan is a CLI tool and library for locating usages of capitalized
//! (component-style) tags in JavaScript/TypeScript sources and associating
//! each usage with the import statement that brought the name into scope.
//! It works on raw text with lightweight lexical patterns; it is not a
//! language parser and performs no scope or shadowing resolution.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `file_scanner`: Directory traversal and candidate file filtering
//! - `report`: Console output formatting
//! - `scan`: Core extraction engine (bindings, usages, glob matching)

pub mod cli;
pub mod config;
pub mod file_scanner;
pub mod report;
pub mod scan;
