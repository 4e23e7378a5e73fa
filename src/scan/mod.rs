//! Core lexical extraction engine.
//!
//! Three pure, I/O-free components, composed per file by the scan command:
//!
//! - `bindings`: recovers import bindings from raw source text
//! - `usages`: locates capitalized tag-opening tokens line by line
//! - `glob`: restricted `*`/`**` wildcard matching for ignore patterns
//!
//! All functions here are total: any string input (including empty) yields a
//! possibly-empty result and never an error. They hold no state between
//! calls, so the scan command is free to run them in parallel across files.

pub mod bindings;
pub mod glob;
pub mod usages;

pub use bindings::{BindingMap, extract_bindings};
pub use usages::{Usage, UsageIndex, extract_usages};
