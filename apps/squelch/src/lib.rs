//! Squelch core library.
//!
//! This crate exposes programmatic APIs for scanning TypeScript sources
//! for suppression comments (linter disables, type-checker ignores,
//! coverage ignores, test skips, unjustified sanitization bypasses) and
//! reporting each occurrence with file and line.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `rules`: Static registry of suppression-comment checks.
//! - `scan`: File/file-list/directory scan runners.
//! - `models`: Data models for violations and scan output structs.
//! - `output`: Human/JSON printers for scan results.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod models;
pub mod output;
pub mod rules;
pub mod scan;
pub mod utils;
