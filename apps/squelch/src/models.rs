//! Shared data models for scan output.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single suppression-comment finding at a file location.
pub struct Violation {
    pub file: String,
    /// 1-based line of the offending comment. Line 0 marks a synthetic
    /// file-level violation (the file itself could not be read).
    pub line: usize,
    pub rule: String,
    pub message: String,
}

#[derive(Serialize)]
/// Aggregated scan counts used by printers.
pub struct Summary {
    pub violations: usize,
    pub files: usize,
}

#[derive(Serialize)]
/// Scan results container.
pub struct ScanResult {
    pub violations: Vec<Violation>,
    pub summary: Summary,
}
