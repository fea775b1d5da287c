//! Scan runner: applies the rule registry to files and directories.
//!
//! Produces a `ScanResult` with violations and a summary. Files are
//! independent, so the per-file work runs on the rayon pool; the
//! order-preserving collect keeps results in input order.

use crate::models::{ScanResult, Summary, Violation};
use crate::rules::RULES;
use glob::glob;
use rayon::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Extensions making up the scanned language family. Fixed allowlist;
/// anything else passes through unchecked.
const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Basename suffixes identifying test files. Only the coverage-ignore
/// rule honors this flag.
const TEST_FILE_SUFFIXES: &[&str] = &[".test.ts", ".test.tsx", ".spec.ts", ".spec.tsx"];

/// Basenames never scanned: the tool's own wrapper scripts embed the very
/// markers the rules hunt for.
const SKIPPED_BASENAMES: &[&str] = &["squelch.ts"];

/// Directory names pruned from recursive discovery.
const EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// Check one file against every rule active for `repo`.
///
/// Unreadable files yield a single synthetic violation describing the
/// failure; skipped files (denylisted basename, foreign extension) yield
/// nothing.
pub fn check_file(path: &Path, repo: &str) -> Vec<Violation> {
    scan_file(path, repo).unwrap_or_default()
}

/// Check an explicit file list, preserving input order in the output.
pub fn check_files(paths: &[PathBuf], repo: &str) -> ScanResult {
    let per_file: Vec<Option<Vec<Violation>>> =
        paths.par_iter().map(|p| scan_file(p, repo)).collect();
    let mut violations: Vec<Violation> = Vec::new();
    let mut files = 0usize;
    for scanned in per_file {
        if let Some(mut found) = scanned {
            files += 1;
            violations.append(&mut found);
        }
    }
    ScanResult {
        summary: Summary {
            violations: violations.len(),
            files,
        },
        violations,
    }
}

/// Recursively discover source files under `root` and check them.
///
/// Targets are sorted so repeated runs on an unchanged tree report an
/// identical violation list.
pub fn check_directory(root: &Path, repo: &str) -> ScanResult {
    let mut targets: Vec<PathBuf> = Vec::new();
    for ext in SOURCE_EXTENSIONS {
        let pattern = root.join(format!("**/*.{ext}")).to_string_lossy().to_string();
        for path in glob(&pattern).expect("bad glob pattern").flatten() {
            if !in_excluded_dir(&path) {
                targets.push(path);
            }
        }
    }
    targets.sort();
    check_files(&targets, repo)
}

fn scan_file(path: &Path, repo: &str) -> Option<Vec<Violation>> {
    let basename = path.file_name().map(OsStr::to_string_lossy)?;
    if SKIPPED_BASENAMES.iter().any(|s| *s == basename) {
        return None;
    }
    if !has_source_extension(path) {
        return None;
    }
    let file = path.to_string_lossy().to_string();
    let content = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => return Some(vec![read_error_violation(&file, &e)]),
    };
    let is_test = TEST_FILE_SUFFIXES.iter().any(|s| basename.ends_with(s));
    let mut out = Vec::new();
    for rule in &RULES {
        if !rule.scope.applies_to(repo) {
            continue;
        }
        if rule.skip_in_test_files && is_test {
            continue;
        }
        out.extend((rule.check)(&content, &file));
    }
    Some(out)
}

fn has_source_extension(path: &Path) -> bool {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) => SOURCE_EXTENSIONS.contains(&ext),
        None => false,
    }
}

fn in_excluded_dir(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(name) => EXCLUDED_DIRS.iter().any(|d| name == OsStr::new(d)),
        _ => false,
    })
}

fn read_error_violation(file: &str, err: &std::io::Error) -> Violation {
    let message = match err.kind() {
        ErrorKind::NotFound => "cannot read file: not found".to_string(),
        ErrorKind::PermissionDenied => "cannot read file: permission denied".to_string(),
        _ => format!("cannot read file: {err}"),
    };
    Violation {
        file: file.to_string(),
        line: 0,
        rule: "read-file".to_string(),
        message,
    }
}
