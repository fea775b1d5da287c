//! Output rendering for scan results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-violation fields and a top-level summary.

use crate::models::ScanResult;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print scan results in the requested format.
///
/// Human mode emits one `<path>:<line>: <message>` line per violation and
/// a closing banner; this line shape is what CI annotations key on.
pub fn print_scan(res: &ScanResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_scan_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for v in &res.violations {
                let loc = format!("{}:{}", display_path(&v.file), v.line);
                if color {
                    println!("{}: {}", loc.bold(), v.message);
                } else {
                    println!("{}: {}", loc, v.message);
                }
            }
            if res.summary.violations > 0 {
                let banner = format!(
                    "✖ {} violation(s) found across {} file(s)",
                    res.summary.violations, res.summary.files
                );
                if color {
                    println!("{}", banner.red().bold());
                } else {
                    println!("{}", banner);
                }
            } else {
                let banner = format!(
                    "✓ no disable statements found ({} files checked)",
                    res.summary.files
                );
                if color {
                    println!("{}", banner.green().bold());
                } else {
                    println!("{}", banner);
                }
            }
        }
    }
}

/// Render an absolute path relative to the working directory when it lives
/// underneath it; leaves everything else untouched.
fn display_path(file: &str) -> String {
    let path = Path::new(file);
    if !path.is_absolute() {
        return file.to_string();
    }
    match std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(path, &cwd))
    {
        Some(rel) if !rel.starts_with("..") => rel.to_string_lossy().to_string(),
        _ => file.to_string(),
    }
}

/// Compose scan JSON object (pure) for testing purposes.
pub fn compose_scan_json(res: &ScanResult) -> JsonVal {
    // Directly serialize ScanResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}
