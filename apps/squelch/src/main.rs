//! Squelch CLI binary entry point.
//! Parses arguments, runs the scan, prints results, and sets the exit code.

mod cli;
mod models;
mod output;
mod rules;
mod scan;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    // clap enforces that exactly one of --files/--directory is present
    let result = if let Some(dir) = cli.directory.as_deref() {
        if !dir.is_dir() {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                format!("directory not found: {}", dir.to_string_lossy())
            );
            std::process::exit(2);
        }
        let result = scan::check_directory(dir, &cli.repo);
        if result.summary.files == 0 && cli.output != "json" {
            eprintln!(
                "{} {}",
                utils::note_prefix(),
                format!("no TypeScript sources found under {}", dir.to_string_lossy())
            );
        }
        result
    } else {
        scan::check_files(&cli.files, &cli.repo)
    };
    output::print_scan(&result, &cli.output);
    if result.summary.violations > 0 {
        std::process::exit(1);
    }
}
