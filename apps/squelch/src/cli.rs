//! CLI argument parsing via `clap`.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "squelch",
    version,
    about = "Flag suppression comments in TypeScript sources",
    long_about = "Squelch — a tiny, fast CI gate that scans TypeScript sources for suppression comments (eslint-disable, biome-ignore, @ts-ignore, istanbul ignore, it.skip, unjustified sanitization bypasses) and fails when any are present.",
    after_help = "Examples:\n  squelch --directory src\n  squelch --files src/index.ts src/app.tsx --repo api\n  squelch --directory . --repo admin --output json",
    group(ArgGroup::new("target").required(true).multiple(false))
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(
        long,
        num_args = 1..,
        value_name = "PATH",
        group = "target",
        help = "Explicit list of files to check"
    )]
    pub files: Vec<PathBuf>,
    #[arg(
        long,
        value_name = "DIR",
        group = "target",
        help = "Recursively check a directory"
    )]
    pub directory: Option<PathBuf>,
    #[arg(
        long,
        value_parser = ["api", "admin"],
        default_value = "admin",
        help = "Repository profile selecting which checks apply"
    )]
    pub repo: String,
    #[arg(
        long,
        value_parser = ["human", "json"],
        default_value = "human",
        help = "Output mode: human|json (default: human)"
    )]
    pub output: String,
}
