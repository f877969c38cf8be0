// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The interface is tiny: one positional path and an optional --json flag.
// main.rs decides what to do when parsing fails, so argument errors can be
// reported with our own usage line and exit code instead of clap's.
// =============================================================================

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;

// Printed on stdout whenever the arguments are wrong
pub const USAGE: &str = "Usage: check-links <markdown_file_path>";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "check-links",
    version,
    about = "Report relative links in a Markdown file that point to missing files",
    long_about = "check-links scans one Markdown file for [text](target) links and checks that every \
                  relative target exists on disk, relative to the file's own directory. \
                  External http(s) links and #anchors are ignored. \
                  Exits with 1 when any link is broken, so it can gate a CI job."
)]
pub struct Cli {
    /// Path to the Markdown file to check
    ///
    /// This is a positional argument (required, exactly one).
    /// A value starting with `-` is still a path unless it names one of our
    /// flags, and an empty value is kept so main.rs reports it as not found.
    #[arg(
        allow_hyphen_values = true,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub file: PathBuf,

    /// Print the report as JSON instead of BROKEN_LINK lines
    #[arg(long)]
    pub json: bool,
}
