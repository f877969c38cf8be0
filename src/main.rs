// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr only, so stdout stays machine-readable)
// 2. Parse the command-line arguments using clap
// 3. Check the markdown file and print any broken links
// 4. Exit with proper code (0 = clean, 1 = broken links or bad input, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - link extraction and checking
mod cli; // src/cli.rs - command-line parsing

use clap::error::ErrorKind;
use clap::Parser; // Parser trait enables the try_parse() method
use cli::{Cli, USAGE};

// anyhow::Result lets us return any error type with the ? operator
use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    // Run our application logic and capture the exit code
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // Reading or decoding the file failed: print the whole chain
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr; RUST_LOG overrides the default "error" level
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found, wrong arguments, or file not found
//   Err = the file could not be read
fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(0);
        }
        Err(e) => {
            debug!(error = %e, "invalid arguments");
            println!("{}", USAGE);
            return Ok(1);
        }
    };

    if !cli.file.exists() {
        println!("Error: File not found - {}", cli.file.display());
        return Ok(1);
    }

    let report = checker::check_markdown_file(&cli.file)?;

    print_report(&report, cli.json)?;

    if report.is_clean() {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Prints the report either as BROKEN_LINK lines or JSON
fn print_report(report: &checker::BrokenLinkReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        for entry in &report.broken {
            println!("BROKEN_LINK: {}", entry.link);
        }
    }
    Ok(())
}
