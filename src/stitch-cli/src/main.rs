//! Stitch CLI - stdin/stdout edit service.
//!
//! Reads a single JSON edit request from stdin (the caller closes the
//! stream after writing it), runs the matching cascade, and writes the
//! full updated document to stdout with exit status 0. On failure a
//! human-readable diagnostic goes to stderr, the exit status is non-zero,
//! and nothing is written to stdout.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use stitch_protocol::EditRequest;

/// Apply a find/replace edit to a document supplied as JSON on stdin.
#[derive(Debug, Parser)]
#[command(name = "stitch", version, about)]
struct Cli {
    /// Log filter directives for diagnostics on stderr (e.g. "debug",
    /// "stitch_engine=trace").
    #[arg(long, env = "STITCH_LOG", default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run() {
        Ok(document) => {
            // The document is the entire success payload; write it
            // byte-exact, without a trailing newline.
            let mut stdout = std::io::stdout().lock();
            let written = stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush());
            if let Err(err) = written {
                eprintln!("failed to write document to stdout: {err}");
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("failed to read edit request from stdin")?;

    let request = EditRequest::from_json_slice(input.as_bytes())?;
    tracing::debug!(
        content_len = request.content.len(),
        find_len = request.old_string.len(),
        replace_all = request.replace_all,
        "received edit request"
    );

    let updated = stitch_engine::replace(
        &request.content,
        &request.old_string,
        &request.new_string,
        request.replace_all,
    )?;
    Ok(updated)
}

fn init_logging(directives: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
