//! transit-query: answers a JSON transit query document.
//!
//! Reads the document from stdin (or from the file named by the first
//! argument) and prints the response array to stdout.  Logs go to stderr;
//! set `RUST_LOG=debug` to see catalogue and routing-graph sizes.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let input: Box<dyn Read> = match std::env::args_os().nth(1) {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("opening {}", path.to_string_lossy()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let t0 = Instant::now();
    let stdout = io::stdout();
    transit_json::process(input, BufWriter::new(stdout.lock()))
        .context("processing transit query document")?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "done");

    Ok(())
}
