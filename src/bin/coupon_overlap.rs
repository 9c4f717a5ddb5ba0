// src/bin/coupon_overlap.rs
//! Print every coupon code that appears in at least two of the given
//! coupon files, one per line.
use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

/// `coupon_overlap` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "coupon_overlap",
    about = "List coupon codes shared by at least two coupon files",
    version
)]
struct CliArgs {
    /// Newline separated coupon files; at least two are required.
    #[arg(required = true, num_args = 2.., value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing();

    let mut readers = Vec::with_capacity(args.files.len());
    for path in &args.files {
        tracing::info!(path = %path.display(), "processing coupon file");
        let file = File::open(path)
            .with_context(|| format!("failed to open coupon file {}", path.display()))?;
        readers.push(BufReader::new(file));
    }

    let shared = kart_api::infrastructure::coupon_sets::shared_codes(readers)
        .context("failed scanning coupon file")?;
    tracing::info!(shared = shared.len(), "coupon files scanned");

    let mut out = BufWriter::new(io::stdout().lock());
    for code in shared {
        writeln!(out, "{code}")?;
    }
    out.flush()?;
    Ok(())
}

/// Logs go to stderr; stdout carries only the shared codes.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
    if result.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_two_files_is_a_usage_error() {
        assert!(CliArgs::try_parse_from(["coupon_overlap"]).is_err());
        assert!(CliArgs::try_parse_from(["coupon_overlap", "a.txt"]).is_err());
    }

    #[test]
    fn accepts_two_or_more_files() {
        let args = CliArgs::try_parse_from(["coupon_overlap", "a.txt", "b.txt", "c.txt"]).unwrap();
        assert_eq!(
            args.files,
            [PathBuf::from("a.txt"), PathBuf::from("b.txt"), PathBuf::from("c.txt")]
        );
    }
}
