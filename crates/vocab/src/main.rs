//! Runs kotoba over vocabulary records and writes the results as JSON.

mod cli;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Command};
use eyre::WrapErr;
use input::Records;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    // stdout is reserved for the output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Furigana {
            input,
            output,
            skip_invalid,
        } => {
            let records = read_records(&input)?;
            tracing::info!("aligning furigana");
            let entries = output::furigana_entries(&records, skip_invalid)?;
            write(&entries, output.as_deref())?;
        }
        Command::Conjugate {
            input,
            output,
            romaji,
            skip_invalid,
        } => {
            let records = read_records(&input)?;
            tracing::info!("conjugating verbs");
            let entries = output::conjugation_entries(&records, romaji, skip_invalid)?;
            write(&entries, output.as_deref())?;
        }
        Command::Align {
            reading,
            orthography,
        } => {
            let furigana = kotoba::align(&reading, &orthography)?;
            let nodes = kotoba::build_text(&furigana);
            write(&(furigana, nodes), None)?;
        }
    }

    Ok(())
}

fn read_records(path: &Path) -> eyre::Result<Records> {
    tracing::info!("reading records");
    let file = open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("Failed to deserialize records from '{}'", path.display()))?;
    Ok(records)
}

fn write<T: Serialize>(value: &T, path: Option<&Path>) -> eyre::Result<()> {
    tracing::info!("writing output");
    match path {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("Failed to create file at '{}'", path.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(file), value)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn open(path: &Path) -> eyre::Result<File> {
    File::open(path).wrap_err_with(|| format!("Failed to open file at '{}'", path.display()))
}
