use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Aligns the furigana of every record.
    Furigana {
        /// The path to the input records file.
        #[arg(short, long, env = "KOTOBA_INPUT")]
        input: PathBuf,
        /// The path to the output file, stdout if not given.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Logs and skips records that fail instead of stopping.
        #[arg(short, long)]
        skip_invalid: bool,
    },
    /// Conjugates every verb record.
    Conjugate {
        /// The path to the input records file.
        #[arg(short, long, env = "KOTOBA_INPUT")]
        input: PathBuf,
        /// The path to the output file, stdout if not given.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Includes the romaji of each form.
        #[arg(short, long)]
        romaji: bool,
        /// Logs and skips records that fail instead of stopping.
        #[arg(short, long)]
        skip_invalid: bool,
    },
    /// Aligns a single reading with an orthography.
    Align {
        reading: String,
        orthography: String,
    },
}
