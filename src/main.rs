mod index;
mod output;
mod repl;
mod utils;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use index::types::{Alphabet, IndexConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wordpos")]
#[command(about = "In-memory prefix index over the words of a text file")]
struct Cli {
    /// Path to the whitespace-delimited text source
    file: PathBuf,

    /// Alphabet used to classify characters when cropping tokens
    #[arg(long, value_enum, default_value = "unicode")]
    alphabet: AlphabetArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlphabetArg {
    /// Unicode alphabetic characters
    Unicode,
    /// ASCII letters only
    Ascii,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Unicode => Alphabet::Unicode,
            AlphabetArg::Ascii => Alphabet::Ascii,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = IndexConfig {
        alphabet: cli.alphabet.into(),
        ..IndexConfig::default()
    };

    let index = index::build::build_index(&cli.file, &config)?;
    repl::run(&index)?;

    Ok(())
}
