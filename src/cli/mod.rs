//! Command-line interface module

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

use crate::case::{camelize, underscore};
use crate::error::{UtilError, UtilResult};
use crate::extract::extract;
use crate::generator::{Alphabet, StringGenerator};
use crate::loader::load_json_file;
use crate::merge::{merge, MergeOptions};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonkit")]
#[command(about = "Merge, slice and rename JSON; generate random strings")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Merge JSON files left to right into the first one
    Merge {
        /// JSON files (".json" is appended when missing)
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Combine nested objects instead of replacing them
        #[arg(long)]
        deep: bool,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Keep only the listed keys of a JSON object file
    Extract {
        /// JSON file (".json" is appended when missing)
        file: PathBuf,

        /// Comma-separated keys, in output order
        #[arg(short, long, required = true, value_delimiter = ',')]
        keys: Vec<String>,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Generate random strings
    Generate {
        /// Characters to sample from
        #[arg(
            short,
            long,
            conflicts_with = "symbols",
            required_unless_present = "symbols"
        )]
        alphabet: Option<String>,

        /// Comma-separated multi-character symbols to sample from
        #[arg(long, value_delimiter = ',')]
        symbols: Option<Vec<String>>,

        /// Number of symbols per string
        #[arg(short, long)]
        length: usize,

        /// Number of strings to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Convert snake_case text to camelCase
    Camelize {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Convert camelCase text to snake_case
    Underscore {
        #[arg(required = true)]
        text: Vec<String>,
    },
}

/// Execute a command and return the lines to print
pub fn run(command: &Command) -> UtilResult<Vec<String>> {
    match command {
        Command::Merge {
            files,
            deep,
            compact,
        } => {
            let mut paths = files.iter();
            let Some(first) = paths.next() else {
                return Ok(Vec::new());
            };
            let mut target = load_json_file(first)?;
            let sources = paths
                .map(load_json_file)
                .collect::<UtilResult<Vec<Value>>>()?;

            merge(&mut target, &sources, &MergeOptions { deep: *deep });
            Ok(vec![render_json(&target, *compact)])
        }
        Command::Extract {
            file,
            keys,
            compact,
        } => {
            let source = load_json_file(file)?;
            Ok(vec![render_json(&extract(&source, keys.as_slice()), *compact)])
        }
        Command::Generate {
            alphabet,
            symbols,
            length,
            count,
        } => {
            let alphabet = match (alphabet, symbols) {
                (_, Some(symbols)) => Alphabet::from_symbols(symbols.iter().cloned())?,
                (Some(chars), None) => Alphabet::from_chars(chars)?,
                (None, None) => return Err(UtilError::invalid_alphabet("no alphabet given")),
            };
            Ok(StringGenerator::new(alphabet, *length).take(*count).collect())
        }
        Command::Camelize { text } => Ok(text.iter().map(|t| camelize(t)).collect()),
        Command::Underscore { text } => Ok(text.iter().map(|t| underscore(t)).collect()),
    }
}

/// Render a JSON value, pretty-printed unless `compact`
pub fn render_json(value: &Value, compact: bool) -> String {
    if compact {
        format!("{}", value)
    } else {
        format!("{:#}", value)
    }
}
