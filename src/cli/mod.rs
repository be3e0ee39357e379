//! CLI argument parsing for weft
//!
//! Global flags (`--root`, `--store`, `--format`, `--quiet`, `--verbose`)
//! apply to every subcommand; each subcommand adds its own arguments.

pub mod args;
pub mod parse;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::AddArgs;
pub use weft_core::format::OutputFormat;

use parse::parse_format;

/// Weft - related-page discovery for markdown page stores
#[derive(Parser, Debug)]
#[command(name = "weft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for store discovery (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store directory, bypassing discovery
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format: human, json, records, or html
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new weft store
    Init {
        /// Create a visible `weft/` directory instead of the hidden `.weft/`
        #[arg(long)]
        visible: bool,
    },

    /// Add a new page to the store
    Add(AddArgs),

    /// List pages in the store
    List {
        /// Only pages in this space
        #[arg(long, short)]
        space: Option<String>,

        /// Only pages carrying this label
        #[arg(long, short)]
        label: Option<String>,
    },

    /// List labels with their occurrence counts
    Labels,

    /// Display a page
    Show {
        /// Page id or file path
        id_or_path: String,
    },

    /// List pages related to a page through shared labels
    Related {
        /// Page id or file path
        id_or_path: String,

        /// Maximum number of related pages (defaults to the configured limit)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
}
