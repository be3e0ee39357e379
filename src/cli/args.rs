//! Argument structs for weft subcommands

use clap::{ArgAction, Args};

/// Arguments for the `add` command
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Page title
    pub title: String,

    /// Space key to file the page under (defaults to the configured space)
    #[arg(long, short)]
    pub space: Option<String>,

    /// Label to attach (repeatable)
    #[arg(long, short, action = ArgAction::Append)]
    pub label: Vec<String>,

    /// Explicit page id (otherwise generated by the configured scheme)
    #[arg(long)]
    pub id: Option<String>,

    /// Page body text (defaults to empty)
    #[arg(long)]
    pub body: Option<String>,
}
