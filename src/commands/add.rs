//! `weft add` command - create a page
//!
//! Validates labels before anything is written, generates an id when none
//! is given, and files the page under its space directory.

use crate::cli::args::AddArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{html_not_supported, reject_html};
use weft_core::error::Result;
use weft_core::label::Label;
use weft_core::records::{escape_quotes, path_relative_to_cwd};
use weft_core::store::Store;

/// Execute the add command
pub fn execute(cli: &Cli, store: &Store, args: &AddArgs) -> Result<()> {
    reject_html(cli, "add")?;

    let labels = args
        .label
        .iter()
        .map(|name| Label::new(name))
        .collect::<Result<Vec<_>>>()?;

    let page = store.create_page(
        &args.title,
        args.space.as_deref(),
        &labels,
        args.id.as_deref(),
        args.body.as_deref(),
    )?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": page.id(),
                "title": page.title(),
                "space": page.space,
                "path": page.path_display(),
                "labels": page.frontmatter.labels,
                "created": page.frontmatter.created,
                "updated": page.frontmatter.updated,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", page.id());
            if let Some(path) = &page.path {
                if !cli.quiet {
                    println!("{}", path.display());
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H weft=1 records=1 store={} mode=add",
                path_relative_to_cwd(store.root())
            );
            println!(
                "P {} \"{}\" space={} labels={}",
                page.id(),
                escape_quotes(page.title()),
                page.space.as_deref().unwrap_or("-"),
                page.frontmatter.format_labels()
            );
        }
        OutputFormat::Html => return Err(html_not_supported("add")),
    }

    Ok(())
}
