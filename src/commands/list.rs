//! `weft list` command - list pages
//!
//! Supports `--space` and `--label` filters. Ordering is deterministic
//! (pages sorted by id) so repeated runs and tests see stable output.

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::html_not_supported;
use weft_core::error::Result;
use weft_core::label::Label;
use weft_core::records::{escape_quotes, path_relative_to_cwd};
use weft_core::store::Store;

/// Execute the list command
pub fn execute(cli: &Cli, store: &Store, space: Option<&str>, label: Option<&str>) -> Result<()> {
    let mut pages = store.list_pages()?;

    if let Some(space) = space {
        pages.retain(|p| p.space.as_deref() == Some(space));
    }

    if let Some(label) = label {
        let label = Label::new(label)?;
        pages.retain(|p| p.has_label(&label));
    }

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = pages
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "id": p.id(),
                        "title": p.title(),
                        "space": p.space,
                        "path": p.path_display(),
                        "labels": p.frontmatter.labels,
                        "created": p.frontmatter.created,
                        "updated": p.frontmatter.updated,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if pages.is_empty() {
                if !cli.quiet {
                    println!("No pages found");
                }
            } else {
                for page in &pages {
                    let mut line = format!(
                        "{} [{}] {}",
                        page.id(),
                        page.space.as_deref().unwrap_or("-"),
                        page.title()
                    );
                    if !page.labels().is_empty() {
                        line.push_str(&format!(" labels={}", page.frontmatter.format_labels()));
                    }
                    println!("{}", line);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H weft=1 records=1 store={} mode=list pages={}",
                path_relative_to_cwd(store.root()),
                pages.len()
            );
            for page in &pages {
                println!(
                    "P {} \"{}\" space={} labels={}",
                    page.id(),
                    escape_quotes(page.title()),
                    page.space.as_deref().unwrap_or("-"),
                    page.frontmatter.format_labels()
                );
            }
        }
        OutputFormat::Html => return Err(html_not_supported("list")),
    }

    Ok(())
}
