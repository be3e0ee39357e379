//! `weft labels` command - list labels with occurrence counts
//!
//! Shows the same per-label popularity numbers the related-page ranker
//! uses for its weight tie-break, most-used first.

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::html_not_supported;
use weft_core::error::Result;
use weft_core::index::LabelIndexBuilder;
use weft_core::records::path_relative_to_cwd;
use weft_core::store::Store;

/// Execute the labels command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let index = LabelIndexBuilder::new(store).build()?;
    let counts = index.label_counts();

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = counts
                .iter()
                .map(|(label, count)| {
                    serde_json::json!({
                        "label": label.name(),
                        "count": count,
                        "url": label.url_path(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if counts.is_empty() {
                if !cli.quiet {
                    println!("No labels found");
                }
            } else {
                for (label, count) in &counts {
                    println!("{} ({})", label.name(), count);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H weft=1 records=1 store={} mode=labels labels={}",
                path_relative_to_cwd(store.root()),
                counts.len()
            );
            for (label, count) in &counts {
                println!("L {} count={}", label.name(), count);
            }
        }
        OutputFormat::Html => return Err(html_not_supported("labels")),
    }

    Ok(())
}
