//! `weft related` command - rank pages sharing labels with a base page
//!
//! Builds the label index, runs the ranking engine, and renders the
//! ordered results in the requested format. This is the one command with
//! an HTML rendering, an embeddable fragment for page footers.

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use weft_core::error::Result;
use weft_core::index::{LabelIndexBuilder, PageMeta};
use weft_core::label::Label;
use weft_core::records::{escape_quotes, path_relative_to_cwd};
use weft_core::related::{RankedCandidate, RelatedEngine};
use weft_core::render::render_related_html;
use weft_core::store::Store;
use weft_core::trace_time;

/// Execute the related command
pub fn execute(
    cli: &Cli,
    store: &Store,
    id_or_path: &str,
    limit: Option<usize>,
    start: Instant,
) -> Result<()> {
    let page = store.find_page(id_or_path)?;
    let base = PageMeta::from_page(&page);

    let index_start = Instant::now();
    let index = LabelIndexBuilder::new(store).build()?;
    trace_time!(index_start, "build_index", pages = index.page_count());

    let limit = limit.unwrap_or(store.config().related.limit);

    let engine = RelatedEngine::new(&index);
    let rank_start = Instant::now();
    let results = engine.related(&base, limit)?;
    trace_time!(rank_start, "rank_related", results = results.len());

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), base = %base.id, "related_total");
    }

    match cli.format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Human => print_human(cli, store, &results),
        OutputFormat::Records => print_records(store, &results),
        OutputFormat::Html => {
            println!("{}", render_related_html(&results, store.config()));
        }
    }

    Ok(())
}

fn print_human(cli: &Cli, store: &Store, results: &[RankedCandidate]) {
    if results.is_empty() {
        if !cli.quiet {
            println!("No related pages found");
        }
        return;
    }

    for candidate in results {
        let mut line = candidate.page.id.clone();
        if let Some(space) = &candidate.page.space {
            line.push_str(&format!(" [{}]", store.config().space_display_name(space)));
        }
        line.push_str(&format!(" {}", candidate.page.title));
        if !candidate.page.labels.is_empty() {
            line.push_str(&format!(" labels={}", labels_csv(&candidate.page.labels)));
        }
        println!("{}", line);
    }
}

fn print_json(results: &[RankedCandidate]) -> Result<()> {
    let output: Vec<_> = results
        .iter()
        .map(|candidate| {
            serde_json::json!({
                "id": candidate.page.id,
                "title": candidate.page.title,
                "space": candidate.page.space,
                "url": candidate.page.url_path,
                "labels": candidate.page.labels,
                "match": candidate.matching(),
                "weight": candidate.weight,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_records(store: &Store, results: &[RankedCandidate]) {
    println!(
        "H weft=1 records=1 store={} mode=related pages={}",
        path_relative_to_cwd(store.root()),
        results.len()
    );
    for candidate in results {
        println!(
            "P {} \"{}\" space={} labels={} match={} weight={}",
            candidate.page.id,
            escape_quotes(&candidate.page.title),
            candidate.page.space.as_deref().unwrap_or("-"),
            labels_csv(&candidate.page.labels),
            candidate.matching(),
            candidate.weight
        );
    }
}

fn labels_csv(labels: &[Label]) -> String {
    if labels.is_empty() {
        "-".to_string()
    } else {
        labels.iter().map(Label::name).collect::<Vec<_>>().join(",")
    }
}
