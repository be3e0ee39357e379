//! `weft show` command - display a page
//!
//! Accepts a page id or a file path. Human output is a short frontmatter
//! summary followed by the body; records output frames the body in
//! `B`/`B-END` lines so consumers can split it off mechanically.

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::html_not_supported;
use weft_core::error::Result;
use weft_core::records::{escape_quotes, path_relative_to_cwd};
use weft_core::store::Store;

/// Execute the show command
pub fn execute(cli: &Cli, store: &Store, id_or_path: &str) -> Result<()> {
    let page = store.find_page(id_or_path)?;

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
                "body": page.body,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{} ({})", page.title(), page.id());
            if let Some(space) = &page.space {
                println!("space: {}", space);
            }
            if !page.labels().is_empty() {
                println!("labels: {}", page.frontmatter.format_labels());
            }
            if !page.body.is_empty() {
                println!();
                print!("{}", page.body);
                if !page.body.ends_with('\n') {
                    println!();
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H weft=1 records=1 store={} mode=show id={}",
                path_relative_to_cwd(store.root()),
                page.id()
            );
            println!(
                "P {} \"{}\" space={} labels={}",
                page.id(),
                escape_quotes(page.title()),
                page.space.as_deref().unwrap_or("-"),
                page.frontmatter.format_labels()
            );
            println!("B {}", page.id());
            for line in page.body.lines() {
                println!("{}", line);
            }
            println!("B-END");
        }
        OutputFormat::Html => return Err(html_not_supported("show")),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use weft_core::error::WeftError;
    use weft_core::label::Label;
    use weft_core::store::InitOptions;

    fn create_cli(format: OutputFormat) -> Cli {
        Cli {
            root: None,
            store: None,
            format,
            quiet: false,
            verbose: false,
            log_level: None,
            log_json: false,
            command: None,
        }
    }

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::init(temp_dir.path(), InitOptions::default()).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_show_by_id() {
        let (_temp_dir, store) = create_test_store();
        let page = store
            .create_page(
                "Deploy Guide",
                None,
                &[Label::new("deploy").unwrap()],
                None,
                Some("Steps here."),
            )
            .unwrap();

        for format in [
            OutputFormat::Human,
            OutputFormat::Json,
            OutputFormat::Records,
        ] {
            let cli = create_cli(format);
            execute(&cli, &store, page.id()).unwrap();
        }
    }

    #[test]
    fn test_show_by_path() {
        let (_temp_dir, store) = create_test_store();
        let page = store
            .create_page("By Path", None, &[], None, None)
            .unwrap();
        let path = page.path.clone().unwrap();

        let cli = create_cli(OutputFormat::Human);
        execute(&cli, &store, path.to_str().unwrap()).unwrap();
    }

    #[test]
    fn test_show_missing_page() {
        let (_temp_dir, store) = create_test_store();
        let cli = create_cli(OutputFormat::Human);

        let err = execute(&cli, &store, "pg-zzzz").unwrap_err();
        assert!(matches!(err, WeftError::PageNotFound { .. }));
    }

    #[test]
    fn test_show_rejects_html() {
        let (_temp_dir, store) = create_test_store();
        let page = store.create_page("Page", None, &[], None, None).unwrap();
        let cli = create_cli(OutputFormat::Html);

        let err = execute(&cli, &store, page.id()).unwrap_err();
        assert!(matches!(err, WeftError::UsageError(_)));
    }
}
