//! `weft init` command - create a new store
//!
//! Idempotent and non-interactive: creates the directory layout and a
//! default config, leaving an existing store untouched.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{html_not_supported, reject_html};
use weft_core::error::Result;
use weft_core::records::path_relative_to_cwd;
use weft_core::store::{InitOptions, Store};

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path, visible: bool) -> Result<()> {
    reject_html(cli, "init")?;

    let options = InitOptions { visible };

    let store = if let Some(path) = cli.store.as_ref() {
        let resolved = if path.is_absolute() {
            path.clone()
        } else {
            root.join(path)
        };
        Store::init_at(&resolved)?
    } else {
        Store::init(root, options)?
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "store": store.root().display().to_string(),
                "message": "Store initialized"
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Initialized weft store at {}", store.root().display());
        }
        OutputFormat::Records => {
            println!(
                "H weft=1 records=1 store={} mode=init status=ok",
                path_relative_to_cwd(store.root())
            );
        }
        OutputFormat::Html => return Err(html_not_supported("init")),
    }

    Ok(())
}
