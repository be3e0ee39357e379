//! Command dispatch for weft
//!
//! Resolves the working root, opens or discovers the store where the
//! command needs one, and hands off to the command module.

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::paths::resolve_root_path;
use crate::cli::{Cli, Commands};
use weft_core::error::Result;
use weft_core::store::Store;

/// Open the store named by `--store`, or discover one from `root`.
pub fn discover_or_open_store(cli: &Cli, root: &Path) -> Result<Store> {
    if let Some(path) = &cli.store {
        let resolved = if path.is_absolute() {
            path.clone()
        } else {
            root.join(path)
        };
        Store::open(&resolved)
    } else {
        Store::discover(root)
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    match &cli.command {
        None => {
            println!("weft {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Label-driven related-page discovery for markdown page stores.");
            println!();
            println!("Run `weft --help` for usage information.");
            Ok(())
        }
        Some(Commands::Init { visible }) => crate::commands::init::execute(cli, &root, *visible),
        Some(Commands::Add(args)) => {
            let store = discover_or_open_store(cli, &root)?;
            crate::commands::add::execute(cli, &store, args)
        }
        Some(Commands::List { space, label }) => {
            let store = discover_or_open_store(cli, &root)?;
            crate::commands::list::execute(cli, &store, space.as_deref(), label.as_deref())
        }
        Some(Commands::Labels) => {
            let store = discover_or_open_store(cli, &root)?;
            crate::commands::labels::execute(cli, &store)
        }
        Some(Commands::Show { id_or_path }) => {
            let store = discover_or_open_store(cli, &root)?;
            crate::commands::show::execute(cli, &store, id_or_path)
        }
        Some(Commands::Related { id_or_path, limit }) => {
            let store = discover_or_open_store(cli, &root)?;
            crate::commands::related::execute(cli, &store, id_or_path, *limit, start)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use tempfile::TempDir;
    use weft_core::store::InitOptions;

    fn create_cli(store: Option<std::path::PathBuf>) -> Cli {
        Cli {
            root: None,
            store,
            format: OutputFormat::Human,
            quiet: false,
            verbose: false,
            log_level: None,
            log_json: false,
            command: None,
        }
    }

    #[test]
    fn test_discover_or_open_with_explicit_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::init(temp_dir.path(), InitOptions::default()).unwrap();
        let cli = create_cli(Some(store.root().to_path_buf()));

        let opened = discover_or_open_store(&cli, temp_dir.path()).unwrap();
        assert_eq!(opened.root(), store.root());
    }

    #[test]
    fn test_discover_or_open_relative_store_path() {
        let temp_dir = TempDir::new().unwrap();
        Store::init(temp_dir.path(), InitOptions::default()).unwrap();
        let cli = create_cli(Some(std::path::PathBuf::from(".weft")));

        let opened = discover_or_open_store(&cli, temp_dir.path()).unwrap();
        assert_eq!(opened.root(), temp_dir.path().join(".weft"));
    }

    #[test]
    fn test_discover_or_open_falls_back_to_discovery() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::init(temp_dir.path(), InitOptions::default()).unwrap();
        let cli = create_cli(None);

        let opened = discover_or_open_store(&cli, temp_dir.path()).unwrap();
        assert_eq!(opened.root(), store.root());
    }

    #[test]
    fn test_discovery_failure_reports_store_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let cli = create_cli(None);

        let err = discover_or_open_store(&cli, temp_dir.path()).unwrap_err();
        assert!(matches!(
            err,
            weft_core::error::WeftError::StoreNotFound { .. }
        ));
    }
}
