//! Store management for weft
//!
//! The store is the root directory containing all weft data.
//! Default location: `.weft/` (hidden, git-trackable). Pages live under
//! `pages/<space-key>/<id>-<slug>.md`.

pub mod paths;

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::config::StoreConfig;
use crate::error::{Result, WeftError};
use crate::id::{self, PageId};
use crate::label::Label;
use crate::page::{Page, PageFrontmatter};
use paths::{CONFIG_FILE, DEFAULT_STORE_DIR, PAGES_DIR, VISIBLE_STORE_DIR};

/// Options for store initialization
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Use visible store directory (`weft/` instead of `.weft/`)
    pub visible: bool,
}

/// The weft store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(WeftError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let pages_dir = path.join(PAGES_DIR);
        if !pages_dir.is_dir() {
            return Err(WeftError::InvalidStore {
                reason: format!("missing {} directory in {}", PAGES_DIR, path.display()),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            // Missing config is not fatal; defaults apply
            StoreConfig::default()
        };

        Ok(Store {
            root: path.to_path_buf(),
            config,
        })
    }

    /// Initialize a new store under the given project root.
    pub fn init(project_root: &Path, options: InitOptions) -> Result<Self> {
        let store_name = if options.visible {
            VISIBLE_STORE_DIR
        } else {
            DEFAULT_STORE_DIR
        };

        let store_path = project_root.join(store_name);
        Self::init_at(&store_path)
    }

    /// Initialize a store at an explicit store root path.
    ///
    /// Idempotent: an existing config is loaded, not overwritten.
    pub fn init_at(store_root: &Path) -> Result<Self> {
        fs::create_dir_all(store_root)?;
        fs::create_dir_all(store_root.join(PAGES_DIR))?;

        let config_path = store_root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            let config = StoreConfig::default();
            config.save(&config_path)?;
            config
        };

        fs::create_dir_all(store_root.join(PAGES_DIR).join(&config.default_space))?;

        Ok(Store {
            root: store_root.to_path_buf(),
            config,
        })
    }

    /// Get the store root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the pages directory
    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(PAGES_DIR)
    }

    /// Get the directory for a space
    pub fn space_dir(&self, key: &str) -> PathBuf {
        self.pages_dir().join(key)
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Collect the IDs of all pages in the store
    pub fn existing_ids(&self) -> Result<HashSet<String>> {
        let mut ids = HashSet::new();

        let dir = self.pages_dir();
        if !dir.exists() {
            return Ok(ids);
        }

        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.path().extension().is_some_and(|e| e == "md") {
                // Extract ID from filename (format: pg-xxxx-slug.md)
                if let Some(name) = entry.path().file_stem() {
                    let name = name.to_string_lossy();
                    if let Some(id_end) = name.find('-').and_then(|first| {
                        name[first + 1..].find('-').map(|second| first + 1 + second)
                    }) {
                        ids.insert(name[..id_end].to_string());
                    } else if name.starts_with(PageId::PREFIX) {
                        // Might be just pg-xxxx.md
                        ids.insert(name.to_string());
                    }
                }
            }
        }

        Ok(ids)
    }

    /// Check if a page with a given ID exists in the store
    pub fn page_exists(&self, id: &str) -> bool {
        match self.existing_ids() {
            Ok(ids) => ids.contains(id),
            Err(_) => false,
        }
    }

    /// Create a new page
    pub fn create_page(
        &self,
        title: &str,
        space: Option<&str>,
        labels: &[Label],
        id: Option<&str>,
        body: Option<&str>,
    ) -> Result<Page> {
        if title.trim().is_empty() {
            return Err(WeftError::UsageError(
                "page title cannot be empty".to_string(),
            ));
        }

        let id = if let Some(id) = id {
            let id = PageId::new(id)?;
            if self.page_exists(id.as_str()) {
                return Err(WeftError::already_exists("page", &id));
            }
            id
        } else {
            let existing_ids = self.existing_ids()?;
            PageId::generate(self.config.id_scheme, title, &existing_ids)
        };

        let space_key = space.unwrap_or(&self.config.default_space);
        validate_space_key(space_key)?;

        let frontmatter = PageFrontmatter::new(id.to_string(), title.to_string())
            .with_labels(labels.iter().cloned());
        let page = Page::new(frontmatter, body.unwrap_or(""));

        let target_dir = self.space_dir(space_key);
        fs::create_dir_all(&target_dir)?;

        let file_name = id::filename(&id, title);
        let file_path = target_dir.join(&file_name);

        let content = page.to_markdown()?;
        fs::write(&file_path, content)?;

        let mut page = page;
        page.path = Some(file_path);
        page.space = Some(space_key.to_string());

        Ok(page)
    }

    /// Load a page from a file path, attaching its space key
    pub fn load_page(&self, path: &Path) -> Result<Page> {
        let content = fs::read_to_string(path)?;
        let mut page = Page::parse(&content, Some(path.to_path_buf()))?;
        page.space = self.space_for_path(path);
        Ok(page)
    }

    /// Find a page by ID or path
    ///
    /// A value naming an existing file is treated as a path; anything else
    /// is looked up as a page ID.
    pub fn find_page(&self, id_or_path: &str) -> Result<Page> {
        let as_path = Path::new(id_or_path);
        if as_path.is_file() {
            return self.load_page(as_path);
        }

        let dir = self.pages_dir();
        // Require at least one character beyond the prefix so a bare "pg"
        // or "pg-" cannot match every page in the store
        if dir.exists() && id_or_path.len() > PageId::PREFIX.len() {
            for entry in WalkDir::new(&dir)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.extension().is_some_and(|e| e == "md") {
                    // Check if filename starts with the ID
                    if let Some(name) = path.file_stem() {
                        let name = name.to_string_lossy();
                        if name.starts_with(id_or_path)
                            && (name.len() == id_or_path.len()
                                || name.chars().nth(id_or_path.len()) == Some('-'))
                        {
                            return self.load_page(path);
                        }
                    }
                }
            }
        }

        Err(WeftError::PageNotFound {
            id: id_or_path.to_string(),
        })
    }

    /// List all pages in the store, sorted by ID
    pub fn list_pages(&self) -> Result<Vec<Page>> {
        let mut pages = Vec::new();

        let dir = self.pages_dir();
        if !dir.exists() {
            return Ok(pages);
        }

        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "md") {
                match self.load_page(path) {
                    Ok(page) => pages.push(page),
                    Err(e) => {
                        // Log but continue - don't fail on individual bad pages
                        tracing::warn!(path = %path.display(), error = %e, "skipping unparseable page");
                    }
                }
            }
        }

        pages.sort_by(|a, b| a.id().cmp(b.id()));

        Ok(pages)
    }

    /// List the space keys present in the store, sorted
    pub fn spaces(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();

        let dir = self.pages_dir();
        if !dir.exists() {
            return Ok(keys);
        }

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                keys.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }

    /// Derive the space key from a page path (first directory under pages/)
    fn space_for_path(&self, path: &Path) -> Option<String> {
        // Canonicalize so relative paths and symlinked roots still resolve
        // against the pages directory
        let pages_dir = self.pages_dir();
        let pages_dir = pages_dir.canonicalize().unwrap_or(pages_dir);
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let rel = path.strip_prefix(&pages_dir).ok()?;
        let mut components = rel.components();
        let first = components.next()?;
        // A page directly under pages/ has no space
        components.next()?;
        match first {
            Component::Normal(name) => Some(name.to_string_lossy().to_string()),
            _ => None,
        }
    }
}

/// Validate a space key (it becomes a directory name)
fn validate_space_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(WeftError::UsageError(
            "space key cannot be empty".to_string(),
        ));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(WeftError::UsageError(format!(
            "invalid space key '{}' (allowed: letters, digits, '-', '_')",
            key
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RelatedConfig, STORE_FORMAT_VERSION};
    use tempfile::tempdir;

    #[test]
    fn test_init_store() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        assert!(store.root().ends_with(DEFAULT_STORE_DIR));
        assert!(store.root().join(CONFIG_FILE).exists());
        assert!(store.pages_dir().is_dir());
        assert!(store.space_dir("main").is_dir());
        assert_eq!(store.config().version, STORE_FORMAT_VERSION);
    }

    #[test]
    fn test_init_visible() {
        let dir = tempdir().unwrap();
        let store = Store::init(
            dir.path(),
            InitOptions {
                visible: true,
            },
        )
        .unwrap();

        assert!(store.root().ends_with(VISIBLE_STORE_DIR));
    }

    #[test]
    fn test_init_preserves_existing_config() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        let mut config = store.config().clone();
        config.related = RelatedConfig { limit: 3 };
        config.save(&store.root().join(CONFIG_FILE)).unwrap();

        let reopened = Store::init(dir.path(), InitOptions::default()).unwrap();
        assert_eq!(reopened.config().related.limit, 3);
    }

    #[test]
    fn test_discover_store() {
        let dir = tempdir().unwrap();
        Store::init(dir.path(), InitOptions::default()).unwrap();

        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let store = Store::discover(&nested).unwrap();
        assert!(store.root().ends_with(DEFAULT_STORE_DIR));
    }

    #[test]
    fn test_discover_missing_store() {
        let dir = tempdir().unwrap();
        let err = Store::discover(dir.path()).unwrap_err();
        assert!(matches!(err, WeftError::StoreNotFound { .. }));
    }

    #[test]
    fn test_open_rejects_non_store() {
        let dir = tempdir().unwrap();
        let err = Store::open(dir.path()).unwrap_err();
        assert!(matches!(err, WeftError::InvalidStore { .. }));
    }

    #[test]
    fn test_store_without_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let store_root = dir.path().join(DEFAULT_STORE_DIR);
        fs::create_dir_all(store_root.join(PAGES_DIR)).unwrap();

        let store = Store::open(&store_root).unwrap();
        assert_eq!(store.config().default_space, "main");
    }

    #[test]
    fn test_create_page() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        let labels = vec![Label::new("runbook").unwrap()];
        let page = store
            .create_page("Deployment Checklist", None, &labels, None, None)
            .unwrap();

        assert!(page.id().starts_with("pg-"));
        assert_eq!(page.space.as_deref(), Some("main"));
        let path = page.path.as_ref().unwrap();
        assert!(path.exists());
        assert!(path.starts_with(store.space_dir("main")));
    }

    #[test]
    fn test_create_page_in_space() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        let page = store
            .create_page("Oncall Guide", Some("ops"), &[], None, None)
            .unwrap();

        assert_eq!(page.space.as_deref(), Some("ops"));
        assert!(store.space_dir("ops").is_dir());
    }

    #[test]
    fn test_create_page_rejects_bad_space_key() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        let err = store
            .create_page("Bad", Some("../escape"), &[], None, None)
            .unwrap_err();
        assert!(matches!(err, WeftError::UsageError(_)));
    }

    #[test]
    fn test_create_page_explicit_id_collision() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        store
            .create_page("First", None, &[], Some("pg-aaaa"), None)
            .unwrap();
        let err = store
            .create_page("Second", None, &[], Some("pg-aaaa"), None)
            .unwrap_err();
        assert!(matches!(err, WeftError::AlreadyExists { .. }));
    }

    #[test]
    fn test_find_page_by_id_and_path() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        let created = store
            .create_page("Findable", None, &[], Some("pg-bbbb"), None)
            .unwrap();

        let by_id = store.find_page("pg-bbbb").unwrap();
        assert_eq!(by_id.title(), "Findable");
        assert_eq!(by_id.space.as_deref(), Some("main"));

        let path = created.path.as_ref().unwrap().to_string_lossy().to_string();
        let by_path = store.find_page(&path).unwrap();
        assert_eq!(by_path.id(), "pg-bbbb");
    }

    #[test]
    fn test_find_page_missing() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        let err = store.find_page("pg-nope").unwrap_err();
        assert!(matches!(err, WeftError::PageNotFound { .. }));
    }

    #[test]
    fn test_find_page_does_not_match_id_prefix_of_longer_id() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        store
            .create_page("Long", None, &[], Some("pg-abcd12"), None)
            .unwrap();

        // pg-abcd is a strict prefix of pg-abcd12, not a match
        assert!(store.find_page("pg-abcd").is_err());
    }

    #[test]
    fn test_list_pages_sorted_by_id() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        store
            .create_page("Zeta", None, &[], Some("pg-zzzz"), None)
            .unwrap();
        store
            .create_page("Alpha", Some("ops"), &[], Some("pg-aaaa"), None)
            .unwrap();

        let pages = store.list_pages().unwrap();
        let ids: Vec<&str> = pages.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["pg-aaaa", "pg-zzzz"]);
        assert_eq!(pages[0].space.as_deref(), Some("ops"));
        assert_eq!(pages[1].space.as_deref(), Some("main"));
    }

    #[test]
    fn test_list_pages_skips_unparseable() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        store
            .create_page("Good", None, &[], Some("pg-good"), None)
            .unwrap();
        fs::write(store.space_dir("main").join("broken.md"), "no frontmatter").unwrap();

        let pages = store.list_pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].id(), "pg-good");
    }

    #[test]
    fn test_spaces_sorted() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        store
            .create_page("One", Some("ops"), &[], None, None)
            .unwrap();
        store
            .create_page("Two", Some("eng"), &[], None, None)
            .unwrap();

        let spaces = store.spaces().unwrap();
        assert_eq!(spaces, vec!["eng", "main", "ops"]);
    }

    #[test]
    fn test_existing_ids() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        store
            .create_page("With Slug", None, &[], Some("pg-cccc"), None)
            .unwrap();

        let ids = store.existing_ids().unwrap();
        assert!(ids.contains("pg-cccc"));
    }
}
