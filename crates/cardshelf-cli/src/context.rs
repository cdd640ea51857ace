use anyhow::Result;
use cardshelf_runtime::{CatalogSnapshot, Config, load_catalog, resolve_config_path};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Per-invocation state shared by the handlers.
pub struct ExecutionContext {
    config_path: PathBuf,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(explicit_config: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_config)?;
        Ok(Self {
            config_path,
            config: OnceCell::new(),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path))
            .map_err(Into::into)
    }

    /// `--source` if given, else the configured catalog.
    pub fn catalog_source(&self, explicit: Option<&str>) -> Result<PathBuf> {
        Ok(self.config()?.catalog_source(explicit)?)
    }

    pub fn load_catalog(&self, explicit: Option<&str>) -> Result<CatalogSnapshot> {
        let source = self.catalog_source(explicit)?;
        Ok(load_catalog(&source)?)
    }
}
