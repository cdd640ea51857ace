use crate::{Error, Result};
use cardshelf_types::{Capabilities, FilterCriteria, ItemFootprint};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "CARDSHELF_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CARDSHELF_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.cardshelf/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("cardshelf").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".cardshelf").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file; `-` reads standard input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub capabilities: Capabilities,
    pub layout: ItemFootprint,
    /// Criteria applied when a command does not override them
    pub filters: FilterCriteria,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    /// Catalog source from the command line, falling back to the config file.
    pub fn catalog_source(&self, explicit: Option<&str>) -> Result<PathBuf> {
        if let Some(source) = explicit {
            return Ok(expand_tilde(source));
        }
        self.catalog.source.clone().ok_or_else(|| {
            Error::Config(
                "No catalog source: pass --source or set [catalog] source in the config file"
                    .to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardshelf_types::{AvailabilityRule, PriceBand, SortOrder, StatusFilter};
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.catalog.source, None);
        assert!(config.capabilities.categories);
        assert_eq!(config.layout, ItemFootprint::default());
        assert!(config.filters.is_unfiltered());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.catalog.source = Some(PathBuf::from("/data/inventory.csv"));
        config.capabilities.quantity = true;
        config.capabilities.availability = AvailabilityRule::StatusAndStock;
        config.filters = FilterCriteria::new()
            .status(StatusFilter::OnlyAvailable)
            .price_band(PriceBand::FourToFive);

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[capabilities]\nsort = \"price_ascending\"\n\n[layout]\ngap = 4.0\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.capabilities.sort, SortOrder::PriceAscending);
        assert!(config.capabilities.categories);
        assert_eq!(config.layout.gap, 4.0);
        assert_eq!(config.layout.width, 200.0);

        Ok(())
    }

    #[test]
    fn test_invalid_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[layout]\nwidth = \"wide\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_catalog_source_priority() {
        let mut config = Config::default();
        assert!(config.catalog_source(None).is_err());

        config.catalog.source = Some(PathBuf::from("from-config.csv"));
        assert_eq!(
            config.catalog_source(None).unwrap(),
            PathBuf::from("from-config.csv")
        );
        assert_eq!(
            config.catalog_source(Some("cli.csv")).unwrap(),
            PathBuf::from("cli.csv")
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some("/etc/cardshelf.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/etc/cardshelf.toml"));
    }
}
