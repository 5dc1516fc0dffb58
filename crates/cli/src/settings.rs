//! Storage configuration from files and command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use item_packer_core::{PackSize, StorageConfig};

/// Flags shared by commands that build a pack store.
#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pack sizes, comma separated (overrides the configured packs)
    #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u64).range(1..))]
    pub packs: Option<Vec<PackSize>>,

    /// Maximum number of pack sizes in the catalog
    #[arg(long)]
    pub pack_limit: Option<usize>,

    /// Number of orders kept in history
    #[arg(long)]
    pub history_limit: Option<usize>,
}

impl CatalogArgs {
    /// Builds the storage configuration.
    ///
    /// Starts from the config file if given, otherwise from the defaults
    /// with the standard packs, then applies flag overrides.
    pub fn resolve(&self) -> anyhow::Result<StorageConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => StorageConfig::new().with_standard_packs(),
        };

        if let Some(packs) = &self.packs {
            config = config.with_default_packs(packs.iter().copied());
        }
        if let Some(limit) = self.pack_limit {
            config = config.with_pack_limit(limit);
        }
        if let Some(limit) = self.history_limit {
            config = config.with_order_limit(limit);
        }

        Ok(config)
    }
}

/// Reads a storage configuration from a TOML file.
pub fn load_config(path: &Path) -> anyhow::Result<StorageConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: StorageConfig = toml::from_str(&content)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Writes a storage configuration to a TOML file.
pub fn save_config(path: &Path, config: &StorageConfig) -> anyhow::Result<()> {
    let content = toml::to_string_pretty(config).context("failed to encode config")?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = CatalogArgs::default().resolve().unwrap();
        assert_eq!(config.default_packs, vec![250, 500, 1000, 2000, 5000]);
        assert_eq!(config.order_limit, 20);
    }

    #[test]
    fn test_resolve_overrides() {
        let args = CatalogArgs {
            packs: Some(vec![23, 31, 53]),
            history_limit: Some(3),
            ..Default::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.default_packs, vec![23, 31, 53]);
        assert_eq!(config.order_limit, 3);
        assert_eq!(config.pack_limit, 20);
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packer.toml");
        let config = StorageConfig::new()
            .with_default_packs([100, 200])
            .with_order_limit(7);

        save_config(&path, &config).unwrap();
        let args = CatalogArgs {
            config: Some(path),
            ..Default::default()
        };
        assert_eq!(args.resolve().unwrap(), config);
    }

    #[test]
    fn test_partial_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packer.toml");
        std::fs::write(&path, "default_packs = [10, 40]\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.default_packs, vec![10, 40]);
        assert_eq!(config.pack_limit, 20);
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Path::new("/nonexistent/packer.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
