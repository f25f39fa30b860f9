//! `boardid.toml` configuration parsing.
//!
//! The optional project configuration file names the hardware
//! directories the catalog loads from:
//!
//! ```toml
//! [catalog]
//! hardware-dirs = ["hardware", "/opt/vendor/hardware"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// The top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardidConfig {
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Catalog section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Hardware definition roots, searched in order.
    #[serde(default, rename = "hardware-dirs")]
    pub hardware_dirs: Vec<PathBuf>,
}

impl BoardidConfig {
    /// Parse a configuration from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        toml::from_str(input).context("parsing boardid.toml")
    }

    /// Load `boardid.toml` from the given directory, if present.
    pub fn load_optional(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join("boardid.toml");
        if !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(Some(Self::parse(&content)?))
    }
}

/// Combine hardware directories from CLI flags and the configuration
/// file, flags first. Relative configured paths resolve against the
/// configuration file's directory.
pub fn resolve_hardware_dirs(cli_dirs: &[PathBuf], cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = cli_dirs.to_vec();

    if let Some(config) = BoardidConfig::load_optional(cwd)? {
        for dir in config.catalog.hardware_dirs {
            let resolved = if dir.is_absolute() { dir } else { cwd.join(dir) };
            if !dirs.contains(&resolved) {
                dirs.push(resolved);
            }
        }
    }

    if dirs.is_empty() {
        bail!("no hardware directories given; pass --hardware or add [catalog] hardware-dirs to boardid.toml");
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = BoardidConfig::parse(
            "[catalog]\nhardware-dirs = [\"hardware\", \"/opt/vendor/hardware\"]\n",
        )
        .unwrap();
        assert_eq!(config.catalog.hardware_dirs.len(), 2);
        assert_eq!(config.catalog.hardware_dirs[0], PathBuf::from("hardware"));
    }

    #[test]
    fn parse_empty_config() {
        let config = BoardidConfig::parse("").unwrap();
        assert!(config.catalog.hardware_dirs.is_empty());
    }

    #[test]
    fn missing_config_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BoardidConfig::load_optional(dir.path()).unwrap().is_none());
    }

    #[test]
    fn cli_dirs_come_before_configured_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("boardid.toml"),
            "[catalog]\nhardware-dirs = [\"hw\"]\n",
        )
        .unwrap();

        let cli = vec![PathBuf::from("/explicit")];
        let dirs = resolve_hardware_dirs(&cli, dir.path()).unwrap();
        assert_eq!(dirs[0], PathBuf::from("/explicit"));
        assert_eq!(dirs[1], dir.path().join("hw"));
    }

    #[test]
    fn no_dirs_anywhere_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_hardware_dirs(&[], dir.path()).is_err());
    }
}
