//! Sheet configuration loaded from `config.toml`.
//!
//! ```toml
//! rows = 50
//! columns = 8
//! cell_display_width = 10
//! recalculate_dependents = true
//! ```
//!
//! Every key is optional. The file is looked up at the path given on the
//! command line, else in the user's config directory.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use sumsheet_engine::engine::{Dimensions, MAX_COLS};

use crate::error::{Result, SheetError};

const MAX_CONFIG_FILE_BYTES: u64 = 64 * 1024;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    pub rows: usize,
    pub columns: usize,
    /// Widest numeric result shown in a cell, in characters.
    pub cell_display_width: usize,
    /// Re-evaluate formulas that depend on an edited cell.
    pub recalculate_dependents: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            rows: 20,
            columns: MAX_COLS,
            cell_display_width: 12,
            recalculate_dependents: true,
        }
    }
}

impl SheetConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<SheetConfig> {
        let config: SheetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.dimensions()?;
        if self.cell_display_width == 0 {
            return Err(SheetError::InvalidConfig(
                "cell_display_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::new(self.rows, self.columns).ok_or(SheetError::InvalidDimensions {
            rows: self.rows,
            columns: self.columns,
        })
    }
}

fn read_config_file(path: &Path) -> Result<SheetConfig> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(SheetError::InvalidConfig(format!(
            "refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        )));
    }
    let content = std::fs::read_to_string(path)?;
    SheetConfig::from_toml_str(&content)
}

/// Load the configuration, falling back to defaults.
///
/// Problems are returned as warnings rather than errors so a broken config
/// file never prevents the sheet from opening.
pub fn load_config(config_file: Option<&PathBuf>) -> (SheetConfig, Vec<String>) {
    let mut warnings = Vec::new();
    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (SheetConfig::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (SheetConfig::default(), warnings);
    }

    match read_config_file(&path) {
        Ok(config) => (config, warnings),
        Err(err) => {
            warnings.push(format!("Failed to load {}: {}", path.display(), err));
            (SheetConfig::default(), warnings)
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "sumsheet")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_gives_defaults() {
        assert_eq!(SheetConfig::from_toml_str("").unwrap(), SheetConfig::default());
    }

    #[test]
    fn test_partial_document_overrides() {
        let config = SheetConfig::from_toml_str("rows = 5\ncell_display_width = 9\n").unwrap();
        assert_eq!(
            config,
            SheetConfig {
                rows: 5,
                cell_display_width: 9,
                ..SheetConfig::default()
            }
        );
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(
            SheetConfig::from_toml_str("colums = 4"),
            Err(SheetError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            SheetConfig::from_toml_str("columns = 27"),
            Err(SheetError::InvalidDimensions { rows: 20, columns: 27 })
        ));
        assert!(matches!(
            SheetConfig::from_toml_str("rows = 0"),
            Err(SheetError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            SheetConfig::from_toml_str("cell_display_width = 0"),
            Err(SheetError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_tall_grids() {
        assert!(matches!(
            SheetConfig::from_toml_str("rows = 9000000000000000000"),
            Err(SheetError::InvalidDimensions { rows: 9_000_000_000_000_000_000, columns: 26 })
        ));
        assert!(matches!(
            SheetConfig::from_toml_str("rows = 257"),
            Err(SheetError::InvalidDimensions { rows: 257, .. })
        ));
        let tallest = SheetConfig::from_toml_str("rows = 256").unwrap();
        assert_eq!(tallest.dimensions().unwrap().area(), 256 * 26);
    }

    #[test]
    fn test_missing_explicit_file_warns() {
        let path = PathBuf::from("/nonexistent/sumsheet/config.toml");
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, SheetConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not found"));
    }

    #[test]
    fn test_invalid_file_falls_back_with_warning() {
        let path = std::env::temp_dir().join(format!("sumsheet-config-{}.toml", std::process::id()));
        std::fs::write(&path, "rows = \"many\"").unwrap();
        let (config, warnings) = load_config(Some(&path));
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config, SheetConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to load"));
    }
}
