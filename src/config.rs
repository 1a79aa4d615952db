use std::path::Path;

use crate::error::ConfigError;
use crate::game::COLS;

/// Deepest search the configuration accepts; past this the blocking search
/// call becomes unreasonably slow for interactive callers.
pub const MAX_SEARCH_DEPTH: u32 = 10;

/// Column enumeration order used by the search.
///
/// Ascending matches the board's own legal-move order. Center-first explores
/// the statistically stronger columns earlier, which tightens the alpha-beta
/// window sooner and prunes more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveOrder {
    Ascending,
    CenterFirst,
}

impl MoveOrder {
    /// The columns in exploration order.
    pub fn columns(self) -> [usize; COLS] {
        match self {
            MoveOrder::Ascending => [0, 1, 2, 3, 4, 5, 6],
            MoveOrder::CenterFirst => [3, 2, 4, 1, 5, 0, 6],
        }
    }
}

impl Default for MoveOrder {
    fn default() -> Self {
        MoveOrder::Ascending
    }
}

/// Engine configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies the search looks ahead. Deeper is stronger and slower.
    pub search_depth: u32,
    pub move_order: MoveOrder,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search_depth: 4,
            move_order: MoveOrder::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::Validation("search_depth must be >= 1".into()));
        }
        if self.search_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search_depth must be <= {MAX_SEARCH_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.search_depth, 4);
        assert_eq!(config.move_order, MoveOrder::Ascending);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: EngineConfig = toml::from_str("search_depth = 6").unwrap();
        assert_eq!(config.search_depth, 6);
        assert_eq!(config.move_order, MoveOrder::Ascending);
    }

    #[test]
    fn test_move_order_from_toml() {
        let config: EngineConfig = toml::from_str("move_order = \"center-first\"").unwrap();
        assert_eq!(config.move_order, MoveOrder::CenterFirst);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = EngineConfig::default();
        config.search_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = EngineConfig::default();
        config.search_depth = MAX_SEARCH_DEPTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EngineConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "search_depth = 2\nmove_order = \"center-first\"").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.search_depth, 2);
        assert_eq!(config.move_order, MoveOrder::CenterFirst);
    }

    #[test]
    fn test_load_rejects_invalid_depth_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "search_depth = 0").unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = EngineConfig::default_toml();
        let config: EngineConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_move_orders_cover_every_column() {
        for order in [MoveOrder::Ascending, MoveOrder::CenterFirst] {
            let mut cols: Vec<usize> = order.columns().to_vec();
            cols.sort_unstable();
            assert_eq!(cols, (0..COLS).collect::<Vec<_>>());
        }
    }
}
