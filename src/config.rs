//! Generator configuration (artgen.yaml) parsing.
//!
//! Every field is optional; missing fields default to a 350x350 image
//! built from trees with depths 7 to 9.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::art::Grammar;
use crate::error::{ArtError, Result};

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "artgen.yaml";

/// Generator settings loaded from artgen.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtConfig {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Lower bound on subtree depth budgets.
    pub min_depth: i32,

    /// Upper bound on tree depth.
    pub max_depth: i32,

    /// Seed for reproducible images. Drawn from entropy when absent.
    pub seed: Option<u64>,

    /// How power operators are grown.
    pub grammar: Grammar,

    /// Default output file.
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from("myart.png")
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            width: 350,
            height: 350,
            min_depth: 7,
            max_depth: 9,
            seed: None,
            grammar: Grammar::default(),
            output: default_output(),
        }
    }
}

impl ArtConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else artgen.yaml under `dir` if present, else
    /// the defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file means all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ArtError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ArtError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Check the settings describe an image that can be generated.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ArtError::Config {
                message: format!("Invalid image size {}x{}", self.width, self.height),
                help: Some("Width and height must be at least 1".to_string()),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_config() {
        let config = ArtConfig::parse("width: 64").unwrap();

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 350);
        assert_eq!(config.min_depth, 7);
        assert_eq!(config.max_depth, 9);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
width: 640
height: 480
min_depth: 3
max_depth: 5
seed: 1234
grammar: unary
output: out/art.png
"#;
        let config = ArtConfig::parse(yaml).unwrap();

        assert_eq!(
            config,
            ArtConfig {
                width: 640,
                height: 480,
                min_depth: 3,
                max_depth: 5,
                seed: Some(1234),
                grammar: Grammar::Unary,
                output: PathBuf::from("out/art.png"),
            }
        );
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(ArtConfig::parse("").unwrap(), ArtConfig::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = ArtConfig::parse("width: wide").unwrap_err();
        assert!(matches!(err, ArtError::Config { .. }));

        assert!(ArtConfig::parse("grammar: fancy").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = ArtConfig {
            seed: Some(7),
            grammar: Grammar::Unary,
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();

        assert!(yaml.contains("grammar: unary"));
        assert_eq!(ArtConfig::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_validate() {
        assert!(ArtConfig::default().validate().is_ok());

        let zero_height = ArtConfig {
            height: 0,
            ..Default::default()
        };
        assert!(zero_height.validate().is_err());

        let negative_depth = ArtConfig {
            max_depth: -1,
            ..Default::default()
        };
        assert!(negative_depth.validate().is_ok());

        let inverted = ArtConfig {
            min_depth: 12,
            max_depth: 3,
            ..Default::default()
        };
        assert!(inverted.validate().is_ok());
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert_eq!(ArtConfig::discover(None, dir.path()).unwrap(), ArtConfig::default());

        std::fs::write(dir.path().join(CONFIG_FILENAME), "width: 10\nheight: 20\n").unwrap();
        let found = ArtConfig::discover(None, dir.path()).unwrap();
        assert_eq!((found.width, found.height), (10, 20));

        let explicit = dir.path().join("other.yaml");
        std::fs::write(&explicit, "seed: 5\n").unwrap();
        let loaded = ArtConfig::discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(loaded.seed, Some(5));
        assert_eq!(loaded.width, 350);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ArtConfig::load(Path::new("/nonexistent/artgen.yaml")).unwrap_err();
        assert!(matches!(err, ArtError::Io { .. }));
    }
}
