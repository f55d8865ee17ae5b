use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use streetgeo::names::NameMode;
use streetgeo::TransformOptions;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub transform: TransformConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TransformConfig {
    pub name_mode: NameMode,
    pub max_fragments_per_road: Option<usize>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            name_mode: self.transform.name_mode,
            max_fragments_per_road: self.transform.max_fragments_per_road,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[transform]\nname_mode = \"hard\"\nmax_fragments_per_road = 5000\n\n[output]\npretty = true"
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.transform.name_mode, NameMode::Hard);
        assert_eq!(config.transform.max_fragments_per_road, Some(5000));
        assert!(config.output.pretty);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\npretty = false").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        let options = config.transform_options();
        assert_eq!(options.name_mode, NameMode::Easy);
        assert_eq!(options.max_fragments_per_road, None);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[transform]\nname_mode = \"medium\"").unwrap();
        assert!(Config::load_from_file(file.path()).is_err());
        assert!(Config::load_from_file("/nonexistent/streetgeo.toml").is_err());
    }
}
