use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level datespan configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatespanConfig {
    /// Fixture date range.
    #[serde(default)]
    pub range: RangeToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl DatespanConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_end")]
    pub end: String,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

fn default_start() -> String {
    datespan_fixture::DEFAULT_START.to_string()
}
fn default_end() -> String {
    datespan_fixture::DEFAULT_END.to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub parallel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: DatespanConfig = toml::from_str("").unwrap();
        assert_eq!(config.range.start, "1999-01-01");
        assert_eq!(config.range.end, "2002-01-01");
        assert_eq!(config.output.path, None);
        assert!(!config.output.parallel);
    }

    #[test]
    fn full_config() {
        let config: DatespanConfig = toml::from_str(
            r#"
            [range]
            start = "2000-01-01"
            end = "2000-03-01"

            [output]
            path = "fixtures.txt"
            parallel = true
            "#,
        )
        .unwrap();
        assert_eq!(config.range.start, "2000-01-01");
        assert_eq!(config.range.end, "2000-03-01");
        assert_eq!(config.output.path, Some(PathBuf::from("fixtures.txt")));
        assert!(config.output.parallel);
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<DatespanConfig, _> = toml::from_str("[range]\nstep = 2\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file_has_context() {
        let err = DatespanConfig::load(Path::new("/nonexistent/datespan.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("datespan.toml");
        std::fs::write(&path, "[output]\nparallel = true\n").unwrap();
        let config = DatespanConfig::load(&path).unwrap();
        assert!(config.output.parallel);
        assert_eq!(config.range.start, "1999-01-01");
    }
}
