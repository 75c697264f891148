use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parsing(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parsing(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parsing(value)
    }
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Config {
    pub site: Option<SiteConfig>,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;

        Ok(config)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub footer: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Vellum".into(),
            footer: "Generated with vellum".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_parses_site_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vellum.toml");
        std::fs::write(&path, "[site]\ntitle = \"My Blog\"\nfooter = \"bye\"\n").unwrap();

        let config = Config::read(&path).unwrap();
        let site = config.site.unwrap();
        assert_eq!(site.title, "My Blog");
        assert_eq!(site.footer, "bye");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("[site]\ntitle = \"My Blog\"\n").unwrap();
        let site = config.site.unwrap();
        assert_eq!(site.title, "My Blog");
        assert_eq!(site.footer, "Generated with vellum");
    }

    #[test]
    fn read_missing_file_is_an_io_error() {
        let err = Config::read("./does-not-exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
