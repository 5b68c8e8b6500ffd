use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Defaults read from `config.toml`; command-line flags take precedence
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub speed: Option<i64>,     // Milliseconds between generations
    pub alive_char: Option<char>,
    pub dead_char: Option<char>,
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                warn!("cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termlife")
            .join("config.toml")
    }
}
