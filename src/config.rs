use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::lesson::dispatch::{PopularWordsVariant, VariantConfig};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub popular_words: PopularWordsVariant,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_language() -> String {
    "el".to_string()
}
fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            theme: default_theme(),
            popular_words: PopularWordsVariant::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize_base_url();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Rewrites only the `language` key of the saved config. An unreadable
    /// file is left alone rather than replaced with defaults.
    pub fn store_language(code: &str) -> Result<()> {
        Self::store_language_at(&Self::config_path(), code)
    }

    pub fn store_language_at(path: &Path, code: &str) -> Result<()> {
        let mut saved = Self::load_from(path)?;
        saved.language = code.to_string();
        saved.save_to(path)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("glossa")
            .join("config.toml")
    }

    /// Trailing slashes would produce `//lessons` request paths.
    pub fn normalize_base_url(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            default_base_url()
        } else {
            trimmed.to_string()
        };
    }

    pub fn variant_config(&self) -> VariantConfig {
        VariantConfig {
            popular_words: self.popular_words,
        }
    }
}
