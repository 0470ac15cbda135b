//! Scanner configuration persistence
//!
//! Stores scan preferences as YAML. The CLI loads a file passed via
//! `--config`; editor hosts can embed a [`ScanConfig`] directly.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Scan configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Field delimiter (single ASCII character)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Quote character (single ASCII character)
    #[serde(default = "default_quote")]
    pub quote: char,
    /// Copy the finding messages to the clipboard after a fresh scan
    #[serde(default = "default_copy_to_clipboard")]
    pub copy_to_clipboard: bool,
}

fn default_delimiter() -> char {
    ','
}

fn default_quote() -> char {
    '"'
}

fn default_copy_to_clipboard() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            quote: default_quote(),
            copy_to_clipboard: default_copy_to_clipboard(),
        }
    }
}

impl ScanConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Delimiter as the single byte the csv reader wants
    pub fn delimiter_byte(&self) -> u8 {
        ascii_byte(self.delimiter, default_delimiter())
    }

    /// Quote character as the single byte the csv reader wants
    pub fn quote_byte(&self) -> u8 {
        ascii_byte(self.quote, default_quote())
    }
}

fn ascii_byte(ch: char, fallback: char) -> u8 {
    if ch.is_ascii() {
        ch as u8
    } else {
        tracing::warn!(
            "Non-ASCII character {:?} not usable as a CSV control byte, falling back to {:?}",
            ch,
            fallback
        );
        fallback as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.delimiter_byte(), b',');
        assert_eq!(config.quote_byte(), b'"');
        assert!(config.copy_to_clipboard);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: ScanConfig = serde_yaml::from_str("delimiter: ';'\n").unwrap();
        assert_eq!(config.delimiter_byte(), b';');
        assert_eq!(config.quote_byte(), b'"');
        assert!(config.copy_to_clipboard);
    }

    #[test]
    fn test_non_ascii_delimiter_falls_back() {
        let config = ScanConfig {
            delimiter: '→',
            ..ScanConfig::default()
        };
        assert_eq!(config.delimiter_byte(), b',');
    }
}
