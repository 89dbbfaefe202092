//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::session::DEBOUNCE_MS;

/// Street10 search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchConfig,
}

/// Live admin-API settings for the users/vendors providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(skip)]
    pub admin_token: Option<String>,
    pub base_url: String,
    pub page_size: usize,
    pub timeout_secs: u64,
}

/// Aggregator limits and the consumer debounce window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub flat_limit: usize,
    pub group_limit: usize,
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                admin_token: None,
                base_url: "http://localhost:3000/api".to_string(),
                page_size: 10,
                timeout_secs: 10,
            },
            search: SearchConfig {
                flat_limit: 10,
                group_limit: 5,
                debounce_ms: DEBOUNCE_MS,
            },
        }
    }
}

impl ApiConfig {
    pub fn resolved_admin_token(&self) -> anyhow::Result<Option<String>> {
        self.enforce_env_only()?;
        Ok(env::var("STREET10_ADMIN_TOKEN").ok())
    }

    pub fn redacted_admin_token(&self) -> anyhow::Result<Option<String>> {
        self.resolved_admin_token().map(|opt| {
            opt.map(|token| {
                if token.len() <= 4 {
                    "***".to_string()
                } else {
                    let suffix = &token[token.len() - 4..];
                    format!("***{}", suffix)
                }
            })
        })
    }

    pub fn enforce_env_only(&self) -> anyhow::Result<()> {
        if self.admin_token.is_some() {
            return Err(anyhow!(
                "Admin tokens must be provided via environment variables, not stored in configuration"
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("STREET10_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("street10-search")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or fall back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.api.enforce_env_only()?;
        if self.api.page_size == 0 || self.api.page_size > 100 {
            return Err(anyhow!("api.page_size must be between 1 and 100"));
        }
        if self.search.flat_limit == 0 {
            return Err(anyhow!("search.flat_limit must be at least 1"));
        }
        if self.search.group_limit == 0 {
            return Err(anyhow!("search.group_limit must be at least 1"));
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "api.base_url" => Ok(self.api.base_url.clone()),
            "api.page_size" => Ok(self.api.page_size.to_string()),
            "api.timeout_secs" => Ok(self.api.timeout_secs.to_string()),

            "search.flat_limit" => Ok(self.search.flat_limit.to_string()),
            "search.group_limit" => Ok(self.search.group_limit.to_string()),
            "search.debounce_ms" => Ok(self.search.debounce_ms.to_string()),

            // Admin token (special handling - show redacted)
            "api.admin_token" | "admin_token" => match self.api.redacted_admin_token()? {
                Some(redacted) => Ok(redacted),
                None => Ok("(not set - use STREET10_ADMIN_TOKEN env var)".to_string()),
            },

            _ => Err(anyhow!(
                "Unknown configuration key: {}. Use `street10-search config list` to see available keys.",
                key
            )),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "api.base_url" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    return Err(anyhow!("api.base_url must start with http:// or https://"));
                }
                self.api.base_url = value.trim_end_matches('/').to_string();
            }
            "api.page_size" => {
                let size: usize = value
                    .parse()
                    .with_context(|| format!("Invalid page_size value: {}", value))?;
                if size == 0 || size > 100 {
                    return Err(anyhow!("api.page_size must be between 1 and 100"));
                }
                self.api.page_size = size;
            }
            "api.timeout_secs" => {
                self.api.timeout_secs = value
                    .parse()
                    .with_context(|| format!("Invalid timeout_secs value: {}", value))?;
            }

            "search.flat_limit" => {
                let limit: usize = value
                    .parse()
                    .with_context(|| format!("Invalid flat_limit value: {}", value))?;
                if limit == 0 {
                    return Err(anyhow!("search.flat_limit must be at least 1"));
                }
                self.search.flat_limit = limit;
            }
            "search.group_limit" => {
                let limit: usize = value
                    .parse()
                    .with_context(|| format!("Invalid group_limit value: {}", value))?;
                if limit == 0 {
                    return Err(anyhow!("search.group_limit must be at least 1"));
                }
                self.search.group_limit = limit;
            }
            "search.debounce_ms" => {
                self.search.debounce_ms = value
                    .parse()
                    .with_context(|| format!("Invalid debounce_ms value: {}", value))?;
            }

            // Token cannot be set via config
            "api.admin_token" | "admin_token" => {
                return Err(anyhow!(
                    "Admin tokens cannot be stored in configuration for security. \
                     Set the STREET10_ADMIN_TOKEN environment variable instead."
                ));
            }

            _ => {
                return Err(anyhow!(
                    "Unknown configuration key: {}. Use `street10-search config list` to see available keys.",
                    key
                ));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        let keys = vec![
            "api.base_url",
            "api.page_size",
            "api.timeout_secs",
            "api.admin_token",
            "search.flat_limit",
            "search.group_limit",
            "search.debounce_ms",
        ];

        keys.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_aggregator_defaults() {
        let config = Config::default();
        assert_eq!(config.search.flat_limit, 10);
        assert_eq!(config.search.group_limit, 5);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.api.page_size, 10);
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut config = Config::default();
        config.set("search.group_limit", "8").unwrap();
        assert_eq!(config.get("search.group_limit").unwrap(), "8");

        config
            .set("api.base_url", "https://admin.street10.example/api/")
            .unwrap();
        // Trailing slash stripped
        assert_eq!(
            config.get("api.base_url").unwrap(),
            "https://admin.street10.example/api"
        );
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("search.flat_limit", "0").is_err());
        assert!(config.set("api.page_size", "500").is_err());
        assert!(config.set("api.base_url", "not-a-url").is_err());
        assert!(config.set("nonexistent.key", "x").is_err());
    }

    #[test]
    fn test_token_cannot_be_stored() {
        let mut config = Config::default();
        assert!(config.set("api.admin_token", "secret").is_err());

        config.api.admin_token = Some("secret".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_list_covers_all_keys() {
        let config = Config::default();
        let entries = config.list().unwrap();
        assert_eq!(entries.len(), 7);
        assert!(entries.iter().any(|(k, _)| k == "api.admin_token"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.api.base_url, config.api.base_url);
        assert_eq!(parsed.search.group_limit, config.search.group_limit);
        // Token is skipped in serialization
        assert!(!toml_str.contains("admin_token"));
    }
}
