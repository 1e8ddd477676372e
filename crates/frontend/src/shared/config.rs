use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ApiConfig {
    /// Empty: derived from the page location (port 3000)
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u32,
}

fn default_page_size() -> usize {
    10
}

fn default_search_debounce_ms() -> u32 {
    500
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[table]
default_page_size = 10
search_debounce_ms = 500
"#;

/// Where the static server exposes an optional override
const CONFIG_PATH: &str = "/config.toml";

pub fn parse_config(contents: &str) -> Result<AppConfig, String> {
    toml::from_str(contents).map_err(|e| format!("Invalid config: {}", e))
}

impl Default for AppConfig {
    fn default() -> Self {
        parse_config(DEFAULT_CONFIG).unwrap_or(AppConfig {
            api: ApiConfig::default(),
            table: TableConfig::default(),
        })
    }
}

/// Loads `/config.toml` next to the bundle, falling back to the embedded defaults
pub async fn load_config() -> AppConfig {
    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(r) if r.ok() => r,
        Ok(r) => {
            log::warn!("{} not served (HTTP {}), using defaults", CONFIG_PATH, r.status());
            return AppConfig::default();
        }
        Err(e) => {
            log::warn!("Failed to fetch {}: {}, using defaults", CONFIG_PATH, e);
            return AppConfig::default();
        }
    };

    match response.text().await.map_err(|e| e.to_string()).and_then(|t| parse_config(&t)) {
        Ok(config) => {
            log::info!("Loaded config from {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            log::warn!("{}, using defaults", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.table.default_page_size, 10);
        assert_eq!(config.table.search_debounce_ms, 500);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://api.example.com\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.table, TableConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[table]\ndefault_page_size = \"many\"").is_err());
    }
}
