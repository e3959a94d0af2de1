use crate::config::data::DataApiConfig;
use crate::config::templates::TemplateConfig;
use config::{Config as ConfigCrate, ConfigError};
use serde::Deserialize;

pub mod data;
pub mod templates;

/// Default port, matching the conventional `PORT` variable of the platform
pub const DEFAULT_PORT: u16 = 8080;

/// Main configuration structure for the app server
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// The port the app server will listen to (default: 8080)
    pub port: u16,

    /// Data API configuration
    pub data: DataApiConfig,

    /// Template configuration
    pub templates: TemplateConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data: DataApiConfig::default(),
            templates: TemplateConfig::default(),
        }
    }
}

impl AppConfig {
    /// Creates a new Config instance from environment variables.
    ///
    /// `PORT` is honored as the platform default; `APP_`-prefixed variables
    /// take precedence, with `__` separating nested sections
    /// (e.g. `APP_DATA__URL`).
    pub fn new() -> Result<Self, String> {
        let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());

        let config: Self = ConfigCrate::builder()
            .set_default("port", port)
            .map_err(|e: ConfigError| e.to_string())?
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| e.to_string())?
            .try_deserialize()
            .map_err(|e| e.to_string())?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), String> {
        self.data
            .parsed_url()
            .map_err(|e| format!("Invalid data API URL '{}': {}", self.data.url, e))?;
        if self.templates.glob.is_empty() {
            return Err("Template glob must not be empty".to_string());
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn for_test_with_mock(data_mock: &wiremock::MockServer) -> Self {
        Self {
            port: 0, // Let the OS choose a port
            data: DataApiConfig {
                url: format!("{}/v1/query", data_mock.uri()),
                cluster_domain: "hasura-app.io".to_string(),
                query_timeout: Some(5),
            },
            templates: TemplateConfig {
                glob: concat!(env!("CARGO_MANIFEST_DIR"), "/templates/*.html").to_string(),
            },
        }
    }
}
