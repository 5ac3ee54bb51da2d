use anyhow::{Context, Result};

use crate::i18n::Language;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Content
    pub site_file: String,
    pub media_root: String,

    // Language `/` redirects to
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Content
            site_file: std::env::var("SITE_FILE")
                .unwrap_or_else(|_| "data/site.json".to_string()),
            media_root: std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string()),

            default_language: Language::from_code(&default_language)
                .context("DEFAULT_LANGUAGE must be an enabled language code")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
