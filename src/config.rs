use anyhow::Result;

use crate::selectors::DEFAULT_CULTURE_KEY;
use crate::site::SiteSettings;

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub database_path: String,

    // Site
    pub site_culture: Option<String>,
    pub seed_cultures: Vec<String>,

    // Selectors
    pub cookie_name: String,
    pub query_param: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            // Storage
            database_path: var("DATABASE_PATH")
                .unwrap_or_else(|| "data/cultures.db".to_string()),

            // Site
            site_culture: var("SITE_CULTURE")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            seed_cultures: var("SEED_CULTURES")
                .map(|v| parse_list(&v))
                .unwrap_or_default(),

            // Selectors
            cookie_name: var("CULTURE_COOKIE_NAME")
                .unwrap_or_else(|| DEFAULT_CULTURE_KEY.to_string()),
            query_param: var("CULTURE_QUERY_PARAM")
                .unwrap_or_else(|| DEFAULT_CULTURE_KEY.to_string()),
        })
    }

    /// Site settings, if a site culture is configured
    pub fn site(&self) -> Option<SiteSettings> {
        self.site_culture.as_deref().map(SiteSettings::new)
    }
}

/// Split a comma-separated list, dropping blanks
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
