//! Runtime settings for the web layer
//!
//! Values come from process environment variables (a `.env` file is loaded by
//! the server binary before this runs). The core judgment and command modules
//! never read settings; they work only from their arguments.

use std::env;

/// Server-facing settings with deployment defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Settings {
    /// Load settings from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "onboarding-poc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(8000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
