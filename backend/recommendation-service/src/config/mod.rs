use anyhow::Context;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub context: ContextConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub port: u16,
    pub service_name: String,
}

/// Wall-clock context for the re-ranker. The deployment serves a single
/// market, so a fixed UTC offset is enough to derive local hour and weekday.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    pub utc_offset_minutes: i32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                port: env::var("HTTP_PORT")
                    .unwrap_or_else(|_| "8014".to_string())
                    .parse()
                    .context("HTTP_PORT must be a valid u16")?,
                service_name: env::var("SERVICE_NAME")
                    .unwrap_or_else(|_| "recommendation-service".to_string()),
            },
            context: ContextConfig {
                // Default to IST, where most of our learners are.
                utc_offset_minutes: env::var("UTC_OFFSET_MINUTES")
                    .unwrap_or_else(|_| "330".to_string())
                    .parse()
                    .context("UTC_OFFSET_MINUTES must be a valid i32")?,
            },
        })
    }
}
