use std::env;

use chrono::Weekday;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub schedule: ScheduleConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin allowed by CORS. Read from env var `FRONTEND_URL`.
    pub frontend_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Seed the in-memory store with demo team members and events on start.
    pub seed_mock_data: bool,
    /// First day of the week view. Read from env var `WEEK_STARTS_ON`
    /// (accepted values: "sunday", "monday").
    pub week_starts_on: Weekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn parse_week_start(value: &str) -> Option<Weekday> {
    match value.trim().to_lowercase().as_str() {
        "sunday" | "sun" => Some(Weekday::Sun),
        "monday" | "mon" => Some(Weekday::Mon),
        _ => None,
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
                frontend_url: env::var("FRONTEND_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },
            schedule: ScheduleConfig {
                seed_mock_data: match env::var("SEED_MOCK_DATA") {
                    Ok(v) => parse_bool(&v)
                        .ok_or_else(|| ConfigError::InvalidValue("SEED_MOCK_DATA".to_string()))?,
                    Err(_) => true,
                },
                week_starts_on: match env::var("WEEK_STARTS_ON") {
                    Ok(v) => parse_week_start(&v)
                        .ok_or_else(|| ConfigError::InvalidValue("WEEK_STARTS_ON".to_string()))?,
                    Err(_) => Weekday::Sun,
                },
            },
            logging: LoggingConfig {
                format: match env::var("LOG_FORMAT") {
                    Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
                    _ => LogFormat::Pretty,
                },
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                frontend_url: "http://localhost:3000".to_string(),
            },
            schedule: ScheduleConfig {
                seed_mock_data: true,
                week_starts_on: Weekday::Sun,
            },
            logging: LoggingConfig {
                format: LogFormat::Pretty,
            },
        }
    }
}
