use crate::workflows::qualifications::status::{
    LifecyclePolicy, DEFAULT_EXPIRING_MONTHS, DEFAULT_GRACE_DAYS,
};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub lifecycle: LifecycleConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let grace_days = parse_positive("QUALITRACK_GRACE_DAYS", DEFAULT_GRACE_DAYS)
            .map_err(|raw| ConfigError::InvalidGraceDays { raw })?;
        let expiring_months = parse_positive("QUALITRACK_EXPIRING_MONTHS", DEFAULT_EXPIRING_MONTHS)
            .map_err(|raw| ConfigError::InvalidExpiringMonths { raw })?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            lifecycle: LifecycleConfig {
                grace_days,
                expiring_months,
            },
        })
    }
}

fn parse_positive(key: &str, default: u32) -> Result<u32, String> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(raw),
        },
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Windows used when classifying qualification status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleConfig {
    pub grace_days: u32,
    pub expiring_months: u32,
}

impl From<&LifecycleConfig> for LifecyclePolicy {
    fn from(config: &LifecycleConfig) -> Self {
        LifecyclePolicy::new(config.grace_days, config.expiring_months)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidGraceDays { raw: String },
    InvalidExpiringMonths { raw: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGraceDays { raw } => write!(
                f,
                "QUALITRACK_GRACE_DAYS must be a positive whole number (found '{raw}')"
            ),
            ConfigError::InvalidExpiringMonths { raw } => write!(
                f,
                "QUALITRACK_EXPIRING_MONTHS must be a positive whole number (found '{raw}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
