use crate::leads::domain::ParseValueError;
use crate::leads::generator::GeneratorConfig;
use crate::leads::profile::Variant;
use std::env;
use thiserror::Error;

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the dashboard tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("LEADBOARD_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("LEADBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let variant = match optional_var("LEADBOARD_VARIANT") {
            Some(raw) => raw
                .parse::<Variant>()
                .map_err(|source| ConfigError::InvalidVariant { source })?,
            None => Variant::default(),
        };

        let seed = optional_var("LEADBOARD_SEED")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        key: "LEADBOARD_SEED",
                        value: raw,
                    })
            })
            .transpose()?;

        let lead_count = optional_var("LEADBOARD_LEAD_COUNT")
            .map(|raw| {
                raw.trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        key: "LEADBOARD_LEAD_COUNT",
                        value: raw,
                    })
            })
            .transpose()?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            dashboard: DashboardConfig {
                variant,
                seed,
                lead_count,
                emergency_rate: rate_var("LEADBOARD_EMERGENCY_RATE")?,
                after_hours_rate: rate_var("LEADBOARD_AFTER_HOURS_RATE")?,
                chatbot_share: rate_var("LEADBOARD_CHATBOT_SHARE")?,
            },
        })
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn rate_var(key: &'static str) -> Result<Option<f64>, ConfigError> {
    let Some(raw) = optional_var(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(rate) if (0.0..=1.0).contains(&rate) => Ok(Some(rate)),
        _ => Err(ConfigError::InvalidRate { key, value: raw }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Dataset overrides; `None` keeps the variant defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardConfig {
    pub variant: Variant,
    pub seed: Option<u64>,
    pub lead_count: Option<usize>,
    pub emergency_rate: Option<f64>,
    pub after_hours_rate: Option<f64>,
    pub chatbot_share: Option<f64>,
}

impl DashboardConfig {
    /// Applies the overrides on top of a variant's generator defaults.
    pub fn generator(&self, defaults: &GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            lead_count: self.lead_count.unwrap_or(defaults.lead_count),
            emergency_rate: self.emergency_rate.unwrap_or(defaults.emergency_rate),
            after_hours_rate: self.after_hours_rate.unwrap_or(defaults.after_hours_rate),
            chatbot_share: self.chatbot_share.unwrap_or(defaults.chatbot_share),
            lookback_days: defaults.lookback_days,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LEADBOARD_VARIANT is invalid: {source}")]
    InvalidVariant { source: ParseValueError },
    #[error("{key} must be a non-negative integer (found '{value}')")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be a number between 0 and 1 (found '{value}')")]
    InvalidRate { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "LEADBOARD_ENV",
            "LEADBOARD_LOG_LEVEL",
            "LEADBOARD_VARIANT",
            "LEADBOARD_SEED",
            "LEADBOARD_LEAD_COUNT",
            "LEADBOARD_EMERGENCY_RATE",
            "LEADBOARD_AFTER_HOURS_RATE",
            "LEADBOARD_CHATBOT_SHARE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.dashboard, DashboardConfig::default());
    }

    #[test]
    fn reads_dashboard_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LEADBOARD_ENV", "ci");
        env::set_var("LEADBOARD_VARIANT", "crm");
        env::set_var("LEADBOARD_SEED", "42");
        env::set_var("LEADBOARD_LEAD_COUNT", "12");
        env::set_var("LEADBOARD_EMERGENCY_RATE", "0.5");

        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.dashboard.variant, Variant::SalesCrm);
        assert_eq!(config.dashboard.seed, Some(42));

        let generator = config.dashboard.generator(&GeneratorConfig::roofing());
        assert_eq!(generator.lead_count, 12);
        assert_eq!(generator.emergency_rate, 0.5);
        assert_eq!(
            generator.after_hours_rate,
            GeneratorConfig::roofing().after_hours_rate
        );
    }

    #[test]
    fn rejects_rate_outside_unit_interval() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LEADBOARD_CHATBOT_SHARE", "1.5");
        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidRate { key, value }) => {
                assert_eq!(key, "LEADBOARD_CHATBOT_SHARE");
                assert_eq!(value, "1.5");
            }
            other => panic!("expected invalid rate, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_variant() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LEADBOARD_VARIANT", "plumbing");
        let result = AppConfig::load();
        reset_env();

        assert!(matches!(result, Err(ConfigError::InvalidVariant { .. })));
    }
}
