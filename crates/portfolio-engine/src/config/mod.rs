use crate::analytics::briefing::BriefingConfig;
use crate::analytics::report::PulseConfig;
use crate::analytics::{CapexConfig, ProjectionConfig, ScoringConfig, DEFAULT_DISCOUNT_WATCH_PCT};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the deployment.
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
    pub engine: EngineConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut engine = EngineConfig::default();

        if let Ok(raw) = env::var("PORTFOLIO_REFERENCE_YEAR") {
            engine.scoring.reference_year = raw
                .trim()
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidReferenceYear(raw))?;
        }

        if let Ok(raw) = env::var("PORTFOLIO_DISCOUNT_WATCH_PCT") {
            engine.discount_watch_threshold_pct = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0)
                .ok_or(ConfigError::InvalidThreshold(raw))?;
        }

        if let Ok(raw) = env::var("PORTFOLIO_CAPEX_REFERENCE_UNIT") {
            engine.capex.reference_unit = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value > 0.0)
                .ok_or(ConfigError::InvalidReferenceUnit(raw))?;
        }

        Ok(Self {
            environment,
            engine,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tunables of the analytics engine. `Default` is the reference configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub discount_watch_threshold_pct: f64,
    pub capex: CapexConfig,
    pub projection: ProjectionConfig,
    pub briefing: BriefingConfig,
    pub pulse: PulseConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            discount_watch_threshold_pct: DEFAULT_DISCOUNT_WATCH_PCT,
            capex: CapexConfig::default(),
            projection: ProjectionConfig::default(),
            briefing: BriefingConfig::default(),
            pulse: PulseConfig::default(),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidReferenceYear(String),
    InvalidThreshold(String),
    InvalidReferenceUnit(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidReferenceYear(raw) => {
                write!(f, "PORTFOLIO_REFERENCE_YEAR must be a year, got '{raw}'")
            }
            ConfigError::InvalidThreshold(raw) => write!(
                f,
                "PORTFOLIO_DISCOUNT_WATCH_PCT must be a non-negative percentage, got '{raw}'"
            ),
            ConfigError::InvalidReferenceUnit(raw) => write!(
                f,
                "PORTFOLIO_CAPEX_REFERENCE_UNIT must be a positive amount, got '{raw}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

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
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("PORTFOLIO_REFERENCE_YEAR");
        env::remove_var("PORTFOLIO_DISCOUNT_WATCH_PCT");
        env::remove_var("PORTFOLIO_CAPEX_REFERENCE_UNIT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.engine.scoring.reference_year, 2025);
        assert_eq!(config.engine.discount_watch_threshold_pct, 2.7);
        assert_eq!(config.engine.capex.reference_unit, 1_000_000.0);
    }

    #[test]
    fn env_overrides_engine_settings() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("PORTFOLIO_REFERENCE_YEAR", "2030");
        env::set_var("PORTFOLIO_DISCOUNT_WATCH_PCT", "3.0");
        env::set_var("PORTFOLIO_CAPEX_REFERENCE_UNIT", "500000");
        let config = AppConfig::load().expect("config loads");
        reset_env();
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.engine.scoring.reference_year, 2030);
        assert_eq!(config.engine.discount_watch_threshold_pct, 3.0);
        assert_eq!(config.engine.capex.reference_unit, 500_000.0);
    }

    #[test]
    fn rejects_non_positive_reference_unit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PORTFOLIO_CAPEX_REFERENCE_UNIT", "0");
        let err = AppConfig::load().expect_err("zero reference unit is rejected");
        reset_env();
        assert!(matches!(err, ConfigError::InvalidReferenceUnit(_)));
    }

    #[test]
    fn rejects_malformed_reference_year() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PORTFOLIO_REFERENCE_YEAR", "next year");
        let err = AppConfig::load().expect_err("malformed year is rejected");
        reset_env();
        assert!(err.to_string().contains("next year"));
    }
}
