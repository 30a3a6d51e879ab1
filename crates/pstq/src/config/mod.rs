use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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

/// Top-level configuration for the scoring service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            simulation: SimulationConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Defaults for what-if projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Score a projection is measured against when the caller does not name one.
    pub target_score: i32,
    /// Upper bound on values per axis accepted from a single request.
    pub max_axis_values: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            target_score: 600,
            max_axis_values: 24,
        }
    }
}

impl SimulationConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let target_score = match env::var("PSTQ_TARGET_SCORE") {
            Ok(raw) => raw
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|value| *value >= 0)
                .ok_or(ConfigError::InvalidSimulationSetting {
                    key: "PSTQ_TARGET_SCORE",
                    expected: "a non-negative integer",
                    value: raw,
                })?,
            Err(_) => defaults.target_score,
        };

        let max_axis_values = match env::var("PSTQ_MAX_AXIS_VALUES") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidSimulationSetting {
                    key: "PSTQ_MAX_AXIS_VALUES",
                    expected: "a positive integer",
                    value: raw,
                })?,
            Err(_) => defaults.max_axis_values,
        };

        Ok(Self {
            target_score,
            max_axis_values,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSimulationSetting {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSimulationSetting {
                key,
                expected,
                value,
            } => {
                write!(f, "{key} must be {expected}, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidSimulationSetting { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

/// Serialises tests that mutate process environment variables.
#[cfg(test)]
pub(crate) fn env_guard() -> &'static std::sync::Mutex<()> {
    static GUARD: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();
    GUARD.get_or_init(|| std::sync::Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("PSTQ_TARGET_SCORE");
        env::remove_var("PSTQ_MAX_AXIS_VALUES");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.simulation, SimulationConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_simulation_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PSTQ_TARGET_SCORE", "640");
        env::set_var("PSTQ_MAX_AXIS_VALUES", "12");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.simulation.target_score, 640);
        assert_eq!(config.simulation.max_axis_values, 12);
        reset_env();
    }

    #[test]
    fn rejects_zero_axis_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PSTQ_MAX_AXIS_VALUES", "0");
        let error = AppConfig::load().expect_err("zero limit rejected");
        assert!(matches!(
            error,
            ConfigError::InvalidSimulationSetting {
                key: "PSTQ_MAX_AXIS_VALUES",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn target_score_accepts_zero_and_rejects_negatives() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PSTQ_TARGET_SCORE", "0");
        let config = AppConfig::load().expect("zero target loads");
        assert_eq!(config.simulation.target_score, 0);

        env::set_var("PSTQ_TARGET_SCORE", "-5");
        let error = AppConfig::load().expect_err("negative target rejected");
        assert_eq!(
            error.to_string(),
            "PSTQ_TARGET_SCORE must be a non-negative integer, got '-5'"
        );
        reset_env();
    }

    #[test]
    fn axis_limit_message_asks_for_positive_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PSTQ_MAX_AXIS_VALUES", "none");
        let error = AppConfig::load().expect_err("non-numeric limit rejected");
        assert_eq!(
            error.to_string(),
            "PSTQ_MAX_AXIS_VALUES must be a positive integer, got 'none'"
        );
        reset_env();
    }
}
