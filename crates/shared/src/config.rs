//! Application configuration management.

use serde::Deserialize;

/// Environment variable prefix; nested keys use `__` (e.g. `COINAGE__LOCALE__NAME`).
pub const ENV_PREFIX: &str = "COINAGE";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Ambient locale and region used for formatting and the current currency.
    pub locale: LocaleConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale tag used for number formatting (e.g. `en-US`, `zh-CN`).
    pub name: String,
    /// Region override for the current currency. Falls back to the locale's region.
    pub region: Option<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            name: default_locale(),
            region: None,
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "coinage=info".to_string()
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `COINAGE__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
