use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Output formatting settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// Pretty-print JSON output. Default: false.
    #[serde(default)]
    pub pretty: bool,
}

/// Logging settings.
#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset. Default: "info".
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load from defaults, then `config/config.toml` (or `$SHAPES_CONFIG`),
    /// then `SHAPES__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("SHAPES_CONFIG").unwrap_or_else(|_| "config/config".to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("output.pretty", false)?
            .set_default("log.level", "info")?
            .add_source(File::with_name(config_path).required(false))
            // e.g. SHAPES__OUTPUT__PRETTY=true
            .add_source(Environment::with_prefix("SHAPES").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
