mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod todos_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use todos_config::TodosConfig;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";
const DEFAULT_SESSION_COOKIE: &str = "token";
const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_REFETCH_AFTER_MUTATION: bool = false;
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const CONFIG_DIR_ENV: &str = "TODO_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".todo";
const CONFIG_FILENAME: &str = "config.toml";
