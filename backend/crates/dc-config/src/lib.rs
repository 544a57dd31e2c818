mod auth_config;
mod client_config;
mod config;
mod database_config;
mod error;
mod github_config;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use client_config::ClientConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use github_config::GithubConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "DC_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".devconnect";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "devconnect.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const MIN_JWT_SECRET_LENGTH: usize = 32;
/// 100 hours
const DEFAULT_TOKEN_TTL_SECS: u64 = 360_000;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_GITHUB_PAGE_SIZE: u32 = 5;
const MAX_GITHUB_PAGE_SIZE: u32 = 100;
const DEFAULT_GITHUB_TIMEOUT_SECS: u64 = 5;
const MAX_GITHUB_TIMEOUT_SECS: u64 = 60;
const DEFAULT_GITHUB_USER_AGENT: &str = "devconnect";

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
