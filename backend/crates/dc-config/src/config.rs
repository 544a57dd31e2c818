use crate::{
    AuthConfig, CONFIG_DIR_ENV, ClientConfig, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, GithubConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub github: GithubConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DC_CONFIG_DIR env var, else use ./.devconnect/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: DC_CONFIG_DIR env var > ./.devconnect/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate everything the server needs.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.github.validate()?;
        self.client.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Directory log files are written to
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    /// Where the `dc` client keeps its session token
    pub fn token_path() -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join("token"))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 (secret {}), token ttl {}",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            humanize_secs(self.auth.token_ttl_secs)
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("-")
        );
        info!(
            "  github: {} (page size {}, timeout {}s, credentials {})",
            self.github.api_base_url,
            self.github.page_size,
            self.github.timeout_secs,
            if self.github.client_id.is_some() {
                "set"
            } else {
                "none"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("DC_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("DC_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("DC_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "DC_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("DC_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("DC_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // Logging
        Self::apply_env_parse("DC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DC_LOG_FILE", &mut self.logging.file);

        // GitHub
        Self::apply_env_string("DC_GITHUB_API_BASE_URL", &mut self.github.api_base_url);
        Self::apply_env_parse("DC_GITHUB_PAGE_SIZE", &mut self.github.page_size);
        Self::apply_env_parse("DC_GITHUB_TIMEOUT_SECS", &mut self.github.timeout_secs);
        Self::apply_env_option_string("DC_GITHUB_CLIENT_ID", &mut self.github.client_id);
        Self::apply_env_option_string("DC_GITHUB_CLIENT_SECRET", &mut self.github.client_secret);

        // Client
        Self::apply_env_string("DC_SERVER_URL", &mut self.client.server_url);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

fn humanize_secs(secs: u64) -> String {
    humantime::format_duration(std::time::Duration::from_secs(secs)).to_string()
}
