use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DB_MAX_CONNECTIONS,
    MAX_DB_MAX_CONNECTIONS, MIN_DB_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Keep the database inside the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if !(MIN_DB_MAX_CONNECTIONS..=MAX_DB_MAX_CONNECTIONS).contains(&self.max_connections) {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DB_MAX_CONNECTIONS, MAX_DB_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }
}
