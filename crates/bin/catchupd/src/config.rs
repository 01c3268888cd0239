//! Daemon settings: `catchup.toml`, then `CATCHUP_*` environment variables.

use std::path::Path;

use serde::Deserialize;

const CONFIG_FILE: &str = "catchup.toml";

/// Settings read once at start-up. A missing file or table falls back to
/// the defaults below.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx `SQLite` URL; `?mode=rwc` creates the file on first start.
    #[serde(default = "default_database_url")]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "sqlite:catchup.db?mode=rwc".to_string()
}

fn default_filter() -> String {
    "catchupd=info,catchup=info,tower_http=debug".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            database: DatabaseConfig {
                url: default_database_url(),
            },
            logging: LoggingConfig {
                filter: default_filter(),
            },
        }
    }
}

impl Config {
    /// Read `catchup.toml` from the working directory and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is unreadable or malformed, or
    /// when the merged settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
    }

    fn load_from(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(err.into()),
        };
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// `CATCHUP_BIND` (`host:port`) wins over `CATCHUP_HOST`/`CATCHUP_PORT`;
    /// `RUST_LOG` wins over `CATCHUP_LOG`. Unparsable ports are ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("CATCHUP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CATCHUP_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(bind) = lookup("CATCHUP_BIND")
            && let Some((host, port)) = bind.rsplit_once(':')
        {
            self.server.host = host.to_string();
            self.server.port = port.parse().unwrap_or(self.server.port);
        }
        if let Some(url) = lookup("CATCHUP_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(filter) = lookup("RUST_LOG").or_else(|| lookup("CATCHUP_LOG")) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero"));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation("database url must not be empty"));
        }
        Ok(())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config file")]
    Parse(#[from] toml::de::Error),
    #[error("cannot read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(&'static str),
}
