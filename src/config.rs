//! Configuration module
//!
//! `AppConfig` is read from a TOML file at startup. Every section and
//! field has a default, so the service runs without a file at all; a
//! file that exists but cannot be read or parsed is a startup error.
//!
//! Default location: `<user config dir>/timeclock-service/config.toml`,
//! overridable with the `TIMECLOCK_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    /// Read configuration from `path`.
    ///
    /// A missing file is fine and yields the defaults. An unreadable or
    /// malformed file is an error so a typo never silently falls back
    /// to the development configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// `[server]` section: the REST API bind address
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// `[database]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    /// Effective connection URL; `TIMECLOCK_DATABASE_URL` wins over the
    /// file when set.
    pub fn connection_url(&self) -> String {
        std::env::var("TIMECLOCK_DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./timeclock.db?mode=rwc".to_string(),
        }
    }
}

/// `[auth]` section: token signing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl AuthConfig {
    /// Effective signing secret; `TIMECLOCK_JWT_SECRET` wins over the
    /// file when set.
    pub fn secret(&self) -> String {
        std::env::var("TIMECLOCK_JWT_SECRET").unwrap_or_else(|_| self.jwt_secret.clone())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-before-deploying".to_string(),
            token_ttl_hours: 24,
        }
    }
}

/// `[logging]` section; `RUST_LOG` wins over the configured level
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// `[admin]` section: the account seeded on first run (empty user table)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
    pub username: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            password: "admin-change-me".to_string(),
            username: "admin".to_string(),
        }
    }
}

/// `<user config dir>/timeclock-service/config.toml`, falling back to
/// the working directory when the platform reports no config dir.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("timeclock-service")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.database.url, "sqlite://./timeclock.db?mode=rwc");
        assert_eq!(cfg.auth.token_ttl_hours, 24);
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.admin.email.is_empty());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9999

            [auth]
            jwt_secret = "s3cret"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 9999);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.auth.jwt_secret, "s3cret");
        assert_eq!(cfg.auth.token_ttl_hours, 24);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn full_file_parses() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 3000

            [database]
            url = "sqlite:///var/lib/timeclock/prod.db?mode=rwc"

            [auth]
            jwt_secret = "production secret"
            token_ttl_hours = 8

            [logging]
            level = "debug"

            [admin]
            email = "boss@example.com"
            password = "a better password"
            username = "boss"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.database.url, "sqlite:///var/lib/timeclock/prod.db?mode=rwc");
        assert_eq!(cfg.auth.token_ttl_hours, 8);
        assert_eq!(cfg.admin.email, "boss@example.com");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = AppConfig::load(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert_eq!(cfg.server.port, 8080);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join("timeclock-config-test-malformed.toml");
        std::fs::write(&path, "[server\nport = not a number").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn default_path_ends_with_the_service_dir() {
        let path = default_config_path();
        assert!(path.ends_with("timeclock-service/config.toml"));
    }
}
