use std::str::FromStr;
use std::time::Duration;

use crate::auth::jwt::JwtConfig;

/// Default access token lifetime in minutes (12 hours).
const DEFAULT_TOKEN_TTL_MINS: i64 = 720;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Pool size (default: `20`).
    pub max_connections: u32,
    /// Connection attempts at startup before giving up (default: `3`).
    pub connect_attempts: u32,
    /// Fixed delay between startup connection attempts (default: 5s).
    pub connect_retry_delay: Duration,
}

/// Server configuration loaded from environment variables.
///
/// Built once in `main` and moved into [`crate::state::AppState`]; nothing
/// reads the environment after startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
    /// Token signing key and lifetime.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Required | Default                 |
    /// |-------------------------------|----------|-------------------------|
    /// | `HOST`                        | no       | `0.0.0.0`               |
    /// | `PORT`                        | no       | `8080`                  |
    /// | `CORS_ORIGINS`                | no       | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`        | no       | `30`                    |
    /// | `DATABASE_URL`                | **yes**  | --                      |
    /// | `DB_MAX_CONNECTIONS`          | no       | `20`                    |
    /// | `DB_CONNECT_ATTEMPTS`         | no       | `3`                     |
    /// | `DB_CONNECT_RETRY_DELAY_SECS` | no       | `5`                     |
    /// | `JWT_SECRET`                  | **yes**  | --                      |
    /// | `JWT_TOKEN_TTL_MINS`          | no       | `720`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 8080u16)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let database = DatabaseConfig {
            url: required(&lookup, "DATABASE_URL")?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?,
            connect_attempts: parse_or(&lookup, "DB_CONNECT_ATTEMPTS", 3u32)?,
            connect_retry_delay: Duration::from_secs(parse_or(
                &lookup,
                "DB_CONNECT_RETRY_DELAY_SECS",
                5u64,
            )?),
        };

        let token_ttl_mins = parse_or(&lookup, "JWT_TOKEN_TTL_MINS", DEFAULT_TOKEN_TTL_MINS)?;
        if token_ttl_mins <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_TOKEN_TTL_MINS",
                value: token_ttl_mins.to_string(),
            });
        }
        let jwt = JwtConfig {
            secret: required(&lookup, "JWT_SECRET")?,
            token_ttl: chrono::Duration::minutes(token_ttl_mins),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database,
            jwt,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name).ok_or(ConfigError::Missing(name))?;
    if value.is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(value)
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://localhost/films"),
        ("JWT_SECRET", "sign-key"),
    ];

    #[test]
    fn defaults_apply() {
        let config = ServerConfig::from_lookup(lookup_from(&REQUIRED)).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.connect_attempts, 3);
        assert_eq!(config.database.connect_retry_delay, Duration::from_secs(5));
        assert_eq!(config.jwt.token_ttl, chrono::Duration::minutes(720));
    }

    #[test]
    fn overrides_apply() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("PORT", "9000"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("JWT_TOKEN_TTL_MINS", "15"),
            ("DB_CONNECT_ATTEMPTS", "10"),
        ]);
        let config = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.jwt.token_ttl, chrono::Duration::minutes(15));
        assert_eq!(config.database.connect_attempts, 10);
    }

    #[test]
    fn missing_secret_is_an_error() {
        let err = ServerConfig::from_lookup(lookup_from(&REQUIRED[..1])).unwrap_err();
        assert_matches!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn empty_secret_is_an_error() {
        let pairs = [REQUIRED[0], ("JWT_SECRET", "")];
        let err = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_matches!(err, ConfigError::Empty("JWT_SECRET"));
    }

    #[test]
    fn bad_numbers_are_errors() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "eighty"));
        let err = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { name: "PORT", .. });

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("JWT_TOKEN_TTL_MINS", "0"));
        let err = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { name: "JWT_TOKEN_TTL_MINS", .. });
    }
}
