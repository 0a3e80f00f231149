//! Database configuration - environment loading
//!
//! Configuration is loaded from environment variables:
//! - `MYSQL_HOST`: database host (default: 172.17.0.1)
//! - `MYSQL_USER`: auth user (default: admin)
//! - `MYSQL_PASSWORD`: auth password
//! - `MYSQL_DB`: database name (default: myDb)
//! - `MYSQL_PORT`: database port (default: 3306)

use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

const DEFAULT_HOST: &str = "172.17.0.1";
const DEFAULT_USER: &str = "admin";
const DEFAULT_PASSWORD: &str = "Keepitupn0w@";
const DEFAULT_DATABASE: &str = "myDb";
const DEFAULT_PORT: u16 = 3306;

/// MySQL connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl DbConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        Self {
            host: or("MYSQL_HOST", DEFAULT_HOST),
            user: or("MYSQL_USER", DEFAULT_USER),
            password: or("MYSQL_PASSWORD", DEFAULT_PASSWORD),
            database: or("MYSQL_DB", DEFAULT_DATABASE),
            port: lookup("MYSQL_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Build sqlx connect options. Nothing is dialled here.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

// Keep the password out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = DbConfig::from_lookup(lookup(&[]));

        assert_eq!(config.host, "172.17.0.1");
        assert_eq!(config.user, "admin");
        assert_eq!(config.password, "Keepitupn0w@");
        assert_eq!(config.database, "myDb");
        assert_eq!(config.port, 3306);
    }

    #[test]
    fn env_overrides_defaults() {
        let config = DbConfig::from_lookup(lookup(&[
            ("MYSQL_HOST", "db.internal"),
            ("MYSQL_USER", "writer"),
            ("MYSQL_PASSWORD", "s3cret"),
            ("MYSQL_DB", "board"),
            ("MYSQL_PORT", "3307"),
        ]));

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.user, "writer");
        assert_eq!(config.password, "s3cret");
        assert_eq!(config.database, "board");
        assert_eq!(config.port, 3307);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = DbConfig::from_lookup(lookup(&[("MYSQL_PORT", "not-a-port")]));
        assert_eq!(config.port, 3306);
    }

    #[test]
    fn debug_hides_password() {
        let config = DbConfig::from_lookup(lookup(&[("MYSQL_PASSWORD", "hunter2")]));
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }
}
