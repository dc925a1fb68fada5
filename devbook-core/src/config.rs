//! Process configuration
//!
//! Built once at startup from the environment (and an optional `.env` file)
//! and passed by value to whatever opens the store and binds the listener.
//!
//! Environment variables:
//!   DATABASE_URL   # full sqlx SQLite URL, wins over DB_NAME
//!   DB_NAME        # database file stem (default: devbook)
//!   API_HOST       # bind host (default: 127.0.0.1)
//!   API_PORT       # listen port (default: 3332)

use std::net::SocketAddr;

/// Listen port used when `API_PORT` is unset or not a number
pub const DEFAULT_PORT: u16 = 3332;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_DB_NAME: &str = "devbook";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: sqlite_url(DEFAULT_DB_NAME),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("ignoring unreadable .env: {}", e),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                let name = lookup("DB_NAME")
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
                sqlite_url(&name)
            });

        let port = lookup("API_PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let host = lookup("API_HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Self {
            database_url,
            host,
            port,
        }
    }

    /// Address the HTTP listener binds to, if `host` parses as an IP.
    pub fn bind_addr(&self) -> Option<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().ok()
    }
}

fn sqlite_url(name: &str) -> String {
    format!("sqlite://{}.db", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3332);
        assert_eq!(config.database_url, "sqlite://devbook.db");
    }

    #[test]
    fn db_name_builds_sqlite_url() {
        let config = Config::from_lookup(lookup(&[("DB_NAME", "social")]));
        assert_eq!(config.database_url, "sqlite://social.db");
    }

    #[test]
    fn database_url_wins_over_db_name() {
        let config = Config::from_lookup(lookup(&[
            ("DB_NAME", "social"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]));
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[("API_PORT", "not-a-port")]));
        assert_eq!(config.port, DEFAULT_PORT);

        let config = Config::from_lookup(lookup(&[("API_PORT", "5000")]));
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let config = Config::from_lookup(lookup(&[("API_HOST", "0.0.0.0"), ("API_PORT", "8080")]));
        assert_eq!(config.bind_addr(), Some(SocketAddr::from(([0, 0, 0, 0], 8080))));

        let config = Config::from_lookup(lookup(&[("API_HOST", "localhost")]));
        assert_eq!(config.bind_addr(), None);
    }
}
