use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub query_timeout_secs: u64,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_CONNSTRING"))
            .context("DATABASE_URL is not set")?;
        Ok(Self {
            database_url,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            query_timeout_secs: env_or("ARMY_QUERY_TIMEOUT_SECS", 5),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("APP_PORT", 8080),
        })
    }

    /// Never below one second; the pool's acquire timeout uses the same floor.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs.max(1))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let cfg = AppConfig {
            database_url: "postgres://localhost/armies".into(),
            db_max_connections: 10,
            query_timeout_secs: 5,
            host: "127.0.0.1".into(),
            port: 9000,
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.query_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn zero_query_timeout_is_raised_to_one_second() {
        let cfg = AppConfig {
            database_url: "postgres://localhost/armies".into(),
            db_max_connections: 10,
            query_timeout_secs: 0,
            host: "0.0.0.0".into(),
            port: 8080,
        };
        assert_eq!(cfg.query_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn env_or_falls_back_on_garbage() {
        std::env::set_var("CRUSADE_TEST_BAD_NUMBER", "not-a-number");
        assert_eq!(env_or("CRUSADE_TEST_BAD_NUMBER", 42u32), 42);
        assert_eq!(env_or("CRUSADE_TEST_UNSET_NUMBER", 7u64), 7);
    }
}
