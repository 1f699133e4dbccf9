use std::env;
use std::time::Duration;

use anyhow::Context;
use dotenv::dotenv;

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_host: String,
    pub server_port: String,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl Config {
    /// Loads settings from the process environment, after merging an optional `.env` file.
    pub fn from_env() -> anyhow::Result<Config> {
        if dotenv().is_err() {
            tracing::debug!("no .env file loaded");
        }

        let server_port = load_env("SERVER_PORT")?;
        let server_host =
            load_optional_env("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());
        let read_timeout =
            parse_timeout("READ_TIMEOUT_SECS", load_optional_env("READ_TIMEOUT_SECS"))?;
        let write_timeout =
            parse_timeout("WRITE_TIMEOUT_SECS", load_optional_env("WRITE_TIMEOUT_SECS"))?;

        Ok(Config {
            server_host,
            server_port,
            read_timeout,
            write_timeout,
        })
    }
}

fn load_env(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("failed to load environment variable {}", key))
}

fn load_optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// Unset and zero both mean the default timeout.
fn parse_timeout(key: &str, raw: Option<String>) -> anyhow::Result<Duration> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TIMEOUT);
    };

    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("environment variable {} must be a number of seconds", key))?;

    if secs == 0 {
        Ok(DEFAULT_TIMEOUT)
    } else {
        Ok(Duration::from_secs(secs))
    }
}
