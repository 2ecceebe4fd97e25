//! Runtime configuration read from the environment (and `.env` via dotenvy).

use anyhow::{Context, Result};
use tokio::net::TcpListener;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for every displayed amount
    pub currency_symbol: String,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    ///
    /// `HOST`, `PORT` and `CURRENCY_SYMBOL` are optional; an unparsable `PORT`
    /// is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };
        let currency_symbol = lookup("CURRENCY_SYMBOL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        Ok(Self {
            host,
            port,
            currency_symbol,
        })
    }

    /// Bind the listen socket. `HOST` may be an IP address or a hostname
    /// such as `localhost`; hostnames are resolved by tokio.
    pub async fn bind(&self) -> Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("failed to bind {}:{}", self.host, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CURRENCY_SYMBOL", "Rs. "),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.currency_symbol, "Rs. ");
    }

    #[tokio::test]
    async fn test_bind_resolves_hostname() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("HOST", "localhost"), ("PORT", "0")])).unwrap();

        let listener = config.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_bind_unresolvable_host_is_error() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "not a host name"),
            ("PORT", "0"),
        ]))
        .unwrap();

        assert!(config.bind().await.is_err());
    }

    #[test]
    fn test_invalid_port_is_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert!(result.is_err());
    }
}
