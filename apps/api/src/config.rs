use anyhow::{Context, Result};

pub const DEFAULT_GATEWAY_URL: &str = "https://gateway.ai.cloudflare.com/v1";

/// Application configuration loaded from environment variables.
///
/// Gateway bindings are optional at startup. When any of them is missing the
/// server still boots, and each generation request fails fast instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub gateway: Option<GatewayConfig>,
}

/// Everything needed to reach the hosted model through the inference gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub account_id: String,
    pub api_token: String,
    pub gateway_id: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gateway: GatewayConfig::from_lookup(|key| std::env::var(key).ok()),
        })
    }
}

impl GatewayConfig {
    /// Builds the gateway bindings from a key lookup. Returns `None` if any
    /// required binding is absent or blank.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Some(GatewayConfig {
            account_id: present("CLOUDFLARE_ACCOUNT_ID")?,
            api_token: present("CLOUDFLARE_API_TOKEN")?,
            gateway_id: present("CLOUDFLARE_GATEWAY_ID")?,
            base_url: present("CLOUDFLARE_GATEWAY_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
        })
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
    fn test_gateway_config_all_bindings_present() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("CLOUDFLARE_ACCOUNT_ID", "acct"),
            ("CLOUDFLARE_API_TOKEN", "token"),
            ("CLOUDFLARE_GATEWAY_ID", "gw"),
        ]))
        .unwrap();

        assert_eq!(config.account_id, "acct");
        assert_eq!(config.gateway_id, "gw");
        assert_eq!(config.base_url, DEFAULT_GATEWAY_URL);
    }

    #[test]
    fn test_gateway_config_missing_gateway_id() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("CLOUDFLARE_ACCOUNT_ID", "acct"),
            ("CLOUDFLARE_API_TOKEN", "token"),
        ]));
        assert!(config.is_none());
    }

    #[test]
    fn test_gateway_config_blank_value_counts_as_missing() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("CLOUDFLARE_ACCOUNT_ID", "acct"),
            ("CLOUDFLARE_API_TOKEN", "   "),
            ("CLOUDFLARE_GATEWAY_ID", "gw"),
        ]));
        assert!(config.is_none());
    }

    #[test]
    fn test_gateway_config_custom_url_trailing_slash() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("CLOUDFLARE_ACCOUNT_ID", "acct"),
            ("CLOUDFLARE_API_TOKEN", "token"),
            ("CLOUDFLARE_GATEWAY_ID", "gw"),
            ("CLOUDFLARE_GATEWAY_URL", "http://localhost:9000/v1/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1");
    }
}
