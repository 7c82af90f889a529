use std::env;

use anyhow::{anyhow, Context, Result};

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_FRONTEND_ORIGIN: &str = "https://sencha-ai-subpage-test.vercel.app";

/// Application configuration loaded from environment variables.
/// Built once at startup and shared read-only through the app state.
#[derive(Debug, Clone)]
pub struct Config {
    // AI provider
    pub openai_api_key: String,
    pub model: String,
    pub openai_base_url: Option<String>,

    // CORS
    pub frontend_origin: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
    pub server_url: Option<String>,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        config.log_keys();
        Ok(config)
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key =
            get("OPENAI_API_KEY").ok_or_else(|| anyhow!("OPENAI_API_KEY environment variable is required"))?;

        let web_port = match get("WEB_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("WEB_PORT must be a number, got {port:?}"))?,
            None => 3000,
        };

        Ok(Self {
            openai_api_key,
            model: get("GPT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL"),
            frontend_origin: get("FRONTEND_ORIGIN")
                .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string()),
            web_host: get("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
            server_url: get("SERVER_URL"),
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }

    fn log_keys(&self) {
        fn preview(val: &str) -> String {
            let n = val.char_indices().nth(5).map_or(val.len(), |(i, _)| i);
            format!("{}...({} chars)", &val[..n], val.len())
        }

        tracing::info!("Config loaded:");
        tracing::info!("  OPENAI_API_KEY: {}", preview(&self.openai_api_key));
        tracing::info!("  GPT_MODEL: {}", self.model);
        tracing::info!(
            "  OPENAI_BASE_URL: {}",
            self.openai_base_url.as_deref().unwrap_or("<not set>")
        );
        tracing::info!("  FRONTEND_ORIGIN: {}", self.frontend_origin);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_applied() {
        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-abc")])).unwrap();
        assert_eq!(config.openai_api_key, "sk-abc");
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.frontend_origin, DEFAULT_FRONTEND_ORIGIN);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(config.openai_base_url.is_none());
        assert!(config.server_url.is_none());
    }

    #[test]
    fn overrides_read() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-abc"),
            ("GPT_MODEL", "gpt-4o-mini"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1"),
            ("FRONTEND_ORIGIN", "http://localhost:1841"),
            ("WEB_HOST", "127.0.0.1"),
            ("WEB_PORT", "8000"),
            ("SERVER_URL", "https://api.example.com"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.openai_base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(config.frontend_origin, "http://localhost:1841");
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.server_url.as_deref(), Some("https://api.example.com"));
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn blank_api_key_is_an_error() {
        assert!(Config::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-abc"),
            ("WEB_PORT", "http"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("WEB_PORT"));
    }
}
