//! Gateway Configuration
//!
//! Resolved from environment variables, then overridden field by field by an
//! optional `gateway.json` in the app config directory.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const CONFIG_FILE: &str = "gateway.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_url: String,
    /// Base URL of the identity provider
    pub auth_url: Option<String>,
    pub auth_anon_key: Option<String>,
    /// Bearer token of the signed-in user
    pub access_token: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: None,
            auth_anon_key: None,
            access_token: None,
        }
    }
}

/// Fields present in `gateway.json`; absent fields keep the environment value
#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    api_url: Option<String>,
    auth_url: Option<String>,
    auth_anon_key: Option<String>,
    access_token: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

impl GatewayConfig {
    /// Build from a variable lookup, so tests don't touch the process environment
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| non_blank(vars.get(key).cloned());
        Self {
            api_url: trim_base(get("ERP_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())),
            auth_url: get("ERP_AUTH_URL").map(trim_base),
            auth_anon_key: get("ERP_AUTH_ANON_KEY"),
            access_token: get("ERP_ACCESS_TOKEN"),
        }
    }

    pub fn from_env() -> Self {
        Self::from_vars(&std::env::vars().collect())
    }

    fn apply(mut self, overlay: ConfigOverlay) -> Self {
        if let Some(url) = non_blank(overlay.api_url) {
            self.api_url = trim_base(url);
        }
        if let Some(url) = non_blank(overlay.auth_url) {
            self.auth_url = Some(trim_base(url));
        }
        if let Some(key) = non_blank(overlay.auth_anon_key) {
            self.auth_anon_key = Some(key);
        }
        if let Some(token) = non_blank(overlay.access_token) {
            self.access_token = Some(token);
        }
        self
    }

    /// Overlay `<config_dir>/gateway.json` if it exists
    pub fn with_file(self, config_dir: &Path) -> Result<Self, String> {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(self);
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let overlay: ConfigOverlay = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        Ok(self.apply(overlay))
    }

    /// Identity lookups need the provider URL, its anon key and a user token
    pub fn identity_configured(&self) -> bool {
        self.auth_url.is_some() && self.auth_anon_key.is_some() && self.access_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = GatewayConfig::from_vars(&HashMap::new());
        assert_eq!(config, GatewayConfig::default());
        assert!(!config.identity_configured());
    }

    #[test]
    fn test_env_values_trimmed() {
        let config = GatewayConfig::from_vars(&vars(&[
            ("ERP_API_URL", "https://api.example.com/"),
            ("ERP_AUTH_URL", "https://auth.example.com//"),
            ("ERP_AUTH_ANON_KEY", "anon"),
            ("ERP_ACCESS_TOKEN", "  "),
        ]));
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.auth_url.as_deref(), Some("https://auth.example.com"));
        assert_eq!(config.access_token, None);
    }

    #[test]
    fn test_file_overrides_env() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"api_url": "http://10.0.0.5:8000/", "access_token": "tok"}"#,
        )
        .unwrap();

        let base = GatewayConfig::from_vars(&vars(&[("ERP_AUTH_ANON_KEY", "anon")]));
        let config = base.with_file(dir.path()).unwrap();
        assert_eq!(config.api_url, "http://10.0.0.5:8000");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.auth_anon_key.as_deref(), Some("anon"));
    }

    #[test]
    fn test_missing_file_is_fine_bad_file_is_not() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GatewayConfig::default().with_file(dir.path()).is_ok());

        std::fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();
        assert!(GatewayConfig::default().with_file(dir.path()).is_err());
    }
}
