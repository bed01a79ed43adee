use crate::error::{DdtError, Result};
use std::env;

/// Name of the environment variable holding the Datadog API key.
pub const API_KEY_VAR: &str = "DD_API_KEY";
/// Name of the environment variable holding the Datadog application key.
pub const APP_KEY_VAR: &str = "DD_APP_KEY";
/// Name of the environment variable selecting the Datadog site.
pub const SITE_VAR: &str = "DD_SITE";

const DEFAULT_SITE: &str = "datadoghq.com";

/// API/application key pair plus the site they belong to.
///
/// Loaded once at startup; both keys are required, the site defaults to
/// the US site when `DD_SITE` is absent.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub app_key: String,
    pub site: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            env::var(API_KEY_VAR).ok(),
            env::var(APP_KEY_VAR).ok(),
            env::var(SITE_VAR).ok(),
        )
    }

    pub fn from_values(
        api_key: Option<String>,
        app_key: Option<String>,
        site: Option<String>,
    ) -> Result<Self> {
        let api_key = non_empty(api_key)
            .ok_or_else(|| DdtError::Config(format!("{API_KEY_VAR} is not set")))?;
        let app_key = non_empty(app_key)
            .ok_or_else(|| DdtError::Config(format!("{APP_KEY_VAR} is not set")))?;
        let site = non_empty(site).unwrap_or_else(|| DEFAULT_SITE.to_string());

        Ok(Self {
            api_key,
            app_key,
            site,
        })
    }

    /// API endpoint root for the configured site.
    pub fn base_url(&self) -> String {
        format!("https://api.{}", self.site)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> (Option<String>, Option<String>) {
        (Some("api-123".into()), Some("app-456".into()))
    }

    #[test]
    fn loads_both_keys() {
        let (api, app) = keys();
        let creds = Credentials::from_values(api, app, None).unwrap();
        assert_eq!(creds.api_key, "api-123");
        assert_eq!(creds.app_key, "app-456");
    }

    #[test]
    fn missing_api_key_is_config_error() {
        let err = Credentials::from_values(None, Some("app".into()), None).unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn blank_app_key_is_config_error() {
        let err = Credentials::from_values(Some("api".into()), Some("  ".into()), None).unwrap_err();
        assert!(err.to_string().contains(APP_KEY_VAR));
    }

    #[test]
    fn default_site() {
        let (api, app) = keys();
        let creds = Credentials::from_values(api, app, None).unwrap();
        assert_eq!(creds.base_url(), "https://api.datadoghq.com");
    }

    #[test]
    fn custom_site() {
        let (api, app) = keys();
        let creds = Credentials::from_values(api, app, Some("datadoghq.eu".into())).unwrap();
        assert_eq!(creds.base_url(), "https://api.datadoghq.eu");
    }
}
