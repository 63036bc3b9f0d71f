use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every credential is optional: a missing provider key selects the fallback
/// generators, missing LinkedIn credentials leave posting unconfigured.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub linkedin_client_id: Option<String>,
    pub linkedin_client_secret: Option<String>,
    pub linkedin_access_token: Option<String>,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origin: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            linkedin_client_id: optional_env("LINKEDIN_CLIENT_ID"),
            linkedin_client_secret: optional_env("LINKEDIN_CLIENT_SECRET"),
            linkedin_access_token: optional_env("LINKEDIN_ACCESS_TOKEN"),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Whether a text-generation provider credential is present.
    pub fn openai_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

fn optional_env(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

/// Blank values count as unset (`OPENAI_API_KEY=` in a .env file).
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Configuration with no credentials, as a fresh checkout without `.env` sees it.
    pub fn unconfigured() -> Self {
        Config {
            openai_api_key: None,
            linkedin_client_id: None,
            linkedin_client_secret: None,
            linkedin_access_token: None,
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_treats_empty_as_absent() {
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_non_blank_trims_value() {
        assert_eq!(non_blank(Some(" sk-test \n".to_string())), Some("sk-test".to_string()));
    }

    #[test]
    fn test_unconfigured_has_no_provider() {
        assert!(!Config::unconfigured().openai_configured());
    }
}
