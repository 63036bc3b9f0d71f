//! LinkedIn posting integration.
//!
//! Posting is not implemented yet: `post_content` always reports `coming_soon`.
//! Only the configuration check is real.

use serde::Serialize;

use crate::config::Config;

pub mod handlers;

pub const NOT_CONFIGURED_MESSAGE: &str =
    "LinkedIn API not configured. Please add your LinkedIn API credentials to .env file.";
pub const COMING_SOON_MESSAGE: &str =
    "LinkedIn API integration is coming soon! For now, please copy and post manually.";

/// Result of a posting attempt, returned to the client as-is.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostOutcome {
    pub success: bool,
    pub message: String,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct LinkedInClient {
    client_id: Option<String>,
    client_secret: Option<String>,
    access_token: Option<String>,
}

impl LinkedInClient {
    pub fn new(
        client_id: Option<String>,
        client_secret: Option<String>,
        access_token: Option<String>,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            access_token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.linkedin_client_id.clone(),
            config.linkedin_client_secret.clone(),
            config.linkedin_access_token.clone(),
        )
    }

    /// True iff all three credentials are present and non-empty.
    pub fn is_configured(&self) -> bool {
        [&self.client_id, &self.client_secret, &self.access_token]
            .iter()
            .all(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
    }

    // TODO: publish through the LinkedIn UGC Posts API.
    pub fn post_content(&self, _content: &str, _hashtags: &[String]) -> PostOutcome {
        let message = if self.is_configured() {
            COMING_SOON_MESSAGE
        } else {
            NOT_CONFIGURED_MESSAGE
        };

        PostOutcome {
            success: false,
            message: message.to_string(),
            status: "coming_soon".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> LinkedInClient {
        LinkedInClient::new(
            Some("id".to_string()),
            Some("secret".to_string()),
            Some("token".to_string()),
        )
    }

    #[test]
    fn test_configured_requires_all_three() {
        assert!(configured().is_configured());
        assert!(
            !LinkedInClient::new(Some("id".to_string()), Some("secret".to_string()), None)
                .is_configured()
        );
        assert!(!LinkedInClient::new(
            Some(String::new()),
            Some("secret".to_string()),
            Some("token".to_string())
        )
        .is_configured());
        assert!(!LinkedInClient::new(None, None, None).is_configured());
    }

    #[test]
    fn test_post_unconfigured() {
        let outcome = LinkedInClient::new(None, None, None).post_content("Hello", &[]);
        assert!(!outcome.success);
        assert_eq!(outcome.status, "coming_soon");
        assert_eq!(outcome.message, NOT_CONFIGURED_MESSAGE);
    }

    #[test]
    fn test_post_configured_is_still_coming_soon() {
        let outcome = configured().post_content("Hello", &["#Rust".to_string()]);
        assert!(!outcome.success);
        assert_eq!(outcome.status, "coming_soon");
        assert_eq!(outcome.message, COMING_SOON_MESSAGE);
    }

    #[test]
    fn test_from_config_unconfigured() {
        assert!(!LinkedInClient::from_config(&Config::unconfigured()).is_configured());
    }
}
