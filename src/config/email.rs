//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
///
/// Optional section: without it the service still scores matrices but
/// reports mail requests as not configured.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub resend_api_key: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Resend API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Subject line of result emails
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.resend_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("RESEND_API_KEY"));
        }
        if !self.resend_api_key.starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidMailApiUrl);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            api_base_url: default_api_base_url(),
            subject: default_subject(),
        }
    }
}

fn default_from_email() -> String {
    "results@topsis-ranker.dev".to_string()
}

fn default_from_name() -> String {
    "TOPSIS Ranker".to_string()
}

fn default_api_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_subject() -> String {
    "TOPSIS Result".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.from_email, "results@topsis-ranker.dev");
        assert_eq!(config.subject, "TOPSIS Result");
        assert_eq!(config.api_base_url, "https://api.resend.com");
    }

    #[test]
    fn test_from_header() {
        let config = EmailConfig {
            from_email: "ranker@example.com".to_string(),
            from_name: "Ranker".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Ranker <ranker@example.com>");
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = EmailConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("RESEND_API_KEY"))
        ));
    }

    #[test]
    fn test_validation_invalid_api_key_prefix() {
        let config = EmailConfig {
            resend_api_key: "sk_xxx".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidResendKey)
        ));
    }

    #[test]
    fn test_validation_invalid_from_email() {
        let config = EmailConfig {
            resend_api_key: "re_xxx".to_string(),
            from_email: "invalid-email".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_api_url() {
        let config = EmailConfig {
            resend_api_key: "re_xxx".to_string(),
            api_base_url: "api.resend.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMailApiUrl)
        ));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = EmailConfig {
            resend_api_key: "re_abcd1234".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
