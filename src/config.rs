use dotenvy::dotenv;
use std::env;
use thiserror::Error;

const DEFAULT_SMTP_HOST:    &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT:    u16  = 587;
const DEFAULT_REDIRECT_URL: &str = "https://vertexexperience.com/thank-you";

#[derive(Debug, Clone)]
pub struct Config {
    // Backend
    pub backend_host:    String,
    pub backend_port:    u16,

    // Email
    pub smtp_host:       String,
    pub smtp_port:       u16,
    pub smtp_username:   Option<String>,
    pub smtp_password:   Option<String>,
    pub recipient_email: Option<String>,

    // Client
    pub redirect_url:    String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {0}")]
    MissingVar(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Everything needed to reach the SMTP relay for one send.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host:     String,
    pub port:     u16,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fully resolved delivery configuration, only available when every
/// required variable is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub smtp:      SmtpSettings,
    pub recipient: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parse the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset, like an unset variable would.
        let optional = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let parse_port = |key: &str| -> Result<Option<u16>, ConfigError> {
            match optional(key) {
                Some(raw) => raw
                    .parse::<u16>()
                    .map(Some)
                    .map_err(|_| ConfigError::InvalidValue(key.to_string(), raw)),
                None => Ok(None),
            }
        };

        let smtp_port = parse_port("SMTP_PORT").unwrap_or_else(|err| {
            tracing::warn!(error = %err, default = DEFAULT_SMTP_PORT, "Falling back to default SMTP port");
            None
        });

        Ok(Self {
            backend_host:    optional("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            backend_port:    parse_port("PORT")?.unwrap_or(8080),

            smtp_host:       optional("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.into()),
            smtp_port:       smtp_port.unwrap_or(DEFAULT_SMTP_PORT),
            smtp_username:   optional("SMTP_USERNAME"),
            smtp_password:   optional("SMTP_PASSWORD"),
            recipient_email: optional("RECIPIENT_EMAIL"),

            redirect_url:    optional("REDIRECT_URL").unwrap_or_else(|| DEFAULT_REDIRECT_URL.into()),
        })
    }

    /// Names of the required variables that are not set.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        [
            ("SMTP_USERNAME",   &self.smtp_username),
            ("SMTP_PASSWORD",   &self.smtp_password),
            ("RECIPIENT_EMAIL", &self.recipient_email),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect()
    }

    pub fn mail_settings(&self) -> Result<MailSettings, ConfigError> {
        match (&self.smtp_username, &self.smtp_password, &self.recipient_email) {
            (Some(username), Some(password), Some(recipient)) => Ok(MailSettings {
                smtp: SmtpSettings {
                    host:     self.smtp_host.clone(),
                    port:     self.smtp_port,
                    username: username.clone(),
                    password: password.clone(),
                },
                recipient: recipient.clone(),
            }),
            _ => Err(ConfigError::MissingVar(self.missing_vars().join(", "))),
        }
    }
}
