//! Confirmation email for received submissions and inquiries.
//!
//! Wraps the `lettre` async SMTP transport. Configuration comes from the
//! environment; without `SMTP_HOST` the mailer runs in log-only mode and
//! every send is recorded as a log line instead of a delivery. Sends are
//! best-effort throughout: the service logs failures and moves on.

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for confirmation email failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// MailerConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@aiimpactmedia.local";

/// SMTP settings for the confirmation mailer.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl MailerConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that delivery
    /// is not configured and the mailer should run log-only.
    ///
    /// | Variable        | Required | Default                         |
    /// |-----------------|----------|---------------------------------|
    /// | `SMTP_HOST`     | yes      | —                               |
    /// | `SMTP_PORT`     | no       | `587`                           |
    /// | `SMTP_FROM`     | no       | `noreply@aiimpactmedia.local`   |
    /// | `SMTP_USER`     | no       | —                               |
    /// | `SMTP_PASSWORD` | no       | —                               |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// What a confirmation acknowledges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationKind {
    Casting,
    Sponsor,
}

impl ConfirmationKind {
    pub fn subject(&self) -> &'static str {
        match self {
            ConfirmationKind::Casting => "Casting Confirmation",
            ConfirmationKind::Sponsor => "Sponsorship Received",
        }
    }

    fn body(&self, name: &str) -> String {
        match self {
            ConfirmationKind::Casting => format!(
                "Hi {name},\n\nYour casting submission has been received. \
                 Our team will review your application and be in touch.\n\n\
                 AI Impact Media"
            ),
            ConfirmationKind::Sponsor => format!(
                "Hi {name},\n\nYour sponsorship inquiry has been received. \
                 We will get back to you shortly.\n\n\
                 AI Impact Media"
            ),
        }
    }
}

/// Sends confirmation emails, or logs them when SMTP is not configured.
pub struct Mailer {
    config: Option<MailerConfig>,
}

impl Mailer {
    pub fn new(config: Option<MailerConfig>) -> Self {
        Self { config }
    }

    /// Build the mailer from the environment. Logs once when running
    /// log-only.
    pub fn from_env() -> Self {
        let config = MailerConfig::from_env();
        if config.is_none() {
            tracing::info!("SMTP_HOST not set, confirmation emails will only be logged");
        }
        Self::new(config)
    }

    /// Whether a real SMTP transport is configured.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Send a confirmation to `to_email`, addressing the recipient by
    /// `name`. Log-only mode records the send and returns `Ok`.
    pub async fn send_confirmation(
        &self,
        to_email: &str,
        name: &str,
        kind: ConfirmationKind,
    ) -> Result<(), MailError> {
        let Some(config) = &self.config else {
            tracing::info!(
                to = to_email,
                subject = kind.subject(),
                "Confirmation email logged (no SMTP configured)"
            );
            return Ok(());
        };

        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let email = Message::builder()
            .from(config.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(kind.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(kind.body(name))
            .map_err(|e| MailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = to_email, subject = kind.subject(), "Confirmation email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        // Ensure SMTP_HOST is not set in the test environment.
        std::env::remove_var("SMTP_HOST");
        assert!(MailerConfig::from_env().is_none());
    }

    #[test]
    fn subjects_match_confirmation_kind() {
        assert_eq!(ConfirmationKind::Casting.subject(), "Casting Confirmation");
        assert_eq!(ConfirmationKind::Sponsor.subject(), "Sponsorship Received");
    }

    #[test]
    fn body_addresses_recipient_by_name() {
        let body = ConfirmationKind::Casting.body("Ada");
        assert!(body.starts_with("Hi Ada,"));
        assert!(body.contains("AI Impact Media"));
    }

    #[tokio::test]
    async fn log_only_mailer_accepts_sends() {
        let mailer = Mailer::new(None);
        assert!(!mailer.is_configured());
        let result = mailer
            .send_confirmation("ada@example.com", "Ada", ConfirmationKind::Casting)
            .await;
        assert!(result.is_ok());
    }

    #[test]
    fn mail_error_display_build() {
        let err = MailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }
}
