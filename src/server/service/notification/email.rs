use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::{SmtpConfig, SmtpSecurity},
    error::config::ConfigError,
    service::notification::Delivery,
};

/// Sends plain text email over SMTP.
///
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct EmailSender {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Option<Mailbox>,
}

impl EmailSender {
    /// Builds a sender from the SMTP settings, or a simulating sender when there are none.
    ///
    /// # Returns
    /// - `Ok(EmailSender)` - Sender ready to use
    /// - `Err(ConfigError::InvalidEnvVar)` - Sender address or TLS setup is invalid
    pub fn new(config: Option<&SmtpConfig>) -> Result<Self, ConfigError> {
        let Some(config) = config else {
            return Ok(Self::disabled());
        };

        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "SMTP_FROM".to_string(),
                reason: e.to_string(),
            })?;

        let builder = match config.security {
            SmtpSecurity::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host),
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host),
            SmtpSecurity::Plain => Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(
                &config.host,
            )),
        }
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "SMTP_HOST".to_string(),
            reason: e.to_string(),
        })?;

        let mut builder = builder.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: Some(builder.build()),
            from: Some(from),
        })
    }

    /// Sender that simulates every delivery.
    pub fn disabled() -> Self {
        Self {
            transport: None,
            from: None,
        }
    }

    /// Address used as sender, if SMTP is configured.
    pub fn from_address(&self) -> Option<String> {
        self.from.as_ref().map(|from| from.email.to_string())
    }

    /// Sends a plain text email. Never fails; see `Delivery`.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Delivery {
        let (Some(transport), Some(from)) = (&self.transport, &self.from) else {
            tracing::warn!(to, subject, "SMTP is not configured, email not sent");
            return Delivery::simulated("SMTP is not configured");
        };

        let recipient = match to.parse::<Mailbox>() {
            Ok(recipient) => recipient,
            Err(e) => {
                tracing::warn!(to, "Invalid email recipient: {}", e);
                return Delivery::simulated(format!("Invalid recipient address: {}", e));
            }
        };

        let message = match Message::builder()
            .from(from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
        {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(to, "Failed to build email: {}", e);
                return Delivery::simulated(format!("Failed to build email: {}", e));
            }
        };

        match transport.send(message).await {
            Ok(_) => {
                tracing::info!(to, subject, "Email sent");
                Delivery::Delivered
            }
            Err(e) => {
                tracing::warn!(to, subject, "SMTP delivery failed: {}", e);
                Delivery::simulated(format!("SMTP delivery failed: {}", e))
            }
        }
    }
}
