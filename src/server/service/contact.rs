//! Contact form handling.

use crate::server::{
    error::{validation::ValidationError, AppError},
    service::notification::{email::EmailSender, Delivery},
    util::validate::{normalize_email, require_field},
};

/// Validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    /// Validates the raw form fields.
    ///
    /// # Returns
    /// - `Ok(ContactMessage)` - Trimmed fields with a normalized email address
    /// - `Err(ValidationError::MissingField)` - Name, email or message is blank
    /// - `Err(ValidationError::InvalidEmail)` - Email address is malformed
    pub fn parse(
        name: &str,
        email: &str,
        phone: Option<&str>,
        message: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_field("name", name)?,
            email: normalize_email(email)?,
            phone: phone
                .map(str::trim)
                .filter(|phone| !phone.is_empty())
                .map(str::to_string),
            message: require_field("message", message)?,
        })
    }

    fn subject(&self) -> String {
        format!("Nova mensagem de contato de {}", self.name)
    }

    fn body(&self) -> String {
        format!(
            "Nome: {}\nEmail: {}\nTelefone: {}\n\n{}",
            self.name,
            self.email,
            self.phone.as_deref().unwrap_or("-"),
            self.message
        )
    }
}

pub struct ContactService<'a> {
    email_sender: &'a EmailSender,
    inbox: Option<&'a str>,
}

impl<'a> ContactService<'a> {
    /// Creates the service. Messages go to `inbox`, or to the SMTP sender address when unset.
    pub fn new(email_sender: &'a EmailSender, inbox: Option<&'a str>) -> Self {
        Self {
            email_sender,
            inbox,
        }
    }

    /// Forwards a contact message to the salon inbox.
    ///
    /// Only validation can fail; delivery problems come back as `Delivery::Simulated`.
    pub async fn submit(&self, message: ContactMessage) -> Result<Delivery, AppError> {
        let inbox = self
            .inbox
            .map(str::to_string)
            .or_else(|| self.email_sender.from_address());

        let Some(inbox) = inbox else {
            tracing::warn!(from = %message.email, "No contact inbox configured, message not sent");
            return Ok(Delivery::simulated("No contact inbox configured"));
        };

        let delivery = self
            .email_sender
            .send(&inbox, &message.subject(), &message.body())
            .await;

        tracing::info!(
            from = %message.email,
            delivered = delivery.is_delivered(),
            "Contact message received"
        );

        Ok(delivery)
    }
}
