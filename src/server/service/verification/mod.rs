//! Verification code delivery over SMS or email.

pub mod code;

use crate::{
    model::notification::VerificationChannel,
    server::{
        error::{validation::ValidationError, AppError},
        service::{
            notification::{email::EmailSender, sms::SmsSender, Delivery},
            verification::code::VerificationCodeStore,
        },
        util::validate::{normalize_email, require_field},
    },
};

const EMAIL_SUBJECT: &str = "Seu código de verificação";

/// Result of sending a verification code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationDispatch {
    pub delivery: Delivery,
    /// The issued code, handed back so it can be shown when delivery was simulated.
    pub code: String,
}

pub struct VerificationService<'a> {
    codes: &'a VerificationCodeStore,
    email_sender: &'a EmailSender,
    sms_sender: &'a SmsSender,
}

impl<'a> VerificationService<'a> {
    pub fn new(
        codes: &'a VerificationCodeStore,
        email_sender: &'a EmailSender,
        sms_sender: &'a SmsSender,
    ) -> Self {
        Self {
            codes,
            email_sender,
            sms_sender,
        }
    }

    /// Issues a code for `destination` and sends it through `channel`.
    ///
    /// # Returns
    /// - `Ok(VerificationDispatch)` - Code issued; delivery may have been simulated
    /// - `Err(AppError::ValidationErr)` - Empty destination or malformed email address
    pub async fn send(
        &self,
        channel: VerificationChannel,
        destination: &str,
    ) -> Result<VerificationDispatch, AppError> {
        let destination = normalize_destination(channel, destination)?;
        let code = self.codes.issue(&destination).await;
        let message = format!(
            "Seu código de verificação é {}. Ele expira em 10 minutos.",
            code
        );

        let delivery = match channel {
            VerificationChannel::Sms => self.sms_sender.send(&destination, &message).await,
            VerificationChannel::Email => {
                self.email_sender
                    .send(&destination, EMAIL_SUBJECT, &message)
                    .await
            }
        };

        tracing::info!(
            ?channel,
            delivered = delivery.is_delivered(),
            "Verification code issued"
        );

        Ok(VerificationDispatch { delivery, code })
    }

    /// Consumes the pending code for `destination` if `code` matches.
    pub async fn confirm(&self, destination: &str, code: &str) -> Result<bool, AppError> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(ValidationError::MissingField("destination").into());
        }

        // Email destinations are stored lowercased; phone numbers are unaffected.
        let destination = destination.to_lowercase();

        Ok(self.codes.confirm(&destination, code).await)
    }
}

fn normalize_destination(
    channel: VerificationChannel,
    destination: &str,
) -> Result<String, ValidationError> {
    match channel {
        VerificationChannel::Email => normalize_email(destination),
        VerificationChannel::Sms => require_field("destination", destination),
    }
}
