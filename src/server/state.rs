//! Application state shared across all request handlers.
//!
//! The state is built once at startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database connection and HTTP client
//! are pools, the SMTP transport is reference counted and the verification code store
//! wraps its map in an `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::service::{
    notification::{email::EmailSender, sms::SmsSender},
    verification::code::VerificationCodeStore,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Sends contact messages and emailed verification codes.
    pub email_sender: EmailSender,

    /// Sends verification codes by SMS.
    pub sms_sender: SmsSender,

    /// Pending verification codes, kept in memory until confirmed or expired.
    pub verification_codes: VerificationCodeStore,

    /// Inbox receiving contact form messages.
    pub contact_inbox: Option<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        email_sender: EmailSender,
        sms_sender: SmsSender,
        verification_codes: VerificationCodeStore,
        contact_inbox: Option<String>,
    ) -> Self {
        Self {
            db,
            email_sender,
            sms_sender,
            verification_codes,
            contact_inbox,
        }
    }
}
