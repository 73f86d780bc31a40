//! Environment-based application configuration.
//!
//! Values are read once at startup, after `dotenvy` has loaded `.env`. Only
//! `DATABASE_URL` is required. Missing SMTP or SMS settings are not an error: the
//! matching sender then simulates deliveries.

use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMS_API_BASE_URL: &str = "https://api.twilio.com";
const DEFAULT_ADMIN_NAME: &str = "Administrador";

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Plain connection upgraded with STARTTLS.
    StartTls,
    /// TLS from the first byte (usually port 465).
    Tls,
    /// Unencrypted connection, for local relays only.
    Plain,
}

impl SmtpSecurity {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "starttls" => Ok(Self::StartTls),
            "tls" => Ok(Self::Tls),
            "plain" | "none" => Ok(Self::Plain),
            other => Err(ConfigError::InvalidEnvVar {
                name: "SMTP_SECURITY".to_string(),
                reason: format!("expected starttls, tls or plain, got {:?}", other),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub security: SmtpSecurity,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender mailbox, e.g. `Salão <contato@example.com>`.
    pub from: String,
}

/// Credentials for the Twilio-compatible SMS API.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sending phone number in E.164 format.
    pub from: String,
}

/// Account created at startup when the database has no admin yet.
#[derive(Debug, Clone)]
pub struct AdminSeedConfig {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    pub admin_seed: Option<AdminSeedConfig>,
    /// Inbox receiving contact form messages; falls back to the SMTP sender address.
    pub contact_email: Option<String>,

    pub smtp: Option<SmtpConfig>,
    pub sms: Option<SmsConfig>,
    pub sms_api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional_var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_address,
            admin_seed: admin_seed_from_env(),
            contact_email: optional_var("CONTACT_EMAIL"),
            smtp: smtp_from_env()?,
            sms: sms_from_env(),
            sms_api_base_url: optional_var("SMS_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SMS_API_BASE_URL.to_string()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn admin_seed_from_env() -> Option<AdminSeedConfig> {
    let email = optional_var("ADMIN_EMAIL")?;
    let password = optional_var("ADMIN_PASSWORD")?;

    Some(AdminSeedConfig {
        name: optional_var("ADMIN_NAME").unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
        email,
        password,
    })
}

fn smtp_from_env() -> Result<Option<SmtpConfig>, ConfigError> {
    let Some(host) = optional_var("SMTP_HOST") else {
        return Ok(None);
    };

    let port = match optional_var("SMTP_PORT") {
        Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
            name: "SMTP_PORT".to_string(),
            reason: e.to_string(),
        })?,
        None => DEFAULT_SMTP_PORT,
    };

    let security = match optional_var("SMTP_SECURITY") {
        Some(value) => SmtpSecurity::parse(&value)?,
        None => SmtpSecurity::StartTls,
    };

    let username = optional_var("SMTP_USERNAME");
    let from = optional_var("SMTP_FROM")
        .or_else(|| username.clone())
        .ok_or_else(|| ConfigError::MissingEnvVar("SMTP_FROM".to_string()))?;

    Ok(Some(SmtpConfig {
        host,
        port,
        security,
        username,
        password: optional_var("SMTP_PASSWORD"),
        from,
    }))
}

fn sms_from_env() -> Option<SmsConfig> {
    Some(SmsConfig {
        account_sid: optional_var("TWILIO_ACCOUNT_SID")?,
        auth_token: optional_var("TWILIO_AUTH_TOKEN")?,
        from: optional_var("TWILIO_FROM")?,
    })
}
