use crate::server::{config::SmsConfig, service::notification::Delivery};

/// Sends SMS through a Twilio-compatible Messages API.
#[derive(Clone)]
pub struct SmsSender {
    http_client: reqwest::Client,
    credentials: Option<SmsConfig>,
    base_url: String,
}

impl SmsSender {
    /// Creates a sender. Without credentials every send is simulated.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `credentials` - Account SID, auth token and sending number
    /// - `base_url` - API root, e.g. `https://api.twilio.com`
    pub fn new(
        http_client: reqwest::Client,
        credentials: Option<SmsConfig>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Sends a text message. Never fails; see `Delivery`.
    pub async fn send(&self, to: &str, body: &str) -> Delivery {
        let Some(credentials) = &self.credentials else {
            tracing::warn!(to, "SMS provider is not configured, message not sent");
            return Delivery::simulated("SMS provider is not configured");
        };

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, credentials.account_sid
        );

        let result = self
            .http_client
            .post(&url)
            .basic_auth(&credentials.account_sid, Some(&credentials.auth_token))
            .form(&[("To", to), ("From", credentials.from.as_str()), ("Body", body)])
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!(to, "SMS sent");
                Delivery::Delivered
            }
            Ok(response) => {
                let status = response.status();
                tracing::warn!(to, %status, "SMS provider rejected the message");
                Delivery::simulated(format!("SMS provider returned {}", status))
            }
            Err(e) => {
                tracing::warn!(to, "SMS request failed: {}", e);
                Delivery::simulated(format!("SMS request failed: {}", e))
            }
        }
    }
}
