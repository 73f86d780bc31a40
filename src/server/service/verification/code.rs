//! In-memory store for one-time verification codes.
//!
//! Codes are six random digits kept per destination (phone number or email address)
//! with a ten minute TTL. A code is removed as soon as it is confirmed, found expired or
//! guessed wrong too many times, and sending a new code to the same destination replaces
//! the previous one.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default time-to-live for verification codes.
pub const VERIFICATION_CODE_TTL: Duration = Duration::from_secs(10 * 60);

/// Number of digits in a verification code.
const CODE_LENGTH: usize = 6;

/// Wrong guesses allowed before a pending code is discarded.
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

/// Stored code with its expiration timestamp.
#[derive(Clone)]
struct VerificationCode {
    code: String,
    expires_at: Instant,
    failed_attempts: u32,
}

impl VerificationCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Shared store of pending verification codes.
///
/// Cloning shares the same underlying map.
#[derive(Clone)]
pub struct VerificationCodeStore {
    codes: Arc<RwLock<HashMap<String, VerificationCode>>>,
    ttl: Duration,
}

impl VerificationCodeStore {
    /// Creates an empty store using the default ten minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(VERIFICATION_CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Generates a new code for `destination`, replacing any pending one.
    ///
    /// # Returns
    /// - `String` - The six digit code to send
    pub async fn issue(&self, destination: &str) -> String {
        let code = Self::generate_random_code();
        let entry = VerificationCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
            failed_attempts: 0,
        };

        let mut codes = self.codes.write().await;
        codes.retain(|_, stored| !stored.is_expired());
        codes.insert(destination.to_string(), entry);

        code
    }

    /// Checks `input` against the pending code for `destination`.
    ///
    /// A matching, unexpired code is consumed so it cannot be used twice. A wrong code
    /// leaves the pending code in place until `MAX_FAILED_ATTEMPTS` wrong guesses have
    /// been made, after which it is discarded. An expired code is discarded.
    ///
    /// # Returns
    /// - `true` - Code matched and has been consumed
    /// - `false` - Wrong code, expired or discarded code, or no code for this destination
    pub async fn confirm(&self, destination: &str, input: &str) -> bool {
        let mut codes = self.codes.write().await;

        let Some(stored) = codes.get_mut(destination) else {
            return false;
        };

        if stored.is_expired() {
            codes.remove(destination);
            return false;
        }

        if stored.code != input.trim() {
            stored.failed_attempts += 1;
            if stored.failed_attempts >= MAX_FAILED_ATTEMPTS {
                tracing::warn!("Too many wrong verification guesses, discarding code");
                codes.remove(destination);
            }
            return false;
        }

        codes.remove(destination);
        true
    }

    fn generate_random_code() -> String {
        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect()
    }
}

impl Default for VerificationCodeStore {
    fn default() -> Self {
        Self::new()
    }
}
