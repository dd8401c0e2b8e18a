//! One-time admin code for bootstrapping the first admin account.
//!
//! When the server starts without any admin user, it generates a random
//! code, logs it, and keeps it in memory for ten minutes. Registering with
//! that code within the window grants the account admin privileges and
//! consumes the code. Nothing is persisted; a restart issues a fresh code.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// How long an issued code stays redeemable.
const ADMIN_CODE_TTL_SECONDS: u64 = 600;

/// Characters a code is drawn from.
const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                              abcdefghijklmnopqrstuvwxyz\
                              0123456789";

/// Length of a generated code.
const CODE_LENGTH: usize = 32;

/// A code handed out at startup, redeemable until `expires_at`.
#[derive(Clone)]
struct IssuedCode {
    value: String,
    expires_at: Instant,
}

impl IssuedCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory holder for the current admin setup code.
///
/// The service is cloned into application state; clones share the stored
/// code through the inner lock. At most one code is live at a time, and
/// redeeming it (or letting it expire) clears the slot.
#[derive(Clone)]
pub struct AdminCodeService {
    current: Arc<RwLock<Option<IssuedCode>>>,
}

impl AdminCodeService {
    /// Creates the service with no code issued.
    pub fn new() -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Issues a fresh random code, replacing any previous one.
    ///
    /// The code is a 32-character alphanumeric string valid for ten
    /// minutes. The caller is responsible for surfacing it to the
    /// operator, typically via the startup log.
    ///
    /// # Returns
    /// - `String` - The issued code
    pub async fn generate(&self) -> String {
        let value = Self::random_code();
        *self.current.write().await = Some(IssuedCode {
            value: value.clone(),
            expires_at: Instant::now() + Duration::from_secs(ADMIN_CODE_TTL_SECONDS),
        });

        value
    }

    /// Redeems a submitted code against the stored one.
    ///
    /// A match consumes the code so it cannot grant admin twice. An
    /// expired code is cleared and never matches; a mismatch leaves the
    /// stored code in place for the rightful holder.
    ///
    /// # Arguments
    /// - `input` - The code submitted during registration
    ///
    /// # Returns
    /// - `true` - Code matched and was consumed
    /// - `false` - No live code, expired, or mismatch
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut current = self.current.write().await;

        let Some(issued) = current.as_ref() else {
            return false;
        };

        if issued.is_expired() {
            *current = None;
            return false;
        }

        if issued.value == input {
            *current = None;
            return true;
        }

        false
    }

    /// Draws a 32-character code from the alphanumeric charset.
    fn random_code() -> String {
        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CODE_CHARSET.len());
                CODE_CHARSET[idx] as char
            })
            .collect()
    }

    /// Reports whether a live, unexpired code is stored, clearing an
    /// expired one as a side effect.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut current = self.current.write().await;

        match current.as_ref() {
            Some(issued) if issued.is_expired() => {
                *current = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Stores a code that is already past its expiry, to exercise the
    /// expiry path without waiting out the TTL.
    #[cfg(test)]
    pub async fn store_expired_code(&self, value: &str) {
        *self.current.write().await = Some(IssuedCode {
            value: value.to_string(),
            expires_at: Instant::now() - Duration::from_secs(1),
        });
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
