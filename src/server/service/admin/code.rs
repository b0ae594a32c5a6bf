//! One-time admin claim codes.
//!
//! With no admin in the database, startup issues a random code that lives in memory
//! for ten minutes. The first logged-in user to redeem it becomes an admin.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::{distr::Alphanumeric, Rng};
use tokio::sync::Mutex;

/// How long an issued code stays redeemable.
const CLAIM_CODE_TTL: Duration = Duration::from_secs(600);

const CLAIM_CODE_LENGTH: usize = 32;

struct ClaimCode {
    value: String,
    issued_at: Instant,
}

/// Holds the pending admin claim code, if any.
///
/// Clones share the same slot.
#[derive(Clone)]
pub struct AdminCodeService {
    slot: Arc<Mutex<Option<ClaimCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::with_ttl(CLAIM_CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            ttl,
        }
    }

    /// Issues a fresh code and returns it. A previously issued code stops working.
    pub async fn issue(&self) -> String {
        let value: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(CLAIM_CODE_LENGTH)
            .map(char::from)
            .collect();

        *self.slot.lock().await = Some(ClaimCode {
            value: value.clone(),
            issued_at: Instant::now(),
        });

        value
    }

    /// Redeems `input` against the pending code.
    ///
    /// Returns `true` only for a matching, unexpired code, which is then cleared.
    /// An expired code is cleared on sight; a wrong guess leaves a live code in place.
    pub async fn redeem(&self, input: &str) -> bool {
        let mut slot = self.slot.lock().await;

        match slot.as_ref() {
            Some(code) if code.issued_at.elapsed() >= self.ttl => {
                *slot = None;
                false
            }
            Some(code) if code.value == input => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    async fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .await
            .as_ref()
            .is_some_and(|code| code.issued_at.elapsed() < self.ttl)
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
