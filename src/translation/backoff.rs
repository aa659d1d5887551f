//! Bounded exponential-backoff retry around a [`Translator`].

use async_trait::async_trait;
use std::time::Duration;

use super::{TranslateError, Translator};

/// Default number of attempts, the first one included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default wait before the first retry; doubles on every further retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// How many times to try and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Wait after a failed `attempt` (zero-based): `base_delay * 2^attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Sum of all waits when every attempt fails.
    pub fn worst_case_wait(&self) -> Duration {
        (0..self.max_attempts.saturating_sub(1))
            .map(|attempt| self.delay_for(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

/// Retries transient failures of the inner translator.
///
/// Attempts run strictly one after another on a deterministic schedule.
/// Non-transient errors are returned as they are; running out of attempts
/// yields [`TranslateError::Exhausted`].
pub struct BackoffTranslator<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: Translator> BackoffTranslator<T> {
    pub const fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

#[async_trait]
impl<T: Translator> Translator for BackoffTranslator<T> {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        let max_attempts = self.policy.max_attempts;
        let mut last_error = None;

        for attempt in 0..max_attempts {
            match self.inner.translate(text, target_language).await {
                Ok(translated) => return Ok(translated),
                Err(e) if e.is_transient() => {
                    if attempt + 1 < max_attempts {
                        let delay = self.policy.delay_for(attempt);
                        tracing::warn!(
                            attempt = attempt + 1,
                            max_attempts,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "translation failed, retrying"
                        );
                        tokio::time::sleep(delay).await;
                    }
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(TranslateError::Exhausted {
            attempts: max_attempts,
            last_error: Box::new(
                last_error.unwrap_or_else(|| TranslateError::Transient("no attempt made".into())),
            ),
        })
    }
}
