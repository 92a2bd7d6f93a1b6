//! Single-document writes with bounded retry and exponential backoff.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::{Instant, sleep, timeout_at};
use tracing::{debug, warn};

use crate::core::DocumentStorage;
use crate::error::{BackendError, WriteError};
use crate::types::Product;

/// Retry and backoff settings for [`ResilientWriter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total number of attempts, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay after the first failed attempt.
    #[serde(with = "humantime_serde", default = "default_initial_delay")]
    pub initial_delay: Duration,

    /// Upper bound for any single backoff delay.
    #[serde(with = "humantime_serde", default = "default_max_delay")]
    pub max_delay: Duration,

    /// Factor applied to the delay after each further failure.
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Optional bound on a single attempt. An attempt that runs longer counts
    /// as failed.
    #[serde(default, with = "humantime_serde::option")]
    pub attempt_timeout: Option<Duration>,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay() -> Duration {
    Duration::from_millis(100)
}

fn default_max_delay() -> Duration {
    Duration::from_secs(5)
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay: default_initial_delay(),
            max_delay: default_max_delay(),
            backoff_multiplier: default_backoff_multiplier(),
            attempt_timeout: None,
        }
    }
}

impl RetryConfig {
    /// Sets the total number of attempts.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the initial backoff delay.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the backoff multiplier.
    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Sets the per-attempt timeout.
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = Some(timeout);
        self
    }

    /// Returns the delay to wait after failed attempt `attempt` (zero-based).
    ///
    /// `initial_delay * backoff_multiplier^attempt`, capped at `max_delay`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let secs = self.initial_delay.as_secs_f64() * self.backoff_multiplier.powi(exponent);
        if secs.is_finite() && secs < self.max_delay.as_secs_f64() {
            Duration::from_secs_f64(secs.max(0.0))
        } else {
            self.max_delay
        }
    }

    /// Validates the configuration and returns any errors.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.max_attempts == 0 {
            errors.push("max_attempts must be at least 1".to_string());
        }

        if !self.backoff_multiplier.is_finite() || self.backoff_multiplier < 1.0 {
            errors.push(format!(
                "backoff_multiplier must be a finite number >= 1.0, got {}",
                self.backoff_multiplier
            ));
        }

        if self.initial_delay > self.max_delay {
            errors.push(format!(
                "initial_delay ({}) exceeds max_delay ({})",
                humantime::format_duration(self.initial_delay),
                humantime::format_duration(self.max_delay)
            ));
        }

        if self.attempt_timeout == Some(Duration::ZERO) {
            errors.push("attempt_timeout must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Final result of one logical write.
#[derive(Debug)]
#[must_use]
pub enum WriteOutcome {
    /// The store acknowledged the document.
    Success {
        /// Attempts made, including the successful one.
        attempts: u32,
    },
    /// The write did not complete.
    Failure(WriteError),
}

impl WriteOutcome {
    /// Returns true if the write succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, WriteOutcome::Success { .. })
    }

    /// Number of store attempts made.
    pub fn attempts(&self) -> u32 {
        match self {
            WriteOutcome::Success { attempts } => *attempts,
            WriteOutcome::Failure(e) => e.attempts(),
        }
    }

    /// Converts into a `Result` carrying the attempt count on success.
    pub fn into_result(self) -> Result<u32, WriteError> {
        match self {
            WriteOutcome::Success { attempts } => Ok(attempts),
            WriteOutcome::Failure(e) => Err(e),
        }
    }
}

enum AttemptError {
    Backend(BackendError),
    DeadlineElapsed,
}

/// Writes documents to one index, retrying failed attempts.
///
/// Attempts are strictly sequential: each attempt completes before its
/// backoff sleep starts, and the sleep completes before the next attempt.
/// Every store failure is treated as transient. Dropping the future returned
/// by a write method cancels the in-flight attempt and any pending sleep.
#[derive(Debug)]
pub struct ResilientWriter<S> {
    storage: S,
    index: String,
    config: RetryConfig,
}

impl<S: DocumentStorage> ResilientWriter<S> {
    /// Creates a writer targeting `index`.
    pub fn new(storage: S, index: impl Into<String>, config: RetryConfig) -> Self {
        Self {
            storage,
            index: index.into(),
            config,
        }
    }

    /// Returns the target index.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Returns the retry configuration.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Returns the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Writes `product`, retrying up to `max_attempts` times in total.
    pub async fn write_with_retry(&self, product: &Product) -> WriteOutcome {
        self.write(product, None).await
    }

    /// Like [`write_with_retry`](Self::write_with_retry), but gives up with
    /// [`WriteError::DeadlineExceeded`] once `deadline` passes during an
    /// attempt, or when the next backoff would end after it.
    pub async fn write_with_retry_until(&self, product: &Product, deadline: Instant) -> WriteOutcome {
        self.write(product, Some(deadline)).await
    }

    async fn write(&self, product: &Product, deadline: Option<Instant>) -> WriteOutcome {
        let document = match product.to_document() {
            Ok(document) => document,
            Err(e) => return WriteOutcome::Failure(e),
        };

        let max_attempts = self.config.max_attempts.max(1);
        let mut last_error = None;
        let mut attempt = 0;

        loop {
            let attempts = attempt + 1;

            let error = match self.attempt(product.id(), document.clone(), deadline).await {
                Ok(()) => {
                    if attempts > 1 {
                        debug!(id = product.id(), attempts, "Write succeeded after retries");
                    }
                    return WriteOutcome::Success { attempts };
                }
                Err(AttemptError::DeadlineElapsed) => {
                    return WriteOutcome::Failure(WriteError::DeadlineExceeded {
                        attempts,
                        last_error,
                    });
                }
                Err(AttemptError::Backend(e)) => e,
            };

            if attempts >= max_attempts {
                return WriteOutcome::Failure(WriteError::RetriesExhausted {
                    attempts,
                    last_error: error,
                });
            }

            let delay = self.config.delay_for(attempt);
            if deadline.is_some_and(|d| Instant::now() + delay >= d) {
                return WriteOutcome::Failure(WriteError::DeadlineExceeded {
                    attempts,
                    last_error: Some(error),
                });
            }

            warn!(
                id = product.id(),
                attempt = attempts,
                max_attempts,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "Write attempt failed, retrying"
            );

            last_error = Some(error);
            sleep(delay).await;
            attempt += 1;
        }
    }

    async fn attempt(
        &self,
        id: &str,
        document: Value,
        deadline: Option<Instant>,
    ) -> Result<(), AttemptError> {
        let call = self.storage.index_document(&self.index, id, document);

        let attempt_deadline = self.config.attempt_timeout.map(|t| Instant::now() + t);
        let limit = match (attempt_deadline, deadline) {
            (Some(a), Some(d)) => Some(a.min(d)),
            (a, d) => a.or(d),
        };

        let Some(limit) = limit else {
            return call.await.map_err(AttemptError::Backend);
        };

        match timeout_at(limit, call).await {
            Ok(result) => result.map_err(AttemptError::Backend),
            Err(_) if deadline.is_some_and(|d| Instant::now() >= d) => {
                Err(AttemptError::DeadlineElapsed)
            }
            Err(_) => Err(AttemptError::Backend(BackendError::Unavailable {
                backend_name: self.storage.backend_name().to_string(),
                message: format!(
                    "attempt timed out after {}",
                    humantime::format_duration(self.config.attempt_timeout.unwrap_or_default())
                ),
            })),
        }
    }
}

/// Serde module for Duration with humantime format.
mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use std::time::Duration;

        pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match duration {
                Some(d) => super::serialize(d, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|s| humantime::parse_duration(&s).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_config() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.initial_delay, Duration::from_millis(100));
        assert_eq!(config.backoff_multiplier, 2.0);
        assert_eq!(config.attempt_timeout, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_delay_schedule() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_for(0), Duration::from_millis(100));
        assert_eq!(config.delay_for(1), Duration::from_millis(200));
        assert_eq!(config.delay_for(2), Duration::from_millis(400));
    }

    #[test]
    fn test_delay_is_capped() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_for(10), Duration::from_secs(5));
        assert_eq!(config.delay_for(u32::MAX), Duration::from_secs(5));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = RetryConfig::default()
            .with_max_attempts(0)
            .with_backoff_multiplier(0.5)
            .with_attempt_timeout(Duration::ZERO);

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_deserialize_humantime_durations() {
        let config: RetryConfig = serde_json::from_str(
            r#"{ "max_attempts": 5, "initial_delay": "250ms", "attempt_timeout": "2s" }"#,
        )
        .unwrap();

        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.initial_delay, Duration::from_millis(250));
        assert_eq!(config.max_delay, Duration::from_secs(5));
        assert_eq!(config.attempt_timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = WriteOutcome::Success { attempts: 2 };
        assert!(ok.is_success());
        assert_eq!(ok.attempts(), 2);
        assert_eq!(ok.into_result().unwrap(), 2);
    }
}
