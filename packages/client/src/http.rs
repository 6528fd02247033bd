//! HTTP client wrapper for the MusicBrainz web service.

use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use reqwest::blocking::{Client, Response};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Maximum number of attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Spaces requests at least `interval` apart.
///
/// Each caller reserves the next free slot under the lock and sleeps outside
/// it, so concurrent callers are served in order.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Block until the caller may send a request.
    pub fn wait(&self) {
        let delay = self.reserve(Instant::now());
        if !delay.is_zero() {
            tracing::debug!(delay_ms = delay.as_millis() as u64, "Rate limited");
            thread::sleep(delay);
        }
    }

    /// Reserve the next slot at or after `now`; returns how long to wait for it.
    fn reserve(&self, now: Instant) -> Duration {
        let mut next_slot = self
            .next_slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let slot = match *next_slot {
            Some(slot) if slot > now => slot,
            _ => now,
        };
        *next_slot = Some(slot + self.interval);
        slot - now
    }
}

/// Blocking HTTP client with rate limiting and retries.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    limiter: RateLimiter,
}

impl HttpClient {
    /// Create a client configured with timeout and user agent.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            limiter: RateLimiter::new(config.rate_limit_interval),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a GET request, retrying transient failures.
    ///
    /// Connection errors, timeouts and 5xx responses are retried up to
    /// `MAX_RETRIES` attempts with exponential backoff. A 4xx response fails
    /// immediately. The body is left unread so the caller can stream it.
    pub fn get(&self, url: &str) -> Result<Response> {
        let mut reason = String::new();

        for attempt in 1..=MAX_RETRIES {
            if attempt > 1 {
                let delay = backoff_delay(attempt);
                tracing::debug!(attempt, delay_ms = delay.as_millis() as u64, "Backing off");
                thread::sleep(delay);
            }
            match self.send_once(url, attempt)? {
                Attempt::Done(response) => return Ok(response),
                Attempt::Transient(why) => reason = why,
            }
        }

        Err(ClientError::RetriesExhausted {
            attempts: MAX_RETRIES,
            message: reason,
        })
    }

    /// One rate-limited request.
    fn send_once(&self, url: &str, attempt: u32) -> Result<Attempt> {
        self.limiter.wait();
        tracing::debug!(url, attempt, "GET");

        let mut request = self.client.get(url);
        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }

        let response = match request.send() {
            Ok(response) => response,
            Err(e) if e.is_connect() || e.is_timeout() => {
                tracing::warn!(error = %e, attempt, "Request failed, will retry");
                return Ok(Attempt::Transient(e.to_string()));
            }
            Err(e) => return Err(ClientError::Http(e)),
        };

        let status = response.status();
        if status.is_server_error() {
            tracing::warn!(%status, attempt, "Server error, will retry");
            return Ok(Attempt::Transient(format!("Server error: {status}")));
        }
        Ok(Attempt::Done(response.error_for_status()?))
    }
}

/// Result of a single request that did not fail permanently.
enum Attempt {
    Done(Response),
    Transient(String),
}

/// Wait before attempt `attempt` (1-based): 500ms, 1s, 2s, ...
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(RETRY_BASE_DELAY_MS << attempt.saturating_sub(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        assert!(HttpClient::new(ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_backoff_doubles() {
        assert_eq!(backoff_delay(2), Duration::from_millis(500));
        assert_eq!(backoff_delay(3), Duration::from_millis(1000));
        assert_eq!(backoff_delay(4), Duration::from_millis(2000));
    }

    #[test]
    fn test_first_request_is_immediate() {
        let limiter = RateLimiter::new(Duration::from_secs(1));
        assert_eq!(limiter.reserve(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_requests_are_spaced() {
        let limiter = RateLimiter::new(Duration::from_secs(1));
        let now = Instant::now();

        assert_eq!(limiter.reserve(now), Duration::ZERO);
        assert_eq!(limiter.reserve(now), Duration::from_secs(1));
        assert_eq!(limiter.reserve(now), Duration::from_secs(2));
    }

    #[test]
    fn test_idle_limiter_resets() {
        let limiter = RateLimiter::new(Duration::from_millis(100));
        let now = Instant::now();

        limiter.reserve(now);
        let later = now + Duration::from_secs(5);
        assert_eq!(limiter.reserve(later), Duration::ZERO);
    }

    #[test]
    fn test_zero_interval() {
        let limiter = RateLimiter::new(Duration::ZERO);
        let now = Instant::now();
        assert_eq!(limiter.reserve(now), Duration::ZERO);
        assert_eq!(limiter.reserve(now), Duration::ZERO);
    }
}
