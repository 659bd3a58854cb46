use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

/// Raw outcome of one GET, before any retry decision.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Single-request transport. The default `sleep` blocks the calling thread;
/// tests override it to observe backoff without waiting.
pub trait Transport {
    fn get(&mut self, url: &str) -> Result<HttpResponse>;

    fn sleep(&mut self, wait: Duration) {
        std::thread::sleep(wait);
    }
}

/// Transport over the shared blocking reqwest client.
pub struct HttpTransport {
    client: &'static Client,
}

impl HttpTransport {
    pub fn new(client: &'static Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&mut self, url: &str) -> Result<HttpResponse> {
        let resp = self.client.get(url).send().context("request failed")?;
        let status = resp.status().as_u16();
        let body = resp.text().context("failed reading body")?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempt budget, rate-limit hits included.
    pub max_retries: u32,
    pub retry_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_wait: Duration::from_secs(5),
        }
    }
}

/// Fetch one JSON resource with bounded retry.
///
/// - 200: deserialize and return the document. A body that fails to
///   deserialize counts as a transient error and is retried.
/// - 429: wait out the backoff and retry, consuming one attempt.
/// - any other status: definitive failure, no retry.
/// - transport error: transient, retried while attempts remain.
///
/// Returns `None` once the budget is exhausted or a definitive failure is
/// seen; errors never propagate past this boundary. Every retry and terminal
/// failure is narrated through `report`.
pub fn fetch_json<T, D>(
    transport: &mut T,
    url: &str,
    context: &str,
    policy: &RetryPolicy,
    report: &mut dyn FnMut(String),
) -> Option<D>
where
    T: Transport + ?Sized,
    D: DeserializeOwned,
{
    let prefix = if context.is_empty() {
        String::new()
    } else {
        format!("[{context}] ")
    };
    let max = policy.max_retries.max(1);
    let wait_secs = policy.retry_wait.as_secs();

    for attempt in 1..=max {
        match transport.get(url) {
            Ok(resp) if resp.status == 200 => match serde_json::from_str::<D>(&resp.body) {
                Ok(doc) => return Some(doc),
                Err(err) => {
                    report(format!("{prefix}invalid response body: {err}"));
                    if attempt < max {
                        report(format!(
                            "{prefix}retrying in {wait_secs}s ({attempt}/{max})"
                        ));
                        transport.sleep(policy.retry_wait);
                    }
                }
            },
            Ok(resp) if resp.status == 429 => {
                report(format!(
                    "{prefix}rate limited, retrying in {wait_secs}s ({attempt}/{max})"
                ));
                transport.sleep(policy.retry_wait);
            }
            Ok(resp) => {
                report(format!("{prefix}HTTP error {}", resp.status));
                return None;
            }
            Err(err) => {
                report(format!("{prefix}request error: {err}"));
                if attempt < max {
                    report(format!(
                        "{prefix}retrying in {wait_secs}s ({attempt}/{max})"
                    ));
                    transport.sleep(policy.retry_wait);
                }
            }
        }
    }

    report(format!("{prefix}retry budget exhausted ({max} attempts)"));
    None
}
