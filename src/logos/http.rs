//! Thin async HTTP client for logo providers.
//!
//! Not a browser and not a crawler: one GET per provider attempt, bounded
//! by a timeout, with no retries. A provider that fails simply yields to
//! the next one in the cascade.

use std::time::Duration;

use crate::error::ScoutResult;

/// Browser-like user agent; some logo CDNs refuse the reqwest default.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Outcome of a single fetch attempt.
#[derive(Debug, Clone)]
pub struct Fetched {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub bytes: Vec<u8>,
}

impl Fetched {
    /// True only for a definitive 200; redirects have already been followed
    /// or rejected by the client at this point.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// HTTP client shared by every provider in the cascade.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with a per-request timeout and a desktop user-agent.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform one GET and collect the whole body.
    pub async fn get_bytes(&self, url: &str) -> ScoutResult<Fetched> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await?.to_vec();
        Ok(Fetched { status, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_exactly_200() {
        let ok = Fetched {
            status: 200,
            bytes: vec![1, 2, 3],
        };
        let redirect = Fetched {
            status: 301,
            bytes: vec![],
        };
        let missing = Fetched {
            status: 404,
            bytes: vec![],
        };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!missing.is_success());
    }
}
