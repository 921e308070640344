//! Single-attempt liveness check used to exclude dead links before scraping.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Bounded HTTP reachability probe. Build one per batch run and share it by
/// reference across workers; the underlying client pools connections.
pub struct Probe {
    client: Client,
}

impl Probe {
    /// Construction is the only fallible step: a bad timeout or TLS setup is
    /// a configuration bug and surfaces to the caller.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building reachability probe client")?;
        Ok(Self { client })
    }

    /// One bounded GET, no retries. Reachable means status 200 exactly; any
    /// transport failure (timeout, DNS, connection refused) is unreachable,
    /// never an error.
    pub fn is_reachable(&self, url: &str) -> bool {
        match self.client.get(url).send() {
            Ok(resp) => resp.status() == StatusCode::OK,
            Err(_) => false,
        }
    }
}
