use crate::error::{Result, ScanError};
use crate::result::{ProbeOutcome, ProbeResult, ProbeTarget};
use reqwest::Client;
use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Progress notifications emitted around every request
#[derive(Debug, Clone)]
pub enum ProbeEvent {
    Started {
        order: usize,
        total: usize,
        url: String,
        label: String,
    },
    Finished(ProbeResult),
}

pub type ProbeProgressCallback = Arc<dyn Fn(ProbeEvent) + Send + Sync>;

/// Resolve a target path against `http://{domain}`.
///
/// A domain typed with an explicit `http://` or `https://` scheme is used as
/// the base unchanged. Joining follows the usual URL rules: an absolute path
/// replaces the base path, a relative one is resolved against it.
pub fn build_probe_url(domain: &str, path: &str) -> Result<Url> {
    let domain = domain.trim();
    let base = Url::parse(&base_url_text(domain))
        .map_err(|e| ScanError::InvalidUrl(format!("'{}': {}", domain, e)))?;

    base.join(path)
        .map_err(|e| ScanError::InvalidUrl(format!("'{}' on '{}': {}", path, base, e)))
}

/// `http://{domain}`, or the domain itself when it already names a scheme
fn base_url_text(domain: &str) -> String {
    let lowered = domain.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        domain.to_string()
    } else {
        format!("http://{}", domain)
    }
}

/// Flatten an error and its sources into one line
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

pub struct Prober {
    client: Client,
    timeout: Duration,
    progress_callback: Option<ProbeProgressCallback>,
}

impl Prober {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("wafprobe/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            timeout,
            progress_callback: None,
        })
    }

    pub fn with_progress_callback(mut self, callback: ProbeProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Request every target in order, one at a time.
    ///
    /// Always yields exactly one result per target. Failures to reach the
    /// host are recorded in the result rather than returned.
    pub async fn probe(&self, domain: &str, targets: &[ProbeTarget]) -> Vec<ProbeResult> {
        info!("Starting probe of {} with {} targets", domain, targets.len());

        let total = targets.len();
        let mut results = Vec::with_capacity(total);

        for (index, target) in targets.iter().enumerate() {
            let order = index + 1;

            let (url, outcome) = match build_probe_url(domain, &target.path) {
                Ok(url) => {
                    let url_text = url.to_string();
                    self.notify(ProbeEvent::Started {
                        order,
                        total,
                        url: url_text.clone(),
                        label: target.label.clone(),
                    });
                    let outcome = self.fetch_status(url).await;
                    (url_text, outcome)
                }
                Err(e) => {
                    let url_text = format!("{}{}", base_url_text(domain.trim()), target.path);
                    self.notify(ProbeEvent::Started {
                        order,
                        total,
                        url: url_text.clone(),
                        label: target.label.clone(),
                    });
                    debug!("Skipping {}: {}", url_text, e);
                    (url_text, ProbeOutcome::Failed(e.to_string()))
                }
            };

            let result = ProbeResult::new(order, target.label.clone(), url, outcome);
            self.notify(ProbeEvent::Finished(result.clone()));
            results.push(result);
        }

        info!("Probe of {} finished: {} results", domain, results.len());
        results
    }

    async fn fetch_status(&self, url: Url) -> ProbeOutcome {
        debug!("GET {}", url);

        match self.client.get(url.clone()).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("{} -> {}", url, status);
                ProbeOutcome::Status(status)
            }
            Err(e) => {
                debug!("Request to {} failed: {}", url, e);
                ProbeOutcome::Failed(error_chain(&e))
            }
        }
    }

    fn notify(&self, event: ProbeEvent) {
        if let Some(ref callback) = self.progress_callback {
            callback(event);
        }
    }
}
