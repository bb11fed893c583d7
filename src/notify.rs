//! Status notifier: best-effort delivery of status updates.
//!
//! Each update is sent as a single JSON POST. Delivery is fire-and-forget:
//! connection failures, timeouts, and non-2xx responses are dropped so the
//! run always moves forward. The response body is never read.

use std::time::Duration;

use reqwest::{Url, blocking::Client};

use crate::model::StatusUpdate;

/// Dashboard endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/status";

/// Longest request timeout accepted from flags or config, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// User agent sent with every status update.
pub const USER_AGENT: &str = concat!("oumi-sim/", env!("CARGO_PKG_VERSION"));

/// Errors from building the client or posting an update.
///
/// Only [`HttpNotifier::new`] surfaces these to callers; [`Notify::notify`]
/// drops them.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("status update not delivered: {0}")]
    Request(#[from] reqwest::Error),
}

/// Something that accepts status updates.
///
/// No return value: callers proceed the same way whether or not the update
/// reached anyone.
pub trait Notify {
    fn notify(&self, update: &StatusUpdate);
}

/// Posts status updates to an HTTP endpoint.
#[derive(Debug)]
pub struct HttpNotifier {
    client: Client,
    endpoint: String,
}

impl HttpNotifier {
    /// Build a notifier for `endpoint`.
    ///
    /// `timeout` of `None` keeps the HTTP client's default.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, NotifyError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(NotifyError::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Post one update and report what happened.
    ///
    /// Any non-2xx status counts as a failure.
    pub fn try_post(&self, update: &StatusUpdate) -> Result<(), NotifyError> {
        self.client
            .post(&self.endpoint)
            .json(update)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

impl Notify for HttpNotifier {
    fn notify(&self, update: &StatusUpdate) {
        if let Err(e) = self.try_post(update) {
            log::debug!("dropped status update for {}: {e}", self.endpoint);
        }
    }
}

/// Validate an endpoint URL, returning it unchanged.
///
/// Accepts only absolute `http` or `https` URLs. Used as a clap value parser
/// and for config file values.
pub fn parse_endpoint(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid URL '{raw}': {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(format!(
            "unsupported scheme '{other}' in '{raw}', expected http or https"
        )),
    }
}
