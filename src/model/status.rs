//! Status update: the record posted to the dashboard endpoint.

use serde::Serialize;

/// A single progress report for the dashboard.
///
/// Serialized as `{"oumi": ..., "last_log": ...}`. The dashboard merges
/// these keys into its shared status map, so field names are part of the
/// wire format and must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    /// Short emoji-prefixed phase label.
    pub oumi: String,

    /// Free-text log line.
    pub last_log: String,
}

impl StatusUpdate {
    pub fn new(oumi: impl Into<String>, last_log: impl Into<String>) -> Self {
        Self {
            oumi: oumi.into(),
            last_log: last_log.into(),
        }
    }
}
