use serde::{Deserialize, Serialize};
use std::fmt;

/// A record is plain text; its only identity is its position in the store.
pub type Record = String;

/// Result of fetching from the remote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResponse {
    pub status: u16,
    pub data: Vec<Record>,
}

/// Acknowledgement of a remote post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub status: u16,
    pub message: String,
}

impl fmt::Display for PostResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

/// Acknowledgement of a remote record update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub status: u16,
    pub message: String,
}

impl fmt::Display for UpdateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

/// Local records followed by remote records, with a count summary.
/// Derived on every call, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedResult {
    pub combined: Vec<Record>,
    pub summary: String,
}

/// Outcome of updating a record locally and remotely in one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedUpdateResult {
    pub local: Vec<Record>,
    pub remote: UpdateResponse,
}
