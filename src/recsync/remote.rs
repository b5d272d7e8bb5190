//! Remote abstraction and the stub that stands in for a real network layer.
//!
//! The aggregator only knows [`RemoteApi`]. In this demo the single production
//! implementation is [`StubRemote`], which returns fixed responses and writes
//! what a real client would send to its console sink. A real HTTP client could
//! replace it without touching the aggregator, which is why every operation
//! returns `Result` even though the stub itself cannot fail on fetch or
//! update.

use crate::console::Console;
use crate::error::Result;
use crate::model::{FetchResponse, PostResponse, Record, UpdateResponse};

/// Abstract interface to the remote side.
pub trait RemoteApi {
    /// Retrieve the remote records.
    fn fetch(&self) -> Result<FetchResponse>;

    /// Send a full payload to the remote.
    fn post(&self, payload: &[Record]) -> Result<PostResponse>;

    /// Update one remote record. `record_id` is whatever identifier the
    /// remote understands; the stub accepts it unvalidated.
    fn update(&self, record_id: usize, data: &Record) -> Result<UpdateResponse>;
}

const FETCH_STATUS: u16 = 200;
const FETCH_RECORDS: [&str; 2] = ["api_record1", "api_record2"];
const POST_STATUS: u16 = 201;
const UPDATE_STATUS: u16 = 200;

/// Deterministic stand-in for a network API. No I/O beyond console lines.
pub struct StubRemote<C: Console> {
    console: C,
}

impl<C: Console> StubRemote<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> RemoteApi for StubRemote<C> {
    fn fetch(&self) -> Result<FetchResponse> {
        Ok(FetchResponse {
            status: FETCH_STATUS,
            data: FETCH_RECORDS.iter().map(|r| r.to_string()).collect(),
        })
    }

    fn post(&self, payload: &[Record]) -> Result<PostResponse> {
        let rendered = serde_json::to_string(payload)?;
        self.console
            .line(&format!("Posting data to network: {}", rendered));
        Ok(PostResponse {
            status: POST_STATUS,
            message: "Created".to_string(),
        })
    }

    fn update(&self, record_id: usize, data: &Record) -> Result<UpdateResponse> {
        self.console
            .line(&format!("Updating remote record {} with {}", record_id, data));
        Ok(UpdateResponse {
            status: UPDATE_STATUS,
            message: "Updated".to_string(),
        })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::Cell;

    /// Fake remote that counts calls, for asserting what the aggregator
    /// actually reached.
    #[derive(Default)]
    pub struct CountingRemote {
        pub fetches: Cell<usize>,
        pub posts: Cell<usize>,
        pub updates: Cell<usize>,
    }

    impl CountingRemote {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl RemoteApi for CountingRemote {
        fn fetch(&self) -> Result<FetchResponse> {
            self.fetches.set(self.fetches.get() + 1);
            Ok(FetchResponse {
                status: 200,
                data: vec!["fake_remote".to_string()],
            })
        }

        fn post(&self, _payload: &[Record]) -> Result<PostResponse> {
            self.posts.set(self.posts.get() + 1);
            Ok(PostResponse {
                status: 201,
                message: "Created".to_string(),
            })
        }

        fn update(&self, _record_id: usize, _data: &Record) -> Result<UpdateResponse> {
            self.updates.set(self.updates.get() + 1);
            Ok(UpdateResponse {
                status: 200,
                message: "Updated".to_string(),
            })
        }
    }
}
