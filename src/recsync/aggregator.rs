//! # Use-Case Layer
//!
//! The aggregator is the single place where local storage and the remote meet.
//! It owns both collaborators, taken by constructor injection, and exposes the
//! three operations the presenter needs.
//!
//! ## What the Aggregator Does NOT Do
//!
//! - **Presentation**: it returns data structures, never formatted strings
//!   beyond the count summary the data model defines
//! - **Recovery**: store errors propagate unchanged; there is no retry and the
//!   remote is never reached after a local failure
//!
//! ## Generic Over Both Seams
//!
//! `Aggregator<S: RecordStore, R: RemoteApi>` pairs any store with any remote:
//! - Production: `Aggregator<MemoryStore, StubRemote<Stdout>>`
//! - Testing: a seeded store with a counting fake remote

use crate::error::Result;
use crate::model::{CombinedResult, PairedUpdateResult, PostResponse, Record};
use crate::remote::RemoteApi;
use crate::store::RecordStore;

pub struct Aggregator<S: RecordStore, R: RemoteApi> {
    store: S,
    remote: R,
}

impl<S: RecordStore, R: RemoteApi> Aggregator<S, R> {
    pub fn new(store: S, remote: R) -> Self {
        Self { store, remote }
    }

    /// Local records first, then whatever the remote returns. Recomputed on
    /// every call; nothing is cached.
    pub fn combine(&self) -> Result<CombinedResult> {
        let mut combined = self.store.get_all();
        let fetched = self.remote.fetch()?;
        combined.extend(fetched.data);

        let summary = format!("Combined data count: {}", combined.len());
        Ok(CombinedResult { combined, summary })
    }

    /// Post the current combined sequence back to the remote and return its
    /// acknowledgement unchanged.
    ///
    /// Fetching remote data only to re-post it alongside the local records is
    /// a quirk inherited from the system this demo models; it is preserved
    /// deliberately.
    pub fn synchronize(&self) -> Result<PostResponse> {
        let processed = self.combine()?;
        self.remote.post(&processed.combined)
    }

    /// Update the record at `index` locally, then push the same update to the
    /// remote using the index as the remote identifier. A local `OutOfRange`
    /// aborts before any remote call is made.
    pub fn update_both(&mut self, index: usize, record: Record) -> Result<PairedUpdateResult> {
        let local = self.store.update(index, record.clone())?;
        let remote = self.remote.update(index, &record)?;
        Ok(PairedUpdateResult { local, remote })
    }

    /// Direct store access for the driver, which seeds and mutates the store
    /// outside the paired-update path.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::buffer::Buffer;
    use crate::remote::fixtures::CountingRemote;
    use crate::remote::StubRemote;
    use crate::store::memory::{fixtures, MemoryStore};

    fn stub_aggregator(store: MemoryStore) -> Aggregator<MemoryStore, StubRemote<Buffer>> {
        Aggregator::new(store, StubRemote::new(Buffer::new()))
    }

    #[test]
    fn combine_puts_local_records_first() {
        let aggregator = stub_aggregator(fixtures::seeded());
        let result = aggregator.combine().unwrap();

        assert_eq!(
            result.combined,
            vec![
                "record1",
                "record2",
                "record3",
                "api_record1",
                "api_record2"
            ]
        );
        assert_eq!(result.summary, "Combined data count: 5");
    }

    #[test]
    fn combine_length_is_local_plus_remote() {
        let aggregator = stub_aggregator(MemoryStore::new());
        let result = aggregator.combine().unwrap();
        assert_eq!(result.combined, vec!["api_record1", "api_record2"]);
        assert_eq!(result.summary, "Combined data count: 2");
    }

    #[test]
    fn combine_is_idempotent_without_mutation() {
        let aggregator = stub_aggregator(fixtures::seeded());
        assert_eq!(aggregator.combine().unwrap(), aggregator.combine().unwrap());
    }

    #[test]
    fn combine_after_add_reflects_new_record() {
        let mut aggregator = stub_aggregator(fixtures::seeded());
        aggregator.store_mut().add("record4".into());

        let result = aggregator.combine().unwrap();
        assert_eq!(
            result.combined,
            vec![
                "record1",
                "record2",
                "record3",
                "record4",
                "api_record1",
                "api_record2"
            ]
        );
        assert_eq!(result.summary, "Combined data count: 6");
    }

    #[test]
    fn synchronize_posts_combined_payload_and_returns_ack() {
        let aggregator = Aggregator::new(fixtures::seeded(), CountingRemote::new());
        let response = aggregator.synchronize().unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.message, "Created");
        assert_eq!(aggregator.remote.fetches.get(), 1);
        assert_eq!(aggregator.remote.posts.get(), 1);
    }

    #[test]
    fn update_both_updates_locally_and_remotely() {
        let mut aggregator = Aggregator::new(fixtures::seeded(), CountingRemote::new());
        let result = aggregator.update_both(1, "updated_record2".into()).unwrap();

        assert_eq!(result.local, vec!["record1", "updated_record2", "record3"]);
        assert_eq!(result.remote.status, 200);
        assert_eq!(result.remote.message, "Updated");
        assert_eq!(aggregator.remote.updates.get(), 1);
    }

    #[test]
    fn update_both_out_of_range_never_reaches_remote() {
        let mut aggregator = Aggregator::new(fixtures::seeded(), CountingRemote::new());

        assert!(aggregator.update_both(99, "x".into()).is_err());
        assert_eq!(aggregator.remote.updates.get(), 0);
        assert_eq!(
            aggregator.store_mut().get_all(),
            vec!["record1", "record2", "record3"]
        );
    }
}
