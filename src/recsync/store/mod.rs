//! # Storage Layer
//!
//! This module defines the storage abstraction for recsync. The
//! [`RecordStore`] trait lets the aggregator work against any backend.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Keep the use-case layer **decoupled** from how records are held
//! - Allow **future backends** (a file, a database) without changing core logic
//!
//! ## Implementations
//!
//! - [`memory::MemoryStore`]: the production store for this demo — an ordered,
//!   mutable in-memory sequence. Insertion order is significant and duplicates
//!   are permitted.
//!
//! ## Index Contract
//!
//! Every positional operation requires `0 <= index < len`. An out-of-range
//! index is an error, never silently clamped, and a failed operation leaves
//! the store exactly as it was.

use crate::error::Result;
use crate::model::Record;

pub mod memory;

/// Abstract interface for ordered record storage.
pub trait RecordStore {
    /// Snapshot of the current records, in insertion order.
    fn get_all(&self) -> Vec<Record>;

    /// Append a record; returns the full resulting sequence.
    fn add(&mut self, record: Record) -> Vec<Record>;

    /// Replace the record at `index`; returns the full updated sequence.
    /// Fails with `OutOfRange` when `index` is not in `[0, len)`.
    fn update(&mut self, index: usize, record: Record) -> Result<Vec<Record>>;

    /// Remove and return the record at `index`, shifting later records left.
    /// Fails with `OutOfRange` when `index` is not in `[0, len)`.
    fn delete(&mut self, index: usize) -> Result<Record>;
}
