//! # Recsync Architecture
//!
//! Recsync is a small, deliberately layered demo: an in-memory record store, a
//! stubbed network remote, a use-case layer that combines the two, and a
//! presenter that formats results for the console. The point is the wiring,
//! not the workload.
//!
//! ## The Four Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presenter (presenter.rs, wired by main.rs)                 │
//! │  - Formats aggregator output, writes to a Console sink      │
//! │  - Holds no logic of its own                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Aggregator (aggregator.rs)                                 │
//! │  - Combines local records with remote fetch results         │
//! │  - Mediates sync and paired local/remote updates            │
//! └─────────────────────────────────────────────────────────────┘
//!                   │                        │
//!                   ▼                        ▼
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │  Storage (store/)        │  │  Remote (remote.rs)          │
//! │  - RecordStore trait     │  │  - RemoteApi trait           │
//! │  - MemoryStore impl      │  │  - StubRemote (deterministic)│
//! └──────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## Key Principle: Capabilities Are Injected
//!
//! Everything side-effecting sits behind a trait: storage behind
//! [`store::RecordStore`], the remote behind [`remote::RemoteApi`], and console
//! output behind [`console::Console`]. The aggregator and presenter never touch
//! stdout or any real I/O directly, so the same core runs unchanged under test
//! with an in-memory buffer sink and a fake remote.
//!
//! ## Error Model
//!
//! One domain error, `OutOfRange`, raised by store `update`/`delete` when an
//! index misses `[0, len)`. Nothing catches it: it propagates unchanged through
//! the aggregator and presenter to the binary, which reports and exits
//! non-zero.
//!
//! ## Module Overview
//!
//! - [`aggregator`]: Use-case layer combining store and remote
//! - [`console`]: Output sink abstraction
//! - [`error`]: Error types
//! - [`model`]: Core data types (`Record`, response and result structs)
//! - [`presenter`]: Display adapter
//! - [`remote`]: Remote abstraction and the stub implementation
//! - [`store`]: Storage abstraction and the in-memory implementation

pub mod aggregator;
pub mod console;
pub mod error;
pub mod model;
pub mod presenter;
pub mod remote;
pub mod store;
