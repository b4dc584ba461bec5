//! Core model for capsule snapshots.
//!
//! This crate turns a parsed configuration into a snapshot plan:
//! - `model`: the Server -> User -> Calendar/Contacts hierarchy and archive paths
//! - `task`: deferred fetches and the `Fetcher` capability they run against
//! - `plan`: the ordered (path, task) list for one run
//! - `snapshot`: sequential execution of a plan into an `ArchiveSink`

pub mod error;
pub mod model;
pub mod plan;
pub mod snapshot;
pub mod task;
pub mod timestamp;

pub use error::{CapsuleError, CapsuleResult, TransferError};
pub use model::Hierarchy;
pub use plan::{Plan, PlanEntry};
pub use snapshot::{ArchiveSink, SnapshotStats, execute};
pub use task::{Fetcher, Task};
pub use timestamp::SnapshotTime;
