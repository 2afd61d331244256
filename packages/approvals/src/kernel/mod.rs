// Kernel - service infrastructure and dependency wiring

pub mod deps;
pub mod scheduled_tasks;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServiceDeps;
pub use scheduled_tasks::{run_pending_review_sweep, start_scheduler};
pub use test_dependencies::{
    MemoryBlobStore, MemoryRecordStore, RecordingNotifier, SentEmail, StoredObject,
    TestDependencies,
};
pub use traits::{BaseBlobStore, BaseNotifier, BaseRecordStore};
