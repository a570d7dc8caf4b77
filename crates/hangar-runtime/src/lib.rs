//! The launcher engine: directory reconciliation, the recent-projects
//! ring buffer and the façade the CLI drives.

mod instance;
pub mod ops;

pub use instance::Instance;
pub use ops::recents::push_recent;
pub use ops::sync::{sync_directory, EvaluatorFailure, SyncProgress, SyncReport};
pub use ops::now_timestamp;
