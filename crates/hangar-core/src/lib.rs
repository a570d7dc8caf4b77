//! Infrastructure shared by the hangar crates: bounded filesystem
//! traversal, path resolution and cooperative cancellation.

mod cancel;
mod path;
mod recurse;

pub use cancel::{CancelToken, Cancelled};
pub use path::{
    expand_tilde, normalize_path, resolve_data_dir, resolve_shorthand, Error, Result,
};
pub use recurse::{Entry, Recurser};
