//! SQLite-backed record store for the launcher.
//!
//! Three record kinds live here: registered scan roots, the projects
//! discovered under them (cascade-deleted with their root), and the
//! independent recent-projects history. All keys are full paths; all
//! timestamps are RFC 3339 text, which keeps SQLite's lexicographic
//! ordering chronological.

mod db;
mod records;

pub use db::Database;
pub use records::{
    DirectoryProjectRecord, DirectoryRecord, ProjectUpsert, RecentProjectRecord, Upsert,
};
