use hangar_types::ProjectHandle;

/// A root folder registered for scanning.
#[derive(Debug, Clone)]
pub struct DirectoryRecord {
    /// Absolute path, unique key.
    pub full_path: String,
    /// Last registration/update time (RFC 3339 timestamp).
    pub record_updated_at: String,
}

/// A project discovered under a registered directory.
///
/// `record_updated_at` doubles as the reconciliation epoch: every live row
/// carries the timestamp of the pass that last saw it, and rows stamped
/// with an older pass are deleted when the pass completes.
#[derive(Debug, Clone)]
pub struct DirectoryProjectRecord {
    pub full_path: String,
    pub directory_path: String,
    pub evaluator_tag: String,
    pub framework: String,
    pub nickname: Option<String>,
    pub record_updated_at: String,
}

/// A project the user actually opened, decoupled from the directory
/// records so it survives directory removal.
#[derive(Debug, Clone)]
pub struct RecentProjectRecord {
    pub full_path: String,
    pub evaluator_tag: String,
    pub framework: String,
    pub nickname: Option<String>,
    pub opened_at: String,
    pub record_updated_at: String,
}

/// One pending write from a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUpsert {
    pub full_path: String,
    pub evaluator_tag: String,
    pub framework: String,
}

/// What a keyed upsert did, stated explicitly rather than inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

impl From<&DirectoryProjectRecord> for ProjectHandle {
    fn from(record: &DirectoryProjectRecord) -> Self {
        ProjectHandle {
            full_path: record.full_path.clone(),
            evaluator_tag: record.evaluator_tag.clone(),
            framework: record.framework.clone(),
            nickname: record.nickname.clone(),
        }
    }
}

impl From<&RecentProjectRecord> for ProjectHandle {
    fn from(record: &RecentProjectRecord) -> Self {
        ProjectHandle {
            full_path: record.full_path.clone(),
            evaluator_tag: record.evaluator_tag.clone(),
            framework: record.framework.clone(),
            nickname: record.nickname.clone(),
        }
    }
}
