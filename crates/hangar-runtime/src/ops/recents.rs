use super::now_timestamp;
use anyhow::Result;
use hangar_index::{Database, Upsert};
use hangar_types::{Config, ProjectHandle};

/// Record that `project` was just opened.
///
/// Upsert-by-path: an entry already on the list moves to the head of
/// recency order without duplicating. Afterwards the list is trimmed to
/// `config.max_recent_projects`, evicting the oldest opened-time entries
/// first; a cap of zero (or below) retains nothing.
pub fn push_recent(db: &Database, config: &Config, project: &ProjectHandle) -> Result<Upsert> {
    let now = now_timestamp();
    let result = db.upsert_recent(
        &project.full_path,
        &project.evaluator_tag,
        &project.framework,
        project.nickname.as_deref(),
        &now,
    )?;
    db.evict_recents(config.max_recent_projects)?;
    Ok(result)
}
