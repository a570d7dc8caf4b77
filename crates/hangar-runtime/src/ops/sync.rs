use super::now_timestamp;
use anyhow::Result;
use hangar_core::CancelToken;
use hangar_evaluators::ProjectEvaluator;
use hangar_index::{Database, ProjectUpsert};
use hangar_types::Config;
use std::path::Path;

/// Progress events emitted while reconciling one directory.
#[derive(Debug, Clone)]
pub enum SyncProgress {
    EvaluatorScanning {
        tag: String,
    },
    EvaluatorFinished {
        tag: String,
        found: usize,
    },
    EvaluatorFailed {
        tag: String,
        error: String,
    },
    Committed {
        created: usize,
        updated: usize,
        removed: usize,
    },
}

/// An evaluator that errored mid-scan. The pass continues without it.
#[derive(Debug, Clone)]
pub struct EvaluatorFailure {
    pub tag: String,
    pub error: String,
}

/// Result of one reconciliation pass over one directory.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub pass_epoch: String,
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
    pub failures: Vec<EvaluatorFailure>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Bring `directory_path`'s persisted project set in line with what the
/// evaluators currently find on disk.
///
/// One epoch timestamp covers the whole pass. Evaluators run sequentially
/// in the given order; when two claim the same path, the last writer wins.
/// Discovered projects are upserted in one transaction (nicknames survive,
/// everything else is re-owned), then every record of this directory not
/// stamped with the pass epoch is deleted in a second batch.
///
/// An evaluator failing mid-scan does not abort the pass: its partial
/// findings and the other evaluators' results still commit, and the
/// staleness sweep still runs. Sharp edge, kept from the launcher's
/// long-standing behavior: projects only known to the failed evaluator
/// were not re-stamped, so the sweep deletes them until a later clean pass
/// rediscovers them. The failure list in the report makes this visible to
/// callers.
///
/// Cancellation aborts before the first batch write, leaving the store
/// untouched.
pub fn sync_directory<F>(
    db: &mut Database,
    directory_path: &str,
    config: &Config,
    evaluators: &[Box<dyn ProjectEvaluator>],
    cancel: &CancelToken,
    mut on_progress: F,
) -> Result<SyncReport>
where
    F: FnMut(SyncProgress),
{
    let pass_epoch = now_timestamp();
    let root = Path::new(directory_path);
    let mut upserts: Vec<ProjectUpsert> = Vec::new();
    let mut failures = Vec::new();

    for evaluator in evaluators {
        cancel.checkpoint()?;
        let tag = evaluator.tag();
        on_progress(SyncProgress::EvaluatorScanning {
            tag: tag.to_string(),
        });
        match evaluator.find_projects(root, config, cancel) {
            Ok(found) => {
                on_progress(SyncProgress::EvaluatorFinished {
                    tag: tag.to_string(),
                    found: found.len(),
                });
                upserts.extend(found.into_iter().map(|project| ProjectUpsert {
                    full_path: project.full_path.to_string_lossy().into_owned(),
                    evaluator_tag: tag.to_string(),
                    framework: project.framework,
                }));
            }
            Err(error) => {
                // A cancelled traversal surfaces as an error too; that one
                // aborts the pass instead of being recorded.
                if cancel.is_cancelled() {
                    return Err(error);
                }
                on_progress(SyncProgress::EvaluatorFailed {
                    tag: tag.to_string(),
                    error: error.to_string(),
                });
                failures.push(EvaluatorFailure {
                    tag: tag.to_string(),
                    error: error.to_string(),
                });
            }
        }
    }

    cancel.checkpoint()?;
    let (created, updated) = db.apply_project_upserts(directory_path, &upserts, &pass_epoch)?;
    let removed = db.delete_stale_projects(directory_path, &pass_epoch)?;
    on_progress(SyncProgress::Committed {
        created,
        updated,
        removed,
    });

    Ok(SyncReport {
        pass_epoch,
        created,
        updated,
        removed,
        failures,
    })
}
