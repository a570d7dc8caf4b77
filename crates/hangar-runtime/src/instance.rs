use crate::ops::now_timestamp;
use crate::ops::recents::push_recent;
use crate::ops::sync::{sync_directory, SyncProgress, SyncReport};
use anyhow::{anyhow, Result};
use hangar_core::{normalize_path, resolve_shorthand, CancelToken};
use hangar_evaluators::ProjectEvaluator;
use hangar_index::{Database, DirectoryRecord, Upsert};
use hangar_types::{Config, EvaluatorTag, LoadResult, ProjectHandle};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// The launcher façade: owns the store, the configuration and the active
/// evaluator set, and exposes every operation the command surface needs.
///
/// A mutex around the database serializes mutations; the engine itself
/// assumes at most one in-flight mutation per directory. Two *processes*
/// reconciling the same directory concurrently remain undefined behavior
/// (last writer wins on upserts, possible spurious deletions).
pub struct Instance {
    db: Mutex<Database>,
    config: Config,
    evaluators: Vec<Box<dyn ProjectEvaluator>>,
}

impl Instance {
    pub fn new(
        db: Database,
        config: Config,
        evaluators: Vec<Box<dyn ProjectEvaluator>>,
    ) -> Self {
        Self {
            db: Mutex::new(db),
            config,
            evaluators,
        }
    }

    /// Open the launcher against a data directory: `config.toml` and
    /// `hangar.db` inside it, evaluators from the registry filtered by the
    /// configuration's enable table.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let config = Config::load_from(&data_dir.join("config.toml"))?;
        let db = Database::open(&data_dir.join("hangar.db"))?;
        let evaluators = hangar_evaluators::create_all_evaluators()
            .into_iter()
            .filter(|evaluator| config.is_evaluator_enabled(evaluator.tag()))
            .collect();
        Ok(Self::new(db, config, evaluators))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn evaluators(&self) -> &[Box<dyn ProjectEvaluator>] {
        &self.evaluators
    }

    fn db(&self) -> Result<MutexGuard<'_, Database>> {
        self.db
            .lock()
            .map_err(|_| anyhow!("database lock poisoned"))
    }

    // --- directories ---

    pub fn add_directory(&self, full_path: &str) -> Result<Upsert> {
        self.db()?.upsert_directory(full_path, &now_timestamp())
    }

    pub fn remove_directory(&self, full_path: &str) -> Result<bool> {
        self.db()?.remove_directory(full_path)
    }

    pub fn clear_directories(&self) -> Result<usize> {
        self.db()?.clear_directories()
    }

    pub fn directories(&self) -> Result<Vec<DirectoryRecord>> {
        self.db()?.list_directories()
    }

    pub fn find_directory(&self, full_path: &str) -> Result<Option<DirectoryRecord>> {
        self.db()?.find_directory(full_path)
    }

    pub fn project_count(&self, directory_path: &str) -> Result<usize> {
        self.db()?.count_projects_in(directory_path)
    }

    // --- scanning ---

    /// Reconcile one registered directory. The database stays locked for
    /// the whole pass.
    pub fn sync_directory<F>(
        &self,
        directory_path: &str,
        cancel: &CancelToken,
        on_progress: F,
    ) -> Result<SyncReport>
    where
        F: FnMut(SyncProgress),
    {
        let mut db = self.db()?;
        sync_directory(
            &mut db,
            directory_path,
            &self.config,
            &self.evaluators,
            cancel,
            on_progress,
        )
    }

    /// Reconcile every registered directory in turn.
    pub fn sync_all<F>(&self, cancel: &CancelToken, mut on_progress: F) -> Result<Vec<(String, SyncReport)>>
    where
        F: FnMut(&str, SyncProgress),
    {
        let directories = self.directories()?;
        let mut reports = Vec::with_capacity(directories.len());
        for directory in directories {
            cancel.checkpoint()?;
            let report = self.sync_directory(&directory.full_path, cancel, |progress| {
                on_progress(&directory.full_path, progress)
            })?;
            reports.push((directory.full_path, report));
        }
        Ok(reports)
    }

    // --- projects ---

    pub fn projects(&self) -> Result<Vec<hangar_index::DirectoryProjectRecord>> {
        self.db()?.list_projects()
    }

    pub fn recents(&self) -> Result<Vec<hangar_index::RecentProjectRecord>> {
        self.db()?.list_recents()
    }

    /// Resolve a user-supplied key to a known project: stored nickname
    /// first, then the key as a full path, then
    /// `<directory-basename>/<subpath>` shorthand, then a cwd-relative
    /// path.
    pub fn find_project(&self, key: &str) -> Result<Option<ProjectHandle>> {
        let db = self.db()?;
        if let Some(record) = db.find_project_by_nickname(key)? {
            return Ok(Some((&record).into()));
        }
        if let Some(record) = db.find_project(key)? {
            return Ok(Some((&record).into()));
        }
        let roots: Vec<PathBuf> = db
            .list_directories()?
            .into_iter()
            .map(|d| PathBuf::from(d.full_path))
            .collect();
        if let Some(path) = resolve_shorthand(key, roots.iter().map(PathBuf::as_path))
            && let Some(record) = db.find_project(&path.to_string_lossy())?
        {
            return Ok(Some((&record).into()));
        }
        let normalized = normalize_path(Path::new(key));
        if let Some(record) = db.find_project(&normalized.to_string_lossy())? {
            return Ok(Some((&record).into()));
        }
        Ok(None)
    }

    /// Set or clear a nickname on the project at `path`.
    pub fn set_nickname(&self, path: &str, nickname: Option<&str>) -> Result<bool> {
        let db = self.db()?;
        let now = now_timestamp();
        if db.set_nickname(path, nickname, &now)? {
            return Ok(true);
        }
        let normalized = normalize_path(Path::new(path));
        db.set_nickname(&normalized.to_string_lossy(), nickname, &now)
    }

    // --- loading ---

    /// Resolve a stored evaluator tag to the live evaluator instance.
    /// Malformed tags are a format error; a well-formed tag whose
    /// evaluator is not active resolves to `None`.
    pub fn evaluator_for(&self, tag: &str) -> Result<Option<&dyn ProjectEvaluator>> {
        EvaluatorTag::parse(tag)?;
        Ok(self
            .evaluators
            .iter()
            .find(|evaluator| evaluator.tag() == tag)
            .map(|boxed| boxed.as_ref()))
    }

    /// Launch a project. Unresolvable evaluators become a structured
    /// failure, not an error: the record stays around for a future
    /// configuration that re-registers the evaluator.
    pub fn load(&self, project: &ProjectHandle) -> Result<LoadResult> {
        let Some(evaluator) = self.evaluator_for(&project.evaluator_tag)? else {
            return Ok(LoadResult::failure(
                "Indecipherable Project",
                format!(
                    "No active evaluator understands this project (recorded by \"{}\").",
                    project.evaluator_tag
                ),
                vec![],
            ));
        };
        evaluator.loader().try_load(project, &self.config)
    }

    /// Record that `project` was opened, then trim the recents list.
    pub fn push_recent(&self, project: &ProjectHandle) -> Result<()> {
        push_recent(&*self.db()?, &self.config, project)?;
        Ok(())
    }

    // --- display ---

    /// Total: unknown or malformed evaluator tags degrade to "unknown".
    pub fn platform_name(&self, project: &ProjectHandle) -> String {
        match self.evaluator_for(&project.evaluator_tag) {
            Ok(Some(evaluator)) => evaluator.platform_name().to_string(),
            _ => "unknown".to_string(),
        }
    }

    /// Total: falls back to the raw stored framework tag.
    pub fn display_framework(&self, project: &ProjectHandle) -> String {
        match self.evaluator_for(&project.evaluator_tag) {
            Ok(Some(evaluator)) => evaluator.display_framework(&project.framework),
            _ => project.framework.clone(),
        }
    }
}
