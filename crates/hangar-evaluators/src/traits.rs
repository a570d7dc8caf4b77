use anyhow::Result;
use hangar_core::{CancelToken, Recurser};
use hangar_types::{Config, EvaluatedProject, LoadResult, ProjectHandle};
use std::path::Path;

/// Which traversal entries an evaluator inspects during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    /// Candidate projects are files (e.g. a solution file).
    File,
    /// Candidate projects are directories (e.g. a Unity project root).
    Folder,
}

/// Recognizes one kind of project and describes it.
///
/// "Not a match" is `Ok(None)`, a normal outcome; errors are reserved for
/// I/O problems while inspecting a path that does exist.
pub trait ProjectEvaluator: Send + Sync {
    /// Stable registry identity, `<module>::<type>`. Persisted in records.
    fn tag(&self) -> &'static str;

    /// Human-readable platform name, e.g. "Unity".
    fn platform_name(&self) -> &'static str;

    fn scan_kind(&self) -> ScanKind;

    /// Inspect exactly one path and decide whether it is a project root of
    /// this evaluator's kind.
    fn evaluate(
        &self,
        path: &Path,
        config: &Config,
        cancel: &CancelToken,
    ) -> Result<Option<EvaluatedProject>>;

    /// Walk `root` bounded by `config.max_depth` and evaluate every
    /// candidate of this evaluator's kind, in traversal order.
    fn find_projects(
        &self,
        root: &Path,
        config: &Config,
        cancel: &CancelToken,
    ) -> Result<Vec<EvaluatedProject>> {
        let want_files = self.scan_kind() == ScanKind::File;
        let mut found = Vec::new();
        for entry in Recurser::new([root.to_path_buf()], config.max_depth) {
            cancel.checkpoint()?;
            let entry = entry?;
            if entry.is_file != want_files {
                continue;
            }
            if let Some(evaluated) = self.evaluate(&entry.path, config, cancel)? {
                found.push(evaluated);
            }
        }
        Ok(found)
    }

    /// A stateless loader capable of launching any project this evaluator
    /// recognizes.
    fn loader(&self) -> Box<dyn ProjectLoader>;

    /// Render the stored framework tag into a short user-facing label.
    /// Total: falls back to the raw tag on any parse failure.
    fn display_framework(&self, framework: &str) -> String {
        framework.to_string()
    }
}

/// Launches a recognized project in its native external tool.
pub trait ProjectLoader {
    /// Expected failure modes (missing tool, corrupt project file,
    /// unsupported OS) come back as `Ok(LoadResult::Failed(..))` carrying
    /// remediations; only unexpected I/O errors are `Err`.
    fn try_load(&self, project: &ProjectHandle, config: &Config) -> Result<LoadResult>;
}

/// Outcome of re-parsing a project's defining file at load time.
#[derive(Debug)]
pub enum ProjectParse<T> {
    Parsed(T),
    /// Required files are gone (the record is stale or the tree moved).
    Missing,
    /// Files exist but could not be understood.
    Invalid,
}

impl<T> ProjectParse<T> {
    /// Map the two failure arms onto their canned load failures.
    pub fn into_load_result(self) -> std::result::Result<T, LoadResult> {
        match self {
            ProjectParse::Parsed(value) => Ok(value),
            ProjectParse::Missing => Err(LoadResult::missing_files()),
            ProjectParse::Invalid => Err(LoadResult::invalid_project_file()),
        }
    }
}
