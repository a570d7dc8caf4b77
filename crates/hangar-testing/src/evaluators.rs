use anyhow::Result;
use hangar_core::CancelToken;
use hangar_evaluators::{ProjectEvaluator, ProjectLoader, ScanKind};
use hangar_types::{Config, EvaluatedProject, LoadResult, ProjectHandle};
use std::path::Path;

/// A project a [`StaticEvaluator`] pretends to find, relative to the
/// scanned root.
#[derive(Debug, Clone)]
pub struct StaticProject {
    pub rel_path: String,
    pub framework: String,
}

impl StaticProject {
    pub fn new(rel_path: impl Into<String>, framework: impl Into<String>) -> Self {
        Self {
            rel_path: rel_path.into(),
            framework: framework.into(),
        }
    }
}

/// What the scripted loader should do.
#[derive(Debug, Clone)]
pub enum LoaderScript {
    Launch,
    Fail { title: String },
}

/// Scripted evaluator for engine tests: yields a fixed set of projects
/// under whatever root it is asked to scan, optionally failing after the
/// first `fail_after` of them to exercise partial-scan semantics.
pub struct StaticEvaluator {
    pub tag: &'static str,
    pub platform: &'static str,
    pub projects: Vec<StaticProject>,
    pub fail_after: Option<usize>,
    pub loader_script: LoaderScript,
}

impl StaticEvaluator {
    pub fn new(tag: &'static str, projects: Vec<StaticProject>) -> Self {
        Self {
            tag,
            platform: "Static",
            projects,
            fail_after: None,
            loader_script: LoaderScript::Launch,
        }
    }

    /// Error out after yielding `count` projects.
    pub fn failing_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    pub fn with_loader_script(mut self, script: LoaderScript) -> Self {
        self.loader_script = script;
        self
    }
}

impl ProjectEvaluator for StaticEvaluator {
    fn tag(&self) -> &'static str {
        self.tag
    }

    fn platform_name(&self) -> &'static str {
        self.platform
    }

    fn scan_kind(&self) -> ScanKind {
        ScanKind::Folder
    }

    fn evaluate(
        &self,
        path: &Path,
        _config: &Config,
        _cancel: &CancelToken,
    ) -> Result<Option<EvaluatedProject>> {
        Ok(self
            .projects
            .iter()
            .find(|p| path.ends_with(&p.rel_path))
            .map(|p| EvaluatedProject::new(path, p.framework.clone())))
    }

    /// Scripted override: does not touch the filesystem at all.
    fn find_projects(
        &self,
        root: &Path,
        _config: &Config,
        cancel: &CancelToken,
    ) -> Result<Vec<EvaluatedProject>> {
        let mut found = Vec::new();
        for (index, project) in self.projects.iter().enumerate() {
            cancel.checkpoint()?;
            if self.fail_after == Some(index) {
                anyhow::bail!("scripted failure after {} projects", index);
            }
            found.push(EvaluatedProject::new(
                root.join(&project.rel_path),
                project.framework.clone(),
            ));
        }
        Ok(found)
    }

    fn loader(&self) -> Box<dyn ProjectLoader> {
        Box::new(StaticLoader {
            script: self.loader_script.clone(),
        })
    }

    fn display_framework(&self, framework: &str) -> String {
        format!("static {}", framework)
    }
}

struct StaticLoader {
    script: LoaderScript,
}

impl ProjectLoader for StaticLoader {
    fn try_load(&self, _project: &ProjectHandle, _config: &Config) -> Result<LoadResult> {
        Ok(match &self.script {
            LoaderScript::Launch => LoadResult::Launched,
            LoaderScript::Fail { title } => {
                LoadResult::failure(title.clone(), "scripted load failure", vec![])
            }
        })
    }
}
