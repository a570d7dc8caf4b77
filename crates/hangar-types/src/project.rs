use std::path::PathBuf;

/// Result of a single evaluator inspecting one filesystem path.
///
/// Transient: produced during scanning, consumed by the reconciliation
/// engine. Absence (an evaluator returning `None`) means "not this kind of
/// project" and is normal control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedProject {
    /// Absolute path of the project root (folder or project file).
    pub full_path: PathBuf,
    /// Evaluator-defined framework/version tag, free-form.
    pub framework: String,
}

impl EvaluatedProject {
    pub fn new(full_path: impl Into<PathBuf>, framework: impl Into<String>) -> Self {
        Self {
            full_path: full_path.into(),
            framework: framework.into(),
        }
    }
}

/// The evaluator-facing view of a persisted project record.
///
/// Both directory projects and recent projects reduce to this shape for
/// loading and display; loaders never see the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHandle {
    pub full_path: String,
    pub evaluator_tag: String,
    pub framework: String,
    pub nickname: Option<String>,
}
