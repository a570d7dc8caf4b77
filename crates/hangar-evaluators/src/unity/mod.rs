pub mod loader;
pub mod version_file;

use crate::traits::{ProjectEvaluator, ProjectLoader, ScanKind};
use anyhow::Result;
use hangar_core::{normalize_path, CancelToken};
use hangar_types::{Config, EvaluatedProject};
use std::path::Path;

pub use loader::UnityLoader;
pub use version_file::{ProjectVersionFile, UnityVersion};

pub const UNITY_TAG: &str = "hangar_evaluators::UnityEvaluator";

/// Recognizes Unity project roots: directories carrying
/// `ProjectSettings/ProjectVersion.txt` with a parseable editor version.
// TODO consider probing Assets/ as a cheaper pre-check before reading the version file
pub struct UnityEvaluator;

impl ProjectEvaluator for UnityEvaluator {
    fn tag(&self) -> &'static str {
        UNITY_TAG
    }

    fn platform_name(&self) -> &'static str {
        "Unity"
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
        let version_path = ProjectVersionFile::locate(path);
        if !version_path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&version_path)?;
        Ok(ProjectVersionFile::parse(&content).map(|parsed| {
            EvaluatedProject::new(normalize_path(path), parsed.version.combined())
        }))
    }

    fn loader(&self) -> Box<dyn ProjectLoader> {
        Box::new(UnityLoader)
    }

    /// The stored tag is `version/revision`; users only care about the
    /// editor version.
    fn display_framework(&self, framework: &str) -> String {
        match UnityVersion::from_combined(framework) {
            Some(version) => version.editor_version,
            None => framework.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn evaluates_a_unity_project_root() {
        let temp = tempfile::tempdir().unwrap();
        let settings = temp.path().join("ProjectSettings");
        fs::create_dir_all(&settings).unwrap();
        fs::write(
            settings.join("ProjectVersion.txt"),
            "m_EditorVersionWithRevision: 2022.3.10f1 (ff3792e53c62)\n",
        )
        .unwrap();

        let evaluated = UnityEvaluator
            .evaluate(temp.path(), &Config::default(), &CancelToken::new())
            .unwrap()
            .expect("should match");
        assert_eq!(evaluated.framework, "2022.3.10f1/ff3792e53c62");
    }

    #[test]
    fn plain_directory_is_not_a_match() {
        let temp = tempfile::tempdir().unwrap();
        let evaluated = UnityEvaluator
            .evaluate(temp.path(), &Config::default(), &CancelToken::new())
            .unwrap();
        assert!(evaluated.is_none());
    }

    #[test]
    fn corrupt_version_file_is_not_a_match() {
        let temp = tempfile::tempdir().unwrap();
        let settings = temp.path().join("ProjectSettings");
        fs::create_dir_all(&settings).unwrap();
        fs::write(settings.join("ProjectVersion.txt"), "garbage").unwrap();

        let evaluated = UnityEvaluator
            .evaluate(temp.path(), &Config::default(), &CancelToken::new())
            .unwrap();
        assert!(evaluated.is_none());
    }

    #[test]
    fn display_framework_strips_the_revision() {
        assert_eq!(
            UnityEvaluator.display_framework("2022.3.10f1/ff3792e53c62"),
            "2022.3.10f1"
        );
        assert_eq!(UnityEvaluator.display_framework("weird"), "weird");
    }
}
