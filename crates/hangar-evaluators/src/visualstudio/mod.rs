pub mod loader;
pub mod solution_file;

use crate::traits::{ProjectEvaluator, ProjectLoader, ScanKind};
use anyhow::Result;
use hangar_core::{normalize_path, CancelToken};
use hangar_types::{Config, EvaluatedProject};
use std::path::Path;

pub use loader::VisualStudioLoader;
pub use solution_file::{SolutionFile, SolutionParseError, SolutionProject};

pub const VISUAL_STUDIO_TAG: &str = "hangar_evaluators::VisualStudioEvaluator";

/// Recognizes Visual Studio solutions: `.sln` files whose header and
/// version keys parse. The framework tag is
/// `<minimum-vs-version>/<vs-version>`.
pub struct VisualStudioEvaluator;

fn has_sln_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("sln"))
}

impl ProjectEvaluator for VisualStudioEvaluator {
    fn tag(&self) -> &'static str {
        VISUAL_STUDIO_TAG
    }

    fn platform_name(&self) -> &'static str {
        "Visual Studio"
    }

    fn scan_kind(&self) -> ScanKind {
        ScanKind::File
    }

    fn evaluate(
        &self,
        path: &Path,
        _config: &Config,
        _cancel: &CancelToken,
    ) -> Result<Option<EvaluatedProject>> {
        if !has_sln_extension(path) || !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        // A .sln that fails to parse is not a match, not an error.
        Ok(SolutionFile::parse(&content).ok().map(|solution| {
            let framework = format!(
                "{}/{}",
                solution.minimum_visual_studio_version, solution.visual_studio_version
            );
            EvaluatedProject::new(normalize_path(path), framework)
        }))
    }

    fn loader(&self) -> Box<dyn ProjectLoader> {
        Box::new(VisualStudioLoader)
    }

    /// Show the major component of the minimum Visual Studio version.
    fn display_framework(&self, framework: &str) -> String {
        let minimum = match framework.split_once('/') {
            Some((minimum, _)) => minimum,
            None => return framework.to_string(),
        };
        match minimum.split_once('.') {
            Some((major, _)) => major.to_string(),
            None => framework.to_string(),
        }
    }
}
