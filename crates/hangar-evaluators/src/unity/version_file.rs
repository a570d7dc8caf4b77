use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Location of the version file relative to a Unity project root.
pub const RELATIVE_PATH: &str = "ProjectSettings/ProjectVersion.txt";

static PROJECT_VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"m_EditorVersionWithRevision:\s*(?<EditorVersion>\S+)\s*\((?<Revision>\S+)\)")
        .expect("static regex")
});

/// Parsed `ProjectSettings/ProjectVersion.txt`.
///
/// Only the `m_EditorVersionWithRevision` element matters: it carries both
/// the editor version the project was last saved with and the build
/// revision hash needed for hub deep links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectVersionFile {
    pub version: UnityVersion,
}

impl ProjectVersionFile {
    /// Parse the version file content; `None` when the element is missing.
    pub fn parse(content: &str) -> Option<Self> {
        let captures = PROJECT_VERSION_RE.captures(content)?;
        Some(Self {
            version: UnityVersion {
                editor_version: captures["EditorVersion"].to_string(),
                revision: captures["Revision"].to_string(),
            },
        })
    }

    /// Path of the version file under `project_dir`.
    pub fn locate(project_dir: &Path) -> PathBuf {
        project_dir.join(RELATIVE_PATH)
    }
}

/// Editor version plus build revision, stored combined as the project's
/// framework tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnityVersion {
    pub editor_version: String,
    pub revision: String,
}

impl UnityVersion {
    pub fn combined(&self) -> String {
        format!("{}/{}", self.editor_version, self.revision)
    }

    /// Split a stored `version/revision` tag back apart (last `/` wins,
    /// editor versions never contain slashes but revisions are opaque).
    pub fn from_combined(combined: &str) -> Option<Self> {
        let (editor_version, revision) = combined.rsplit_once('/')?;
        Some(Self {
            editor_version: editor_version.to_string(),
            revision: revision.to_string(),
        })
    }
}
