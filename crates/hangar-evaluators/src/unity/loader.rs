use crate::launch;
use crate::traits::{ProjectLoader, ProjectParse};
use crate::unity::version_file::{ProjectVersionFile, UnityVersion};
use anyhow::Result;
use hangar_types::{Config, LoadResult, ProjectHandle, Remediation};
use std::path::{Path, PathBuf};

/// Launches a Unity project in the editor version it was last saved with.
///
/// Unity projects are version-locked: opening with a different editor
/// triggers a reimport/upgrade, so only an exact version match is launched
/// automatically. Anything else becomes a remediation.
pub struct UnityLoader;

impl ProjectLoader for UnityLoader {
    fn try_load(&self, project: &ProjectHandle, config: &Config) -> Result<LoadResult> {
        let project_dir = Path::new(&project.full_path);
        let version = match parse_project(project_dir)?.into_load_result() {
            Ok(parsed) => parsed.version,
            Err(failure) => return Ok(failure),
        };

        if let Some(exe) = find_editor_executable(&version.editor_version, config) {
            launch::spawn_detached(&exe, ["-projectPath".as_ref(), project_dir.as_os_str()])?;
            return Ok(LoadResult::Launched);
        }

        Ok(LoadResult::failure(
            "Editor Not Installed",
            format!(
                "No installed Unity editor matches version {}.\n\nThe exact editor version a project was saved with is required to open it safely.",
                version.editor_version
            ),
            vec![install_exact_version_remediation(&version), get_unity_hub_remediation()],
        ))
    }
}

fn parse_project(project_dir: &Path) -> Result<ProjectParse<ProjectVersionFile>> {
    let version_path = ProjectVersionFile::locate(project_dir);
    if !version_path.is_file() {
        return Ok(ProjectParse::Missing);
    }
    let content = std::fs::read_to_string(&version_path)?;
    Ok(match ProjectVersionFile::parse(&content) {
        Some(parsed) => ProjectParse::Parsed(parsed),
        None => ProjectParse::Invalid,
    })
}

/// Unity Hub keeps editors in per-version folders; the folder name is the
/// exact editor version string. The `unity.editor.dir` option replaces the
/// platform default entirely.
fn editor_install_roots(config: &Config) -> Vec<PathBuf> {
    if let Some(custom) = config.str_option("unity.editor.dir") {
        return vec![PathBuf::from(custom)];
    }
    let mut roots = Vec::new();
    if cfg!(target_os = "windows") {
        roots.push(PathBuf::from(r"C:\Program Files\Unity\Hub\Editor"));
    } else if cfg!(target_os = "macos") {
        roots.push(PathBuf::from("/Applications/Unity/Hub/Editor"));
    } else if let Some(home) = dirs::home_dir() {
        roots.push(home.join("Unity/Hub/Editor"));
    }
    roots
}

fn find_editor_executable(editor_version: &str, config: &Config) -> Option<PathBuf> {
    for root in editor_install_roots(config) {
        let install = root.join(editor_version);
        let exe = if cfg!(target_os = "windows") {
            install.join("Editor").join("Unity.exe")
        } else if cfg!(target_os = "macos") {
            install.join("Unity.app/Contents/MacOS/Unity")
        } else {
            install.join("Editor/Unity")
        };
        if let Some(exe) = launch::if_file_exists(exe) {
            return Some(exe);
        }
    }
    None
}

fn install_exact_version_remediation(version: &UnityVersion) -> Remediation {
    // unityhub://<version>/<revision> opens the hub on the matching install page
    let deep_link = format!("unityhub://{}/{}", version.editor_version, version.revision);
    Remediation::new(
        format!("Install Unity {}", version.editor_version),
        format!(
            "Open Unity Hub on the install page for editor version {} (requires Unity Hub).",
            version.editor_version
        ),
        move || launch::open_url(&deep_link),
    )
}

fn get_unity_hub_remediation() -> Remediation {
    launch::open_url_remediation(
        "Get Unity Hub",
        "Install Unity Hub from Unity Technologies, the manager for Unity editor installations.\nhttps://unity.com/download",
        "https://unity.com/download",
    )
}
