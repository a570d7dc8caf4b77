use crate::launch;
use crate::traits::{ProjectLoader, ProjectParse};
use crate::visualstudio::solution_file::SolutionFile;
use anyhow::Result;
use hangar_types::{Config, LoadResult, ProjectHandle, ToolVersion};
use std::path::{Path, PathBuf};

/// Project kind GUIDs Rider can open (classic and SDK-style .NET projects).
const RIDER_PROJECT_KINDS: [&str; 2] = [
    "9a19103f-16f7-4668-be54-9a1e7a4f7556",
    "fae04ec0-301f-11d3-bf4b-00c04f79efbc",
];

/// Launches a solution in the best available tool: Rider (behind
/// `visualstudio.rider.enable`), VS Code (behind
/// `visualstudio.vscode.enable`), then the platform's Visual Studio.
/// Every tool that is opted-in but absent contributes a remediation.
pub struct VisualStudioLoader;

impl ProjectLoader for VisualStudioLoader {
    fn try_load(&self, project: &ProjectHandle, config: &Config) -> Result<LoadResult> {
        let sln_path = Path::new(&project.full_path);
        let solution = match parse_solution(sln_path)?.into_load_result() {
            Ok(solution) => solution,
            Err(failure) => return Ok(failure),
        };
        let project_dir = sln_path.parent().unwrap_or(Path::new(""));

        let mut remediations = Vec::new();

        if config.flag("visualstudio.rider.enable")
            && solution
                .projects
                .iter()
                .any(|p| RIDER_PROJECT_KINDS.contains(&p.kind.as_str()))
        {
            if let Some(exe) = find_rider() {
                launch::spawn_detached(&exe, [sln_path.as_os_str()])?;
                return Ok(LoadResult::Launched);
            }
            remediations.push(launch::open_url_remediation(
                "Get JetBrains Rider",
                "Install JetBrains Rider, a feature-rich proprietary IDE primarily for .NET development.\nhttps://www.jetbrains.com/rider/",
                "https://www.jetbrains.com/rider/",
            ));
        }

        if config.flag("visualstudio.vscode.enable") {
            if let Some(exe) = find_vscode() {
                launch::spawn_detached(&exe, [project_dir.as_os_str()])?;
                return Ok(LoadResult::Launched);
            }
            remediations.push(launch::open_url_remediation(
                "Get Visual Studio Code",
                "Install Visual Studio Code from Microsoft Corporation, a lightweight proprietary code editor.\nhttps://code.visualstudio.com/",
                "https://code.visualstudio.com/",
            ));
        }

        if cfg!(target_os = "windows") {
            // TODO locate Visual Studio itself through vswhere
            remediations.push(launch::open_url_remediation(
                "Get Visual Studio",
                "Install Visual Studio from Microsoft Corporation, a feature-rich proprietary IDE.\nhttps://visualstudio.microsoft.com/vs/",
                "https://visualstudio.microsoft.com/vs/",
            ));
        } else if cfg!(target_os = "macos") {
            if let Some(exe) =
                launch::if_file_exists(PathBuf::from("/Applications/Visual Studio.app/Contents/MacOS/VisualStudio"))
            {
                launch::spawn_detached(&exe, [project_dir.as_os_str()])?;
                return Ok(LoadResult::Launched);
            }
            remediations.push(launch::open_url_remediation(
                "Get Visual Studio for Mac",
                "Install Visual Studio for Mac from Microsoft Corporation, a proprietary IDE primarily for .NET development.\nhttps://visualstudio.microsoft.com/vs/mac/",
                "https://visualstudio.microsoft.com/vs/mac/",
            ));
        }

        Ok(LoadResult::failure(
            "No Valid Program Found",
            "Failed to identify software capable of opening this Visual Studio solution file.\n\nA program such as Visual Studio or Rider must be installed.",
            remediations,
        ))
    }
}

fn parse_solution(sln_path: &Path) -> Result<ProjectParse<SolutionFile>> {
    if !sln_path.is_file() {
        return Ok(ProjectParse::Missing);
    }
    let content = std::fs::read_to_string(sln_path)?;
    Ok(match SolutionFile::parse(&content) {
        Ok(solution) => ProjectParse::Parsed(solution),
        Err(_) => ProjectParse::Invalid,
    })
}

/// JetBrains Toolbox keeps Rider builds under `.../Rider/ch-0/<version>`;
/// the newest loose-semver folder is the active install.
fn find_rider() -> Option<PathBuf> {
    let channel_dir = if cfg!(target_os = "macos") {
        dirs::home_dir()?.join("Library/Application Support/JetBrains/Toolbox/apps/Rider/ch-0")
    } else {
        dirs::data_local_dir()?.join("JetBrains/Toolbox/apps/Rider/ch-0")
    };
    let build = newest_versioned_subdir(&channel_dir)?;
    let exe = if cfg!(target_os = "macos") {
        build.join("Rider.app/Contents/MacOS/rider")
    } else if cfg!(target_os = "windows") {
        build.join("bin").join("rider64.exe")
    } else {
        build.join("bin/rider.sh")
    };
    launch::if_file_exists(exe)
}

fn newest_versioned_subdir(dir: &Path) -> Option<PathBuf> {
    std::fs::read_dir(dir)
        .ok()?
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let version = ToolVersion::parse(&name)?;
            Some((version, entry.path()))
        })
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, path)| path)
}

fn find_vscode() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        launch::if_file_exists(PathBuf::from(
            "/Applications/Visual Studio Code.app/Contents/MacOS/Electron",
        ))
    } else if cfg!(target_os = "windows") {
        let program_files = std::env::var_os("ProgramFiles")?;
        launch::if_file_exists(
            PathBuf::from(program_files)
                .join("Microsoft VS Code")
                .join("Code.exe"),
        )
    } else {
        ["/usr/bin/code", "/usr/share/code/code", "/snap/bin/code"]
            .into_iter()
            .find_map(|candidate| launch::if_file_exists(PathBuf::from(candidate)))
    }
}
