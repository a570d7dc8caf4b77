use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Create a minimal Unity project at `root/rel`: a `ProjectSettings/`
/// folder with a `ProjectVersion.txt` carrying the given version and
/// revision. Returns the project directory.
pub fn write_unity_project(
    root: &Path,
    rel: &str,
    editor_version: &str,
    revision: &str,
) -> io::Result<PathBuf> {
    let project_dir = root.join(rel);
    let settings = project_dir.join("ProjectSettings");
    fs::create_dir_all(&settings)?;
    fs::write(
        settings.join("ProjectVersion.txt"),
        format!(
            "m_EditorVersion: {ver}\nm_EditorVersionWithRevision: {ver} ({rev})\n",
            ver = editor_version,
            rev = revision
        ),
    )?;
    Ok(project_dir)
}

/// Create a minimal solution file at `root/rel` with the two version keys
/// and one SDK-style project entry. Returns the solution path.
pub fn write_solution(
    root: &Path,
    rel: &str,
    minimum_version: &str,
    version: &str,
) -> io::Result<PathBuf> {
    let sln_path = root.join(rel);
    if let Some(parent) = sln_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(
        &sln_path,
        format!(
            "\nMicrosoft Visual Studio Solution File, Format Version 12.00\n\
             # Visual Studio Version 17\n\
             VisualStudioVersion = {version}\n\
             MinimumVisualStudioVersion = {minimum_version}\n\
             Project(\"{{9A19103F-16F7-4668-BE54-9A1E7A4F7556}}\") = \"App\", \"App\\App.csproj\", \"{{11111111-2222-3333-4444-555555555555}}\"\n\
             EndProject\n\
             Global\nEndGlobal\n"
        ),
    )?;
    Ok(sln_path)
}
