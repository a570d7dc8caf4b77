use hangar_types::Remediation;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Spawn an external tool detached from the launcher: no inherited stdio,
/// no wait. The launcher's job ends once the tool is running.
pub fn spawn_detached<I, S>(exe: &Path, args: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(exe)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

/// Open a URL (or deep link) with the platform handler.
pub fn open_url(url: &str) -> io::Result<()> {
    open::that_detached(url)
}

/// Remediation that opens a download/info page when invoked.
pub fn open_url_remediation(
    short_name: impl Into<String>,
    description: impl Into<String>,
    url: impl Into<String>,
) -> Remediation {
    let url = url.into();
    Remediation::new(short_name, description, move || open_url(&url))
}

/// `Some(path)` when the path points at an existing file.
pub fn if_file_exists(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}
