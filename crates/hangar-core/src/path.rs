use std::path::{Component, Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Resolve the launcher data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. HANGAR_DATA_DIR environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.hangar (fallback for systems without standard data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("HANGAR_DATA_DIR") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("hangar"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".hangar"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Normalize a path for use as a record key (resolve to absolute,
/// canonicalize if possible)
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

/// Resolve a shorthand project reference against a set of registered
/// directories.
///
/// A shorthand is `<directory-basename>/<relative-subpath>`: the first
/// component selects the registered directory whose final path component
/// matches, the remainder is joined underneath it. Absolute paths and
/// single-component keys are not shorthands.
pub fn resolve_shorthand<'a, I>(key: &str, roots: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = &'a Path>,
{
    let key_path = Path::new(key);
    if key_path.is_absolute() {
        return None;
    }
    let mut components = key_path.components();
    let Some(Component::Normal(alias)) = components.next() else {
        return None;
    };
    let rest = components.as_path();
    if rest.as_os_str().is_empty() {
        return None;
    }
    roots
        .into_iter()
        .find(|root| root.file_name() == Some(alias))
        .map(|root| root.join(rest))
}
