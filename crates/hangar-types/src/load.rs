use std::fmt;
use std::io;

/// Outcome of asking a loader to open a project in its native tool.
///
/// Expected failure modes (missing tool, corrupt project file, unsupported
/// OS) are values, not errors: they carry a title, a message and zero or
/// more remediations the caller can offer to the user. Only unexpected I/O
/// or storage errors travel as `Err` on the loader call itself.
#[derive(Debug)]
pub enum LoadResult {
    /// The external tool was launched.
    Launched,
    /// The project could not be opened; details and recovery options inside.
    Failed(LoadFailure),
}

impl LoadResult {
    pub fn failure(
        title: impl Into<String>,
        message: impl Into<String>,
        remediations: Vec<Remediation>,
    ) -> Self {
        LoadResult::Failed(LoadFailure {
            title: title.into(),
            message: message.into(),
            remediations,
        })
    }

    /// Project files that should exist are gone.
    pub fn missing_files() -> Self {
        Self::failure("Missing Files", "Project is missing required files", vec![])
    }

    /// Project files exist but could not be parsed.
    pub fn invalid_project_file() -> Self {
        Self::failure(
            "Invalid Project File(s)",
            "Project file(s) could not be read.",
            vec![],
        )
    }

    pub fn is_launched(&self) -> bool {
        matches!(self, LoadResult::Launched)
    }
}

/// Structured description of a launch failure.
#[derive(Debug)]
pub struct LoadFailure {
    /// Short human-readable title, e.g. "No Valid Program Found".
    pub title: String,
    /// Longer explanation shown before the remediation list.
    pub message: String,
    /// Recovery actions, each independently invokable. May be empty.
    pub remediations: Vec<Remediation>,
}

/// A named, described recovery action offered after a load failure.
///
/// Actions are one-shot callbacks ("open the download page", "launch the
/// alternate editor") and are never retried automatically.
pub struct Remediation {
    pub short_name: String,
    pub description: String,
    action: Box<dyn Fn() -> io::Result<()> + Send + Sync>,
}

impl Remediation {
    pub fn new(
        short_name: impl Into<String>,
        description: impl Into<String>,
        action: impl Fn() -> io::Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            short_name: short_name.into(),
            description: description.into(),
            action: Box::new(action),
        }
    }

    pub fn invoke(&self) -> io::Result<()> {
        (self.action)()
    }
}

impl fmt::Debug for Remediation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Remediation")
            .field("short_name", &self.short_name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn remediation_invokes_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = hits.clone();
        let remediation = Remediation::new("Do thing", "Does the thing.", move || {
            hits2.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        remediation.invoke().unwrap();
        remediation.invoke().unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn canned_failures_have_no_remediations() {
        let LoadResult::Failed(fail) = LoadResult::missing_files() else {
            panic!("expected failure");
        };
        assert_eq!(fail.title, "Missing Files");
        assert!(fail.remediations.is_empty());
    }
}
