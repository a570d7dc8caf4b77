use std::fmt;

/// Parse failure for a `.sln` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionParseError {
    MissingHeader,
    MissingVersionInfo,
    Malformed(&'static str),
}

impl fmt::Display for SolutionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionParseError::MissingHeader => write!(f, "missing solution header"),
            SolutionParseError::MissingVersionInfo => write!(f, "missing version info"),
            SolutionParseError::Malformed(what) => write!(f, "malformed solution file: {}", what),
        }
    }
}

impl std::error::Error for SolutionParseError {}

/// A project entry inside a solution:
/// `Project("{KIND}") = "Name", "rel\path.csproj", "{ID}"`.
///
/// GUIDs are stored lowercase without braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionProject {
    pub kind: String,
    pub name: String,
    pub path: String,
    pub id: String,
}

/// The parts of a Visual Studio solution file the launcher cares about:
/// the two version header keys and the project table (whose kind GUIDs
/// gate the Rider handoff).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionFile {
    pub minimum_visual_studio_version: String,
    pub visual_studio_version: String,
    pub projects: Vec<SolutionProject>,
}

impl SolutionFile {
    pub fn parse(content: &str) -> Result<Self, SolutionParseError> {
        let mut lines = content.lines();

        if !lines
            .by_ref()
            .any(|line| line.starts_with("Microsoft Visual Studio Solution File"))
        {
            return Err(SolutionParseError::MissingHeader);
        }

        let mut visual_studio_version = None;
        let mut minimum_visual_studio_version = None;
        let mut projects = Vec::new();

        for line in lines {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            if let Some(value) = key_value(line, "VisualStudioVersion") {
                visual_studio_version.get_or_insert_with(|| value.to_string());
            } else if let Some(value) = key_value(line, "MinimumVisualStudioVersion") {
                minimum_visual_studio_version.get_or_insert_with(|| value.to_string());
            } else if let Some(rest) = line.strip_prefix("Project(") {
                projects.push(parse_project_line(rest)?);
            }
        }

        match (minimum_visual_studio_version, visual_studio_version) {
            (Some(minimum), Some(full)) => Ok(Self {
                minimum_visual_studio_version: minimum,
                visual_studio_version: full,
                projects,
            }),
            _ => Err(SolutionParseError::MissingVersionInfo),
        }
    }
}

fn key_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?.trim_start();
    rest.strip_prefix('=').map(str::trim)
}

/// `rest` is everything after `Project(`:
/// `"{KIND}") = "Name", "path", "{ID}"`.
fn parse_project_line(rest: &str) -> Result<SolutionProject, SolutionParseError> {
    let close = rest
        .find(')')
        .ok_or(SolutionParseError::Malformed("unterminated Project kind"))?;
    let kind_entries = parse_quoted_list(&rest[..close])?;
    let [kind] = kind_entries.as_slice() else {
        return Err(SolutionParseError::Malformed(
            "unexpected number of entries for Project kind",
        ));
    };
    let kind = parse_guid(kind)
        .ok_or(SolutionParseError::Malformed("invalid GUID for Project kind"))?;

    let after = rest[close + 1..].trim_start();
    let value = after
        .strip_prefix('=')
        .ok_or(SolutionParseError::Malformed("missing Project assignment"))?;
    let entries = parse_quoted_list(value)?;
    let [name, path, id] = entries.as_slice() else {
        return Err(SolutionParseError::Malformed(
            "unexpected number of entries for Project data",
        ));
    };
    let id = parse_guid(id).ok_or(SolutionParseError::Malformed("invalid GUID for Project"))?;

    Ok(SolutionProject {
        kind,
        name: name.clone(),
        path: path.clone(),
        id,
    })
}

/// Parse `"a", "b", "c"` into its entries.
fn parse_quoted_list(source: &str) -> Result<Vec<String>, SolutionParseError> {
    let mut entries = Vec::new();
    let mut rest = source.trim();
    while !rest.is_empty() {
        let Some(after_open) = rest.strip_prefix('"') else {
            return Err(SolutionParseError::Malformed("expected '\"'"));
        };
        let Some(close) = after_open.find('"') else {
            return Err(SolutionParseError::Malformed("expected closing '\"'"));
        };
        entries.push(after_open[..close].to_string());
        rest = after_open[close + 1..].trim_start();
        if let Some(after_comma) = rest.strip_prefix(',') {
            rest = after_comma.trim_start();
        } else if !rest.is_empty() {
            return Err(SolutionParseError::Malformed("expected ','"));
        }
    }
    Ok(entries)
}

/// Accepts `{8-4-4-4-12}` hex GUIDs, returns them lowercase without braces.
fn parse_guid(source: &str) -> Option<String> {
    let inner = source.strip_prefix('{')?.strip_suffix('}')?;
    let groups: Vec<&str> = inner.split('-').collect();
    let expected = [8usize, 4, 4, 4, 12];
    if groups.len() != expected.len() {
        return None;
    }
    for (group, len) in groups.iter().zip(expected) {
        if group.len() != len || !group.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
    }
    Some(inner.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
VisualStudioVersion = 17.2.32505.173
MinimumVisualStudioVersion = 10.0.40219.1
Project("{9A19103F-16F7-4668-BE54-9A1E7A4F7556}") = "App", "App\App.csproj", "{11111111-2222-3333-4444-555555555555}"
EndProject
Global
	GlobalSection(SolutionConfigurationPlatforms) = preSolution
		Debug|Any CPU = Debug|Any CPU
	EndGlobalSection
EndGlobal
"#;

    #[test]
    fn parses_versions_and_projects() {
        let solution = SolutionFile::parse(SAMPLE).unwrap();
        assert_eq!(solution.visual_studio_version, "17.2.32505.173");
        assert_eq!(solution.minimum_visual_studio_version, "10.0.40219.1");
        assert_eq!(solution.projects.len(), 1);
        let project = &solution.projects[0];
        assert_eq!(project.kind, "9a19103f-16f7-4668-be54-9a1e7a4f7556");
        assert_eq!(project.name, "App");
        assert_eq!(project.path, r"App\App.csproj");
    }

    #[test]
    fn missing_header_is_an_error() {
        assert_eq!(
            SolutionFile::parse("VisualStudioVersion = 17.0\n"),
            Err(SolutionParseError::MissingHeader)
        );
    }

    #[test]
    fn missing_version_keys_are_an_error() {
        let content = "Microsoft Visual Studio Solution File, Format Version 12.00\n";
        assert_eq!(
            SolutionFile::parse(content),
            Err(SolutionParseError::MissingVersionInfo)
        );
    }

    #[test]
    fn bad_project_guid_is_an_error() {
        let content = "Microsoft Visual Studio Solution File, Format Version 12.00\nVisualStudioVersion = 17.0\nMinimumVisualStudioVersion = 10.0\nProject(\"{nope}\") = \"A\", \"a\", \"{11111111-2222-3333-4444-555555555555}\"\n";
        assert!(matches!(
            SolutionFile::parse(content),
            Err(SolutionParseError::Malformed(_))
        ));
    }

    #[test]
    fn comment_lines_are_ignored() {
        let solution = SolutionFile::parse(SAMPLE).unwrap();
        // The "# Visual Studio Version 17" comment must not shadow the key.
        assert_eq!(solution.visual_studio_version, "17.2.32505.173");
    }
}
