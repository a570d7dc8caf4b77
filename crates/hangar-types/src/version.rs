use std::cmp::Ordering;

/// Loose `major.minor.patch[-extra]` version used to rank installed tool
/// builds (e.g. JetBrains Toolbox channel folders). Not a full semver
/// implementation; pre-release ordering is plain string comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub extra: String,
}

impl ToolVersion {
    pub fn parse(value: &str) -> Option<Self> {
        let (value, extra) = match value.split_once('-') {
            Some((head, tail)) => (head, tail),
            None => (value, ""),
        };
        let mut parts = value.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            major,
            minor,
            patch,
            extra: extra.to_string(),
        })
    }
}

impl Ord for ToolVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.extra.cmp(&other.extra))
    }
}

impl PartialOrd for ToolVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
