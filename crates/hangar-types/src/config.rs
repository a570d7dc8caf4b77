use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Launcher configuration, persisted as `config.toml` in the data
/// directory.
///
/// The `[options]` table is an open-ended string-keyed store read by
/// individual loaders (e.g. `"visualstudio.rider.enable"`); the core passes
/// it through without interpreting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Traversal depth cap for directory scans; 0 scans only the roots.
    pub max_depth: usize,
    /// Recent-projects cap; zero or negative retains no recents.
    pub max_recent_projects: i64,
    /// Per-evaluator enable table keyed by evaluator tag. Evaluators absent
    /// from the table are enabled.
    pub evaluators: BTreeMap<String, bool>,
    /// Loader-specific options, uninterpreted by the core.
    pub options: BTreeMap<String, toml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 2,
            max_recent_projects: 10,
            evaluators: BTreeMap::new(),
            options: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("serialize: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn is_evaluator_enabled(&self, tag: &str) -> bool {
        self.evaluators.get(tag).copied().unwrap_or(true)
    }

    /// True when the option exists and reads as an affirmative flag.
    /// Booleans are taken as-is; strings follow the usual y/yes/"" rule.
    pub fn flag(&self, key: &str) -> bool {
        match self.options.get(key) {
            Some(toml::Value::Boolean(b)) => *b,
            Some(toml::Value::String(s)) => {
                matches!(s.to_lowercase().as_str(), "y" | "yes" | "")
            }
            _ => false,
        }
    }

    pub fn str_option(&self, key: &str) -> Option<String> {
        match self.options.get(key)? {
            toml::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn int_option(&self, key: &str) -> Option<i64> {
        match self.options.get(key)? {
            toml::Value::Integer(i) => Some(*i),
            toml::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}
