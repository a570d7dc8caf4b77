use crate::error::{Error, Result};
use std::fmt;

/// Identity of an evaluator as persisted in project records.
///
/// The stored form is `<module>::<type>`, e.g.
/// `hangar_evaluators::UnityEvaluator`. Records written by an evaluator that
/// is later removed from the build keep their tag; resolution back to a live
/// evaluator goes through the registry, never through runtime type loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluatorTag {
    pub module: String,
    pub name: String,
}

impl EvaluatorTag {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Parse a stored tag string. Missing `::` is a format error, not a
    /// silent default.
    pub fn parse(tag: &str) -> Result<Self> {
        let Some((module, name)) = tag.split_once("::") else {
            return Err(Error::InvalidEvaluatorTag(tag.to_string()));
        };
        if module.is_empty() || name.is_empty() {
            return Err(Error::InvalidEvaluatorTag(tag.to_string()));
        }
        Ok(Self::new(module, name))
    }
}

impl fmt::Display for EvaluatorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}
