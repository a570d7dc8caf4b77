use crate::traits::ProjectEvaluator;
use crate::unity::{UnityEvaluator, UNITY_TAG};
use crate::visualstudio::{VisualStudioEvaluator, VISUAL_STUDIO_TAG};
use anyhow::Result;

/// Registry row for one compiled-in evaluator.
#[derive(Debug, Clone)]
pub struct EvaluatorMetadata {
    pub tag: &'static str,
    pub platform: &'static str,
    pub description: &'static str,
}

const EVALUATORS: &[EvaluatorMetadata] = &[
    EvaluatorMetadata {
        tag: UNITY_TAG,
        platform: "Unity",
        description: "Unity projects (ProjectSettings/ProjectVersion.txt)",
    },
    EvaluatorMetadata {
        tag: VISUAL_STUDIO_TAG,
        platform: "Visual Studio",
        description: "Visual Studio solutions (.sln)",
    },
];

pub fn all_evaluator_metadata() -> &'static [EvaluatorMetadata] {
    EVALUATORS
}

pub fn evaluator_tags() -> Vec<&'static str> {
    EVALUATORS.iter().map(|e| e.tag).collect()
}

/// Construct the evaluator a stored tag refers to. Records written by an
/// evaluator that is no longer compiled in fail here; callers degrade to
/// "no evaluator" instead of bubbling the error to users.
pub fn create_evaluator(tag: &str) -> Result<Box<dyn ProjectEvaluator>> {
    match tag {
        UNITY_TAG => Ok(Box::new(UnityEvaluator)),
        VISUAL_STUDIO_TAG => Ok(Box::new(VisualStudioEvaluator)),
        _ => anyhow::bail!("Unknown evaluator tag: {}", tag),
    }
}

pub fn create_all_evaluators() -> Vec<Box<dyn ProjectEvaluator>> {
    vec![Box::new(UnityEvaluator), Box::new(VisualStudioEvaluator)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangar_types::EvaluatorTag;

    #[test]
    fn registry_tags_resolve_to_evaluators() {
        for metadata in all_evaluator_metadata() {
            let evaluator = create_evaluator(metadata.tag).unwrap();
            assert_eq!(evaluator.tag(), metadata.tag);
            assert_eq!(evaluator.platform_name(), metadata.platform);
        }
    }

    #[test]
    fn registry_tags_are_well_formed() {
        for metadata in all_evaluator_metadata() {
            let parsed = EvaluatorTag::parse(metadata.tag).unwrap();
            assert_eq!(parsed.to_string(), metadata.tag);
        }
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert!(create_evaluator("hangar_evaluators::GoneEvaluator").is_err());
    }

    #[test]
    fn create_all_matches_the_metadata_table() {
        let evaluators = create_all_evaluators();
        assert_eq!(evaluators.len(), all_evaluator_metadata().len());
        for (evaluator, metadata) in evaluators.iter().zip(all_evaluator_metadata()) {
            assert_eq!(evaluator.tag(), metadata.tag);
        }
    }
}
