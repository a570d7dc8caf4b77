// NOTE: Evaluator Architecture Rationale
//
// Why a closed set of variants (not runtime type loading)?
// - Persisted records identify their evaluator by a stable string tag
// - The registry maps tags to compiled-in constructors; a tag whose
//   evaluator is gone resolves to "no evaluator", never to a crash
// - Adding a platform means adding a module and one registry row, not
//   touching the dispatcher
//
// Why split evaluate (scan-time) from load (launch-time)?
// - Evaluation runs on every candidate path during a bulk directory scan
//   and must stay cheap: a file-exists probe plus a small parse
// - Loading probes installed external tools and spawns processes; doing
//   that during a scan would be absurdly expensive and side-effectful
//
// Why a file/folder scan split?
// - Solution discovery looks at files, Unity discovery at folders; walking
//   the other kind would evaluate every file in a tree for no reason

// Trait-based architecture (public API)
pub mod traits;

// Platform implementations
pub mod unity;
pub mod visualstudio;

// Evaluator registry
pub mod registry;

// External tool launch primitives
pub mod launch;

// Traits
pub use traits::{ProjectEvaluator, ProjectLoader, ProjectParse, ScanKind};

// Platform evaluators
pub use unity::{UnityEvaluator, UNITY_TAG};
pub use visualstudio::{VisualStudioEvaluator, VISUAL_STUDIO_TAG};

// Registry
pub use registry::{
    all_evaluator_metadata, create_all_evaluators, create_evaluator, evaluator_tags,
    EvaluatorMetadata,
};
