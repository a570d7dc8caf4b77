use anyhow::Result;
use hangar_evaluators::all_evaluator_metadata;
use hangar_runtime::Instance;

/// List the compiled-in evaluators with their registry tags (the keys of
/// the config's `[evaluators]` enable table) and current enable state.
pub fn list(instance: &Instance) -> Result<()> {
    for metadata in all_evaluator_metadata() {
        let state = if instance.config().is_evaluator_enabled(metadata.tag) {
            "enabled"
        } else {
            "disabled"
        };
        println!("{} [{}]", metadata.tag, state);
        println!("  {} - {}", metadata.platform, metadata.description);
    }
    Ok(())
}
