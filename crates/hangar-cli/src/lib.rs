// NOTE: Command Organization Rationale
//
// Why namespaced subcommands plus single-letter aliases?
// - `folder` and `project` group the management operations the way users
//   think about them; `--help` stays navigable
// - The day-to-day verbs (scan, list, recent, launch) also exist as `s`,
//   `l`, `r`, `x` top-level aliases because a launcher lives or dies by
//   how fast the common path types

mod args;
mod commands;
mod handlers;

pub use args::{Cli, Commands, ConfigCommand, FolderCommand, ProjectCommand};
pub use commands::run;
