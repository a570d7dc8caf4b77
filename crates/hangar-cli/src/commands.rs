use crate::args::{Cli, Commands, FolderCommand, ProjectCommand};
use crate::handlers;
use anyhow::Result;
use hangar_core::{resolve_data_dir, CancelToken};
use hangar_runtime::Instance;
use std::path::Path;

pub fn run(cli: Cli) -> Result<i32> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    match cli.command {
        // Config commands edit the file directly; no store or evaluators.
        Commands::Config { command } => {
            handlers::config::handle(&data_dir, command)?;
            Ok(0)
        }
        command => dispatch(&data_dir, cli.verbose, command),
    }
}

fn dispatch(data_dir: &Path, verbose: bool, command: Commands) -> Result<i32> {
    let instance = Instance::open(data_dir)?;
    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    // One shared token for the whole invocation; a second Ctrl-C falls
    // through to the default handler and kills the process.
    let _ = ctrlc::set_handler(move || handler_token.cancel());

    match command {
        Commands::Folder { command } => match command {
            FolderCommand::Add { paths } => {
                handlers::folder::add(&instance, &cancel, verbose, &paths)?
            }
            FolderCommand::List { total } => handlers::folder::list(&instance, total)?,
            FolderCommand::Remove { paths } => handlers::folder::remove(&instance, &paths)?,
            FolderCommand::Clear => handlers::folder::clear(&instance)?,
            FolderCommand::Scan { paths } => {
                handlers::folder::scan(&instance, &cancel, verbose, &paths)?
            }
        },
        Commands::S { paths } => handlers::folder::scan(&instance, &cancel, verbose, &paths)?,

        Commands::Project { command } => match command {
            ProjectCommand::List => handlers::project::list(&instance)?,
            ProjectCommand::Recent => handlers::project::recent(&instance)?,
            ProjectCommand::Launch {
                project,
                interactive,
            } => return handlers::project::launch(&instance, &project, interactive),
            ProjectCommand::Nick { project, nick } => {
                handlers::project::nick(&instance, &project, Some(&nick))?
            }
            ProjectCommand::Unnick { project } => {
                handlers::project::nick(&instance, &project, None)?
            }
        },
        Commands::Evaluators => handlers::evaluators::list(&instance)?,
        Commands::L => handlers::project::list(&instance)?,
        Commands::R => handlers::project::recent(&instance)?,
        Commands::X {
            project,
            interactive,
        } => return handlers::project::launch(&instance, &project, interactive),

        Commands::Config { .. } => unreachable!("handled by run"),
    }

    Ok(0)
}
