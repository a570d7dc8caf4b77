use anyhow::Result;
use hangar_core::{normalize_path, CancelToken};
use hangar_index::Upsert;
use hangar_runtime::{Instance, SyncProgress, SyncReport};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn add(
    instance: &Instance,
    cancel: &CancelToken,
    verbose: bool,
    paths: &[String],
) -> Result<()> {
    for path in paths {
        let full_path = normalize_path(Path::new(path));
        if !full_path.is_dir() {
            println!("Directory \"{}\" does not exist", full_path.display());
            continue;
        }
        let key = full_path.to_string_lossy().into_owned();
        match instance.add_directory(&key)? {
            Upsert::Created => {
                println!("Directory \"{}\" added", key);
                let report = instance.sync_directory(&key, cancel, progress_printer(verbose))?;
                print_report(&key, &report);
            }
            Upsert::Updated => println!("Directory \"{}\" already registered", key),
        }
    }
    Ok(())
}

pub fn list(instance: &Instance, total: bool) -> Result<()> {
    for directory in instance.directories()? {
        if total {
            let count = instance.project_count(&directory.full_path)?;
            println!("{} ({} projects)", directory.full_path, count);
        } else {
            println!("{}", directory.full_path);
        }
    }
    Ok(())
}

pub fn remove(instance: &Instance, paths: &[String]) -> Result<()> {
    for path in paths {
        let key = normalize_path(Path::new(path)).to_string_lossy().into_owned();
        let removed = instance.remove_directory(&key)?;
        println!(
            "Directory \"{}\" {}",
            key,
            if removed { "removed" } else { "not registered" }
        );
    }
    Ok(())
}

pub fn clear(instance: &Instance) -> Result<()> {
    let removed = instance.clear_directories()?;
    println!("Removed {} directories", removed);
    Ok(())
}

pub fn scan(
    instance: &Instance,
    cancel: &CancelToken,
    verbose: bool,
    paths: &[String],
) -> Result<()> {
    if paths.is_empty() {
        let mut printer = progress_printer(verbose);
        for (directory, report) in instance.sync_all(cancel, |_, progress| printer(progress))? {
            print_report(&directory, &report);
        }
        return Ok(());
    }

    for path in paths {
        let key = normalize_path(Path::new(path)).to_string_lossy().into_owned();
        if instance.find_directory(&key)?.is_none() {
            if verbose {
                println!("Directory \"{}\" not registered", key);
            }
            continue;
        }
        let report = instance.sync_directory(&key, cancel, progress_printer(verbose))?;
        print_report(&key, &report);
    }
    Ok(())
}

fn progress_printer(verbose: bool) -> impl FnMut(SyncProgress) {
    move |progress| {
        if !verbose {
            return;
        }
        match progress {
            SyncProgress::EvaluatorScanning { tag } => println!("Scanning with {}", tag),
            SyncProgress::EvaluatorFinished { tag, found } => {
                println!("{} found {} projects", tag, found)
            }
            SyncProgress::EvaluatorFailed { .. } | SyncProgress::Committed { .. } => {}
        }
    }
}

fn print_report(directory: &str, report: &SyncReport) {
    println!(
        "Scanned \"{}\": {} added, {} updated, {} removed",
        directory, report.created, report.updated, report.removed
    );
    for failure in &report.failures {
        let prefix = if std::io::stderr().is_terminal() {
            "Warning:".yellow().to_string()
        } else {
            "Warning:".to_string()
        };
        eprintln!(
            "{} evaluator {} failed mid-scan: {}",
            prefix, failure.tag, failure.error
        );
    }
}
