use anyhow::Result;
use hangar_runtime::Instance;
use hangar_types::{LoadFailure, LoadResult, ProjectHandle};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::Write;

pub fn list(instance: &Instance) -> Result<()> {
    for record in instance.projects()? {
        println!("{}", describe(instance, &(&record).into()));
    }
    Ok(())
}

pub fn recent(instance: &Instance) -> Result<()> {
    for record in instance.recents()? {
        println!("{}", describe(instance, &(&record).into()));
    }
    Ok(())
}

fn describe(instance: &Instance, project: &ProjectHandle) -> String {
    let mut line = String::new();
    if let Some(nick) = &project.nickname {
        line.push_str(nick);
        line.push_str(" - ");
    }
    line.push_str(&format!(
        "{} ({} {})",
        project.full_path,
        instance.platform_name(project),
        instance.display_framework(project)
    ));
    line
}

/// Exit codes: 0 launched (or a remediation was chosen), 1 not found,
/// 2 load failure.
pub fn launch(instance: &Instance, key: &str, interactive: bool) -> Result<i32> {
    let Some(project) = instance.find_project(key)? else {
        println!("Project with path or nickname \"{}\" not found", key);
        return Ok(1);
    };

    match instance.load(&project)? {
        LoadResult::Launched => {
            instance.push_recent(&project)?;
            Ok(0)
        }
        LoadResult::Failed(fail) => {
            print_failure(&fail, interactive);
            if interactive && !fail.remediations.is_empty() {
                return prompt_remediation(&fail);
            }
            Ok(2)
        }
    }
}

fn print_failure(fail: &LoadFailure, interactive: bool) {
    println!();
    let title = format!("## {} ##", fail.title);
    if std::io::stdout().is_terminal() {
        println!("{}", title.red());
    } else {
        println!("{}", title);
    }
    println!();
    println!("{}", fail.message);
    if fail.remediations.is_empty() {
        return;
    }
    println!();
    println!("## Options ##");
    println!();
    if interactive {
        println!("0: Quit");
        println!();
    }
    for (i, remediation) in fail.remediations.iter().enumerate() {
        if interactive {
            println!("{}: {}", i + 1, remediation.short_name);
        } else {
            println!("-- {}", remediation.short_name);
        }
        println!("{}", remediation.description);
        println!();
    }
}

fn prompt_remediation(fail: &LoadFailure) -> Result<i32> {
    loop {
        print!("Select an option: ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            return Ok(2);
        }
        let Ok(choice) = input.trim().parse::<usize>() else {
            println!("Invalid input: enter a number");
            continue;
        };
        if choice == 0 {
            return Ok(0);
        }
        let Some(remediation) = fail.remediations.get(choice - 1) else {
            println!("Invalid input: out of range");
            continue;
        };
        remediation.invoke()?;
        return Ok(0);
    }
}

pub fn nick(instance: &Instance, project: &str, nick: Option<&str>) -> Result<()> {
    if instance.set_nickname(project, nick)? {
        match nick {
            Some(nick) => println!("Nickname \"{}\" set", nick),
            None => println!("Nickname cleared"),
        }
    } else {
        println!("Project \"{}\" not found", project);
    }
    Ok(())
}
