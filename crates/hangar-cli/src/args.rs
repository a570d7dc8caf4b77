use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hangar")]
#[command(about = "Register project folders, scan them for projects, launch each in its native editor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding hangar.db and config.toml
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage project folders
    Folder {
        #[command(subcommand)]
        command: FolderCommand,
    },
    /// Manage projects
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },
    /// Manage configuration options
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// List available evaluators
    Evaluators,
    /// (re)scan project folders for projects
    S {
        /// Target paths (all registered folders when empty)
        paths: Vec<String>,
    },
    /// List projects
    L,
    /// List recent projects
    R,
    /// Launch a project
    X {
        /// Target project path, shorthand or nickname
        project: String,
        /// Allow interactive remediations
        #[arg(long)]
        interactive: bool,
    },
}

#[derive(Subcommand)]
pub enum FolderCommand {
    /// Add project folders (and scan them)
    Add {
        /// Target paths
        paths: Vec<String>,
    },
    /// List project folders
    List {
        /// Show per-folder project counts
        #[arg(long)]
        total: bool,
    },
    /// Remove project folders
    Remove {
        /// Target paths
        paths: Vec<String>,
    },
    /// Remove all project folders
    Clear,
    /// (re)scan project folders for projects
    Scan {
        /// Target paths (all registered folders when empty)
        paths: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// List projects
    List,
    /// List recent projects
    Recent,
    /// Launch a project
    Launch {
        /// Target project path, shorthand or nickname
        project: String,
        /// Allow interactive remediations
        #[arg(long)]
        interactive: bool,
    },
    /// Set a project nickname
    Nick {
        /// Target project path
        project: String,
        /// Nickname to set
        nick: String,
    },
    /// Unset a project nickname
    Unnick {
        /// Target project path
        project: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Set a config option
    Set {
        /// Option key
        key: String,
        /// Option value (parsed as bool or integer when possible)
        value: String,
    },
    /// List config options
    List,
    /// Remove a config option
    Remove {
        /// Option key
        key: String,
    },
    /// Remove all config options
    Clear,
}
