use crate::args::ConfigCommand;
use anyhow::Result;
use hangar_types::Config;
use std::path::Path;

/// `config` subcommands edit the `[options]` table of `config.toml`
/// directly; the structured settings (depth, recents cap, evaluator
/// enables) are edited in the file itself.
pub fn handle(data_dir: &Path, command: ConfigCommand) -> Result<()> {
    let config_path = data_dir.join("config.toml");
    let mut config = Config::load_from(&config_path)?;

    match command {
        ConfigCommand::Set { key, value } => {
            config.options.insert(key, parse_value(value));
            config.save_to(&config_path)?;
        }
        ConfigCommand::List => {
            for (key, value) in &config.options {
                println!("{}={}", key, value);
            }
        }
        ConfigCommand::Remove { key } => {
            config.options.remove(&key);
            config.save_to(&config_path)?;
        }
        ConfigCommand::Clear => {
            config.options.clear();
            config.save_to(&config_path)?;
        }
    }
    Ok(())
}

/// Store booleans and integers typed; everything else stays a string.
fn parse_value(value: String) -> toml::Value {
    if let Ok(flag) = value.parse::<bool>() {
        return toml::Value::Boolean(flag);
    }
    if let Ok(int) = value.parse::<i64>() {
        return toml::Value::Integer(int);
    }
    toml::Value::String(value)
}
