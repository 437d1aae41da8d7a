//! Configuration command implementation

use crate::config::{ConfigKey, ConfigValue, GlobalConfig};
use anyhow::Result;
use colored::Colorize;

/// Execute the config command
pub fn execute(
    key: Option<String>,
    value: Option<String>,
    list: bool,
    unset: bool,
    show_origin: bool,
    json: bool,
) -> Result<()> {
    let mut config = GlobalConfig::load()?;

    if show_origin {
        let config_path = GlobalConfig::get_config_path()?;
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "config_file": config_path.display().to_string(),
                    "exists": config_path.exists()
                })
            );
        } else {
            println!(
                "{}: {}",
                "Configuration file".bold(),
                config_path.display().to_string().cyan()
            );
            if config_path.exists() {
                println!("{}: {}", "Status".bold(), "exists".green());
            } else {
                println!("{}: {}", "Status".bold(), "not created yet".yellow());
            }
        }
        return Ok(());
    }

    if list {
        return list_configuration(&config, json);
    }

    let Some(key_str) = key else {
        println!("{}", "Usage: mtree config <key> [value]".yellow());
        println!("  {} mtree config --list", "→".cyan());
        return Ok(());
    };
    let config_key = ConfigKey::from_str(&key_str)
        .ok_or_else(|| anyhow::anyhow!("Invalid configuration key: {}", key_str))?;

    if unset {
        config.unset(config_key);
        config.save()?;
        if !json {
            println!("{} {}", "✓ Unset".green(), key_str.bold());
        }
        return Ok(());
    }

    match value {
        Some(raw) => {
            let value = ConfigValue::parse_for(config_key, &raw)?;
            config.set(config_key, value)?;
            config.save()?;
            if json {
                println!("{}", serde_json::json!({ "key": key_str, "value": raw }));
            } else {
                println!("{} {} = {}", "✓ Set".green(), key_str.bold(), raw.cyan());
            }
        }
        None => match config.get(config_key) {
            Some(value) if json => {
                println!("{}", serde_json::json!({ "key": key_str, "value": value }))
            }
            Some(value) => println!("{}", value),
            None if json => println!("{}", serde_json::json!({ "key": key_str, "value": null })),
            None => println!("{}", "(not set)".dimmed()),
        },
    }

    Ok(())
}

fn list_configuration(config: &GlobalConfig, json: bool) -> Result<()> {
    let entries = config.list();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::String(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No configuration values set".dimmed());
        return Ok(());
    }
    for (key, value) in entries {
        println!("{}={}", key.bold(), value);
    }
    Ok(())
}
