use crate::config::Config;
use anyhow::{Context, Result};
use serde_json::Value;

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

/// Walk a dotted key such as `planner.default_chunk_minutes`.
pub fn lookup(key: &str, config: &Config) -> Result<Value> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }

    Ok(current.clone())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config)? {
        Value::String(s) => println!("{}", s),
        Value::Null => println!("(unset)"),
        v => println!("{}", v),
    }
    Ok(())
}
