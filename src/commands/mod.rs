pub mod browse;
pub mod config;
pub mod menu;
pub mod split;
pub mod sum;

use anyhow::{Context, Result};
use serde::Serialize;

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
