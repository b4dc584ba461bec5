use anyhow::{Context, Result};
use std::path::Path;

/// Load the raw `{ host: { user: {...} } }` table from a TOML config file.
///
/// Table order follows the file, so servers and users are snapshotted in
/// the order they are written.
pub fn load_config(path: &Path) -> Result<toml::Table> {
    if !path.exists() {
        anyhow::bail!(
            "Config file not found at {}\n\n\
            Create it with one section per server user:\n\n\
            [\"cloud.example.com\".alice]\n\
            password = \"app-password\"\n\
            calendar_names = [\"personal\", \"work\"]\n\
            ignore_contacts = false",
            path.display()
        );
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    parse_config(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))
}

fn parse_config(contents: &str) -> Result<toml::Table> {
    Ok(toml::from_str(contents)?)
}
