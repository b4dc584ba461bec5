use std::path::Path;

use anyhow::{Context, Result};
use capsule_core::{Hierarchy, Plan, SnapshotTime};
use owo_colors::OwoColorize;

use crate::archive::ZipSink;
use crate::config;
use crate::nextcloud::NextcloudClient;

pub async fn run(config_path: &Path, archive_path: &Path, dry_run: bool) -> Result<()> {
    println!("Snapshotting calendars/contacts");

    // Every path of this run shares this instant.
    let timestamp = SnapshotTime::now();

    let plan = build_plan(config_path, timestamp)?;

    if dry_run {
        for path in plan.paths() {
            println!("   {}", path);
        }
        println!("\n{} entries planned, nothing fetched", plan.len());
        return Ok(());
    }

    let client = NextcloudClient::new()?;

    let archive_path = std::path::absolute(archive_path)?;
    println!("Opening archive '{}'", archive_path.display());
    let mut sink = ZipSink::open(&archive_path, timestamp)
        .with_context(|| format!("Failed to open archive at {}", archive_path.display()))?;

    let result = capsule_core::execute(&plan, &client, &mut sink).await;

    // Entries written before a failure are kept.
    let finished = sink.finish();

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            println!("{}", "Snapshot failed".red());
            return Err(anyhow::Error::new(e).context("Snapshot aborted"));
        }
    };
    finished.with_context(|| format!("Failed to finalize archive at {}", archive_path.display()))?;

    log::info!("Archived {} entries ({} bytes)", stats.entries, stats.bytes);
    println!("{}", "Success!".green());

    Ok(())
}

fn build_plan(config_path: &Path, timestamp: SnapshotTime) -> Result<Plan> {
    let table = config::load_config(config_path)?;

    if table.is_empty() {
        anyhow::bail!(
            "No servers configured in {}.\n\
            Add a section per server user, e.g. [\"cloud.example.com\".alice]",
            config_path.display()
        );
    }

    let hierarchy = Hierarchy::from_config(&table, timestamp)
        .with_context(|| format!("Invalid config file at {}", config_path.display()))?;

    let plan = Plan::build(&hierarchy)?;
    Ok(plan)
}
