use crate::config;
use crate::services::catalog;
use anyhow::Result;
use std::path::Path;

pub fn run(pictures: &Path) -> Result<()> {
    let sets = catalog::scan_photo_sets(pictures, config::DEFAULT_MOUNT_PREFIX)?;
    println!("{}", serde_json::to_string_pretty(&sets)?);
    Ok(())
}
