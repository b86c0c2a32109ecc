//! Initialize newsroom use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, NewsroomRepository};
use std::fs;
use std::path::Path;

/// Initialize a new newsroom at the specified path.
///
/// Data files are not created here; they appear on the first change.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::default();
    repo.save_config(&config)?;

    log::info!("Initialized newsroom at {}", path.display());
    Ok(config)
}
