//! Config management use case

use crate::error::{NewsroomError, Result};
use crate::infrastructure::{Config, FileSystemRepository, NewsroomRepository};

const VALID_KEYS: &str = "editors_file, news_file, schedules_file, categories";

/// Service for managing newsroom configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editors_file" => Ok(config.editors_file),
            "news_file" => Ok(config.news_file),
            "schedules_file" => Ok(config.schedules_file),
            "categories" => Ok(config.categories.join(", ")),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(NewsroomError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, created",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editors_file" => config.editors_file = Self::file_name(key, value)?,
            "news_file" => config.news_file = Self::file_name(key, value)?,
            "schedules_file" => config.schedules_file = Self::file_name(key, value)?,
            "categories" => {
                config.categories = value
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "created" => {
                return Err(NewsroomError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(NewsroomError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        Self::check_distinct_files(&config)?;
        self.repository.save_config(&config)?;
        log::info!("Config {} set to {}", key, value);
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }

    fn file_name(key: &str, value: &str) -> Result<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(NewsroomError::Config(format!("'{}' cannot be empty", key)));
        }
        Ok(trimmed.to_string())
    }

    /// Each collection needs its own data file
    fn check_distinct_files(config: &Config) -> Result<()> {
        let files = [
            ("editors_file", &config.editors_file),
            ("news_file", &config.news_file),
            ("schedules_file", &config.schedules_file),
        ];

        for (i, (key, file)) in files.iter().enumerate() {
            if let Some((other, _)) = files[i + 1..].iter().find(|(_, f)| f == file) {
                return Err(NewsroomError::Config(format!(
                    "'{}' and '{}' cannot both be '{}'",
                    key, other, file
                )));
            }
        }
        Ok(())
    }
}
