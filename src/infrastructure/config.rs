//! Configuration management

use crate::error::{NewsroomError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory that marks a newsroom root
pub const NEWSROOM_DIR: &str = ".newsroom";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_editors_file")]
    pub editors_file: String,
    #[serde(default = "default_news_file")]
    pub news_file: String,
    #[serde(default = "default_schedules_file")]
    pub schedules_file: String,
    /// Categories offered for browsing. Any department is still accepted.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    pub created: DateTime<Utc>,
}

fn default_editors_file() -> String {
    "editors.toml".to_string()
}

fn default_news_file() -> String {
    "news.toml".to_string()
}

fn default_schedules_file() -> String {
    "schedules.toml".to_string()
}

fn default_categories() -> Vec<String> {
    vec![
        "Entertainment".to_string(),
        "Sports".to_string(),
        "Politics".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            editors_file: default_editors_file(),
            news_file: default_news_file(),
            schedules_file: default_schedules_file(),
            categories: default_categories(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .newsroom/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = Self::path_in(path);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NewsroomError::NotNewsroomDirectory(path.to_path_buf())
            } else {
                NewsroomError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| NewsroomError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .newsroom/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let newsroom_dir = path.join(NEWSROOM_DIR);

        if !newsroom_dir.exists() {
            fs::create_dir(&newsroom_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| NewsroomError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(Self::path_in(path), contents)?;

        Ok(())
    }

    /// Absolute paths of the editors, news and schedules files under `root`
    pub fn data_paths(&self, root: &Path) -> (PathBuf, PathBuf, PathBuf) {
        (
            root.join(&self.editors_file),
            root.join(&self.news_file),
            root.join(&self.schedules_file),
        )
    }

    fn path_in(root: &Path) -> PathBuf {
        root.join(NEWSROOM_DIR).join(CONFIG_FILE)
    }
}
