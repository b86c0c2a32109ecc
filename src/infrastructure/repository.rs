//! File system repository

use crate::domain::Newsroom;
use crate::error::{NewsroomError, Result};
use crate::infrastructure::config::{Config, NEWSROOM_DIR};
use crate::infrastructure::store;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that pins the newsroom root
pub const ROOT_ENV: &str = "NEWSROOM_ROOT";

/// Abstract repository for newsroom storage
pub trait NewsroomRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .newsroom/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .newsroom/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .newsroom directory exists
    fn is_initialized(&self) -> bool;

    /// Create .newsroom directory structure
    fn initialize(&self) -> Result<()>;

    /// Load editors, news and schedules
    fn load_newsroom(&self) -> Result<Newsroom>;

    /// Write editors, news and schedules back to their files
    fn save_newsroom(&self, newsroom: &Newsroom) -> Result<()>;
}

/// File system implementation of NewsroomRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the newsroom root.
    /// NEWSROOM_ROOT wins when set; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_newsroom_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(NewsroomError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'newsroom init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    NEWSROOM_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .newsroom is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_newsroom_dir(&current) {
                log::debug!("Found newsroom at {}", current.display());
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(NewsroomError::NotNewsroomDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_newsroom_dir(path: &Path) -> bool {
        path.join(NEWSROOM_DIR).is_dir()
    }
}

impl NewsroomRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_newsroom_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let newsroom_dir = self.root.join(NEWSROOM_DIR);

        if newsroom_dir.exists() {
            return Err(NewsroomError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&newsroom_dir)?;
        Ok(())
    }

    fn load_newsroom(&self) -> Result<Newsroom> {
        let config = self.load_config()?;
        let (editors, news, schedules) = config.data_paths(&self.root);

        Ok(Newsroom::new(
            store::load(&editors)?,
            store::load(&news)?,
            store::load(&schedules)?,
        ))
    }

    fn save_newsroom(&self, newsroom: &Newsroom) -> Result<()> {
        let config = self.load_config()?;
        let (editors, news, schedules) = config.data_paths(&self.root);

        store::save(&editors, &newsroom.editors)?;
        store::save(&news, &newsroom.news)?;
        store::save(&schedules, &newsroom.schedules)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Editor, News, Schedule};
    use chrono::NaiveDate;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn initialized() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::default()).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(matches!(repo.initialize(), Err(NewsroomError::Config(_))));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".newsroom")).unwrap();
        let nested = temp.path().join("desk").join("sports");
        fs::create_dir_all(&nested).unwrap();

        let repo = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_newsroom() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()) {
            Err(NewsroomError::NotNewsroomDirectory(path)) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotNewsroomDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_load_fresh_newsroom_is_empty() {
        let (_temp, repo) = initialized();

        let newsroom = repo.load_newsroom().unwrap();
        assert_eq!(newsroom, Newsroom::default());
    }

    #[test]
    fn test_save_and_load_newsroom() {
        let (temp, repo) = initialized();
        let ana = Editor::new("Ana", "555", "a@x.com", "Sports");
        let time = NaiveDate::from_ymd_opt(2025, 1, 17)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();

        let mut newsroom = Newsroom::default();
        newsroom.editors.add_editor(ana.clone());
        newsroom.news.add_news(News::new("Goal!", "...", time, &ana));
        newsroom
            .schedules
            .add_schedule(Schedule::new(time, "Match recap", &ana));

        repo.save_newsroom(&newsroom).unwrap();

        assert!(temp.path().join("editors.toml").exists());
        assert!(temp.path().join("news.toml").exists());
        assert!(temp.path().join("schedules.toml").exists());
        assert_eq!(repo.load_newsroom().unwrap(), newsroom);
    }

    #[test]
    fn test_configured_file_names_are_used() {
        let (temp, repo) = initialized();
        let mut config = repo.load_config().unwrap();
        config.news_file = "archive/stories.toml".to_string();
        repo.save_config(&config).unwrap();

        repo.save_newsroom(&Newsroom::default()).unwrap();

        assert!(temp.path().join("archive/stories.toml").exists());
        assert!(!temp.path().join("news.toml").exists());
    }

    #[test]
    fn test_corrupt_data_file_fails_load() {
        let (temp, repo) = initialized();
        fs::write(temp.path().join("schedules.toml"), "schedules = 7").unwrap();

        assert!(matches!(
            repo.load_newsroom(),
            Err(NewsroomError::CorruptDataFile { .. })
        ));
    }

    #[test]
    fn test_discover_with_newsroom_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".newsroom")).unwrap();

        std::env::set_var(ROOT_ENV, temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_newsroom_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);

        let temp = TempDir::new().unwrap();
        std::env::set_var(ROOT_ENV, temp.path());

        match FileSystemRepository::discover() {
            Err(NewsroomError::Config(msg)) => assert!(msg.contains("no .newsroom directory")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
