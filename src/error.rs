//! Error types for newsroom

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the newsroom application
#[derive(Debug, Error)]
pub enum NewsroomError {
    #[error("Not a newsroom directory: {0}")]
    NotNewsroomDirectory(PathBuf),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Editor not found: {0}")]
    EditorNotFound(String),

    #[error("News not found or you do not have permission to change it: {0}")]
    NewsNotFound(String),

    #[error("Schedule not found or you do not have permission to change it: {0}")]
    ScheduleNotFound(String),

    #[error("Corrupt data file {}: {source}", .path.display())]
    CorruptDataFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl NewsroomError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NewsroomError::NotNewsroomDirectory(_) => 2,
            NewsroomError::InvalidTimestamp(_) => 3,
            NewsroomError::EditorNotFound(_)
            | NewsroomError::NewsNotFound(_)
            | NewsroomError::ScheduleNotFound(_) => 4,
            NewsroomError::CorruptDataFile { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NewsroomError::NotNewsroomDirectory(path) => {
                format!(
                    "Not a newsroom directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'newsroom init' in this directory to create a new newsroom\n\
                    • Navigate to an existing newsroom directory\n\
                    • Set NEWSROOM_ROOT environment variable to your newsroom path",
                    path.display()
                )
            }
            NewsroomError::InvalidTimestamp(input) => {
                format!(
                    "Invalid timestamp: '{}'\n\n\
                    Accepted formats:\n\
                    • YYYY-MM-DD HH:MM (e.g., 2025-01-17 18:30)\n\
                    • YYYY-MM-DD HH:MM:SS\n\
                    • YYYY-MM-DD (midnight)",
                    input
                )
            }
            NewsroomError::EditorNotFound(name) => {
                format!(
                    "Editor not found: {}\n\n\
                    Suggestions:\n\
                    • Check that name and email match your sign-up exactly\n\
                    • Sign up first: newsroom signup --name ... --email ...\n\
                    • Use 'newsroom editors' to see registered editors",
                    name
                )
            }
            NewsroomError::NewsNotFound(_) => {
                format!(
                    "{}\n\n\
                    Only the editor who wrote a story can change it, and only while \
                    the story's category still matches that editor's department.\n\
                    Use 'newsroom news list' to see titles, categories and editors.",
                    self
                )
            }
            NewsroomError::ScheduleNotFound(_) => {
                format!(
                    "{}\n\n\
                    Schedule entries are matched by their exact time and by the \
                    editor who booked them.\n\
                    Use 'newsroom schedule list' to see booked times.",
                    self
                )
            }
            NewsroomError::CorruptDataFile { path, .. } => {
                format!(
                    "{}\n\n\
                    The file is left untouched. Fix or move it aside before running \
                    newsroom again; a missing file is treated as empty.\n\
                    File: {}",
                    self,
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NewsroomError
pub type Result<T> = std::result::Result<T, NewsroomError>;
