//! Generic TOML persistence for record collections

use crate::domain::{EditorManager, NewsManager, ScheduleManager};
use crate::error::{NewsroomError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

/// A collection that can be written to and read back from a data file
pub trait Collection: Serialize + DeserializeOwned + Default {
    /// Human-readable name used in log messages
    const KIND: &'static str;
}

impl Collection for EditorManager {
    const KIND: &'static str = "editors";
}

impl Collection for NewsManager {
    const KIND: &'static str = "news";
}

impl Collection for ScheduleManager {
    const KIND: &'static str = "schedules";
}

/// Serialize `collection` to `path`, replacing any existing file
pub fn save<T: Collection>(path: &Path, collection: &T) -> Result<()> {
    let contents = toml::to_string_pretty(collection)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    // The writer owns the handle; it is closed when this scope ends on any path
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    log::debug!("Saved {} to {}", T::KIND, path.display());
    Ok(())
}

/// Read a collection from `path`.
///
/// A missing file yields the empty collection. A file that exists but is not
/// UTF-8 text, does not parse, or holds another collection's records is
/// reported as [`NewsroomError::CorruptDataFile`].
pub fn load<T: Collection>(path: &Path) -> Result<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No {} file at {}, starting empty", T::KIND, path.display());
            return Ok(T::default());
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(NewsroomError::CorruptDataFile {
                path: path.to_path_buf(),
                source: Box::new(e),
            });
        }
        Err(e) => return Err(NewsroomError::Io(e)),
    };

    let collection = toml::from_str(&contents).map_err(|source| NewsroomError::CorruptDataFile {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;

    log::debug!("Loaded {} from {}", T::KIND, path.display());
    Ok(collection)
}
