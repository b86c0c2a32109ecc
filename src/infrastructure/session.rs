//! Load-on-open, save-on-exit newsroom session

use crate::domain::Newsroom;
use crate::error::Result;
use crate::infrastructure::NewsroomRepository;
use std::ops::{Deref, DerefMut};

/// Holds the loaded newsroom for the duration of one command.
///
/// Call [`NewsroomSession::commit`] to save and see the result. A session that
/// is dropped without committing (early return, error, panic unwind) still
/// writes any changes back, logging failures instead of returning them.
pub struct NewsroomSession<'a, R: NewsroomRepository> {
    repository: &'a R,
    newsroom: Newsroom,
    dirty: bool,
    closed: bool,
}

impl<'a, R: NewsroomRepository> NewsroomSession<'a, R> {
    /// Load all three collections from `repository`
    pub fn open(repository: &'a R) -> Result<Self> {
        let newsroom = repository.load_newsroom()?;
        log::info!(
            "Loaded {} editors, {} news items, {} schedule entries",
            newsroom.editors.len(),
            newsroom.news.len(),
            newsroom.schedules.len()
        );

        Ok(NewsroomSession {
            repository,
            newsroom,
            dirty: false,
            closed: false,
        })
    }

    /// Whether the newsroom has been borrowed mutably since opening
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save if anything may have changed, then close the session
    pub fn commit(mut self) -> Result<()> {
        self.closed = true;
        if self.dirty {
            self.repository.save_newsroom(&self.newsroom)?;
            log::info!("Saved newsroom to {}", self.repository.root().display());
        }
        Ok(())
    }
}

impl<R: NewsroomRepository> Deref for NewsroomSession<'_, R> {
    type Target = Newsroom;

    fn deref(&self) -> &Newsroom {
        &self.newsroom
    }
}

impl<R: NewsroomRepository> DerefMut for NewsroomSession<'_, R> {
    fn deref_mut(&mut self) -> &mut Newsroom {
        self.dirty = true;
        &mut self.newsroom
    }
}

impl<R: NewsroomRepository> Drop for NewsroomSession<'_, R> {
    fn drop(&mut self) {
        if self.closed || !self.dirty {
            return;
        }

        log::warn!("Session closed without commit, saving newsroom");
        if let Err(e) = self.repository.save_newsroom(&self.newsroom) {
            log::error!("Failed to save newsroom on exit: {}", e);
        }
    }
}
