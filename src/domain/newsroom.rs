//! Newsroom aggregate root

use crate::domain::{EditorManager, NewsManager, ScheduleManager};

/// The three collections a newsroom session works on
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Newsroom {
    pub editors: EditorManager,
    pub news: NewsManager,
    pub schedules: ScheduleManager,
}

impl Newsroom {
    pub fn new(editors: EditorManager, news: NewsManager, schedules: ScheduleManager) -> Self {
        Newsroom {
            editors,
            news,
            schedules,
        }
    }
}
