//! Domain layer - Newsroom records and their collections

pub mod editor;
pub mod news;
pub mod newsroom;
pub mod schedule;
pub mod timestamp;

pub use editor::{Editor, EditorManager, EditorRef};
pub use news::{Category, News, NewsManager};
pub use newsroom::Newsroom;
pub use schedule::{Schedule, ScheduleManager};
pub use timestamp::{format_timestamp, parse_timestamp};
