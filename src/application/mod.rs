//! Application layer - Use cases and orchestration

pub mod accounts;
pub mod init;
pub mod manage_config;
pub mod news_desk;
pub mod schedule_desk;

pub use manage_config::ConfigService;
pub use news_desk::NewsRevision;
pub use schedule_desk::ScheduleRevision;
