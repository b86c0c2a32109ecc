//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod session;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, NewsroomRepository};
pub use session::NewsroomSession;
pub use store::Collection;
