//! newsroom - Terminal newsroom management
//!
//! Editors sign up and sign in, publish news filed under their department,
//! and book slots in the broadcast schedule. Editors, news and schedules are
//! kept in three TOML files that are loaded at the start of every command and
//! written back when it finishes.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NewsroomError;
