//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, Credentials, NewsCommand, ScheduleCommand};
pub use output::{
    format_category_counts, format_category_view, format_editor_list, format_news_detail,
    format_news_table, format_schedule_table,
};
