//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "newsroom")]
#[command(about = "Terminal newsroom: editors, news by category, and the broadcast schedule", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Name and email of the editor performing an action
#[derive(Args, Debug, Clone)]
pub struct Credentials {
    /// Your editor name
    #[arg(long)]
    pub name: String,

    /// Your editor email
    #[arg(long)]
    pub email: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new newsroom
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Register as an editor
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,

        /// Department; your stories are filed under it as their category
        #[arg(long)]
        department: String,
    },

    /// Check your credentials
    Signin {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// List registered editors
    Editors,

    /// Browse and edit news
    #[command(subcommand)]
    News(NewsCommand),

    /// Browse and edit the broadcast schedule
    #[command(subcommand)]
    Schedule(ScheduleCommand),
}

#[derive(Subcommand, Debug)]
pub enum NewsCommand {
    /// Show all news, or one category
    List {
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show a single item by title
    Show { title: String },

    /// Count items per configured category
    Categories,

    /// Publish a new item under your department
    Add {
        #[command(flatten)]
        credentials: Credentials,

        #[arg(long)]
        title: String,

        #[arg(long)]
        summary: String,

        /// Broadcast time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        time: String,
    },

    /// Edit one of your items
    Edit {
        #[command(flatten)]
        credentials: Credentials,

        /// Current title of the item
        title: String,

        #[arg(long)]
        new_title: Option<String>,

        #[arg(long)]
        summary: Option<String>,

        /// New broadcast time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        time: Option<String>,
    },

    /// Delete one of your items
    Delete {
        #[command(flatten)]
        credentials: Credentials,

        title: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScheduleCommand {
    /// Show the broadcast schedule
    List,

    /// Book a slot
    Add {
        #[command(flatten)]
        credentials: Credentials,

        /// Slot time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        time: String,

        #[arg(long)]
        content: String,
    },

    /// Change one of your slots
    Edit {
        #[command(flatten)]
        credentials: Credentials,

        /// Exact time of the slot to change
        time: String,

        #[arg(long)]
        new_time: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Delete one of your slots
    Delete {
        #[command(flatten)]
        credentials: Credentials,

        /// Exact time of the slot to delete
        time: String,
    },
}
