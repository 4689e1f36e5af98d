//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taskbox_core::category::SortMode;

#[derive(Debug, Parser)]
#[command(name = "taskbox", version, about = "Organize tasks into categories")]
pub struct Cli {
    /// Base URL of the Taskbox API
    #[arg(long, global = true, env = "TASKBOX_API_URL")]
    pub api_url: Option<String>,

    /// Directory holding the saved session
    #[arg(long, global = true, env = "TASKBOX_DATA_DIR", default_value = ".taskbox")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account and sign in
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in with an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the saved session
    Logout,
    /// List categories with their task counts
    Categories {
        /// Sort mode to use and remember
        #[arg(long, value_parser = parse_sort_mode, conflicts_with = "next_sort")]
        sort: Option<SortMode>,
        /// Switch to the next sort mode
        #[arg(long)]
        next_sort: bool,
    },
    /// Create a custom category
    AddCategory {
        name: String,
        /// Icon reference (remote path)
        #[arg(long)]
        icon: Option<String>,
    },
    /// List the tasks in a category
    Tasks { category: String },
    /// Add a task to a category
    Add {
        category: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Move a task and its mirror row to the trash
    Delete {
        /// Category view the id was taken from
        category: String,
        id: i64,
    },
    /// List trashed tasks
    Trash,
    /// Restore a trashed task
    Restore { id: i64 },
    /// Permanently delete a trashed task
    Purge { id: i64 },
}

fn parse_sort_mode(raw: &str) -> Result<SortMode, String> {
    raw.parse::<SortMode>().map_err(|e| e.to_string())
}
