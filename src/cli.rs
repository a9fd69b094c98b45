//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

use crate::input::TaskPreset;

#[derive(Parser)]
#[command(name = "hrvst")]
#[command(about = "Log a Harvest time entry from the terminal", version)]
pub(crate) struct Cli {
    /// Project code (skips the project prompt)
    #[arg(short, long)]
    pub(crate) project: Option<String>,

    /// Task number (skips the task ID prompt)
    #[arg(short, long)]
    pub(crate) task: Option<String>,

    /// Entry message (skips the message prompt)
    #[arg(short, long)]
    pub(crate) message: Option<String>,

    /// Print the request that would be sent, without sending it
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Load environment from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    pub(crate) env_file: Option<PathBuf>,
}

impl Cli {
    /// Values already supplied on the command line; prompts cover the rest.
    pub(crate) fn preset(&self) -> TaskPreset {
        TaskPreset {
            project: self.project.clone(),
            id: self.task.clone(),
            message: self.message.clone(),
        }
    }
}
