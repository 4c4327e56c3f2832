//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "nls-planner",
    version,
    about = "Integrate digital-competency (NLS) content into lesson plans with Gemini"
)]
pub struct Cli {
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// More terminal logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the stored Gemini API key
    #[command(subcommand)]
    Key(KeyCommand),

    /// Transform a lesson plan
    Generate(GenerateArgs),

    /// Show or change config.json
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Change values and write config.json
    Set(ConfigSetArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ConfigSetArgs {
    /// Gemini API base URL
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Gemini model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// HTTP timeout for Gemini requests, in seconds
    #[arg(long, value_name = "SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Directory for storage.json and the log file
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum KeyCommand {
    /// Show whether a key is stored
    Status,

    /// Verify a key with Gemini and store it
    Set {
        /// The key; read from stdin when omitted
        key: Option<String>,
    },

    /// Erase the stored key
    Remove,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Textbook series ("Bộ sách")
    #[arg(long)]
    pub textbook: String,

    /// Subject ("Môn học")
    #[arg(long)]
    pub subject: String,

    /// Grade ("Lớp")
    #[arg(long)]
    pub grade: String,

    /// File with the original lesson plan
    #[arg(long, value_name = "FILE")]
    pub content_file: PathBuf,

    /// File with the curriculum distribution (PPCT) for reference
    #[arg(long, value_name = "FILE")]
    pub distribution_file: Option<PathBuf>,

    /// Only analyze where competencies fit; do not modify the lesson
    #[arg(long)]
    pub analyze_only: bool,

    /// Append a report explaining each integration
    #[arg(long)]
    pub detailed_report: bool,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
