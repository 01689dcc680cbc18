//! Command-line interface definitions.
//!
//! Defines the CLI structure for the captrain application using `clap`.
//! The public board, the admin board, per-train editing and whole-collection
//! data operations each get their own subcommand.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Capacity board for scheduled train slots
#[derive(Parser, Debug)]
#[command(name = "captrain")]
#[command(version, about)]
pub struct Cli {
    /// Path to configuration file [default: ~/.captrain/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the captrain CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the public capacity board
    Board(BoardArgs),

    /// Show every live train, grouped by corridor
    Admin,

    /// Add, edit and remove trains
    #[command(subcommand)]
    Train(TrainCommand),

    /// Export, import or reset the whole collection
    #[command(subcommand)]
    Data(DataCommand),

    /// List the configured corridors
    Corridors,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `captrain board`.
#[derive(Parser, Debug)]
pub struct BoardArgs {
    /// Trains shown per corridor [default: board.public_limit]
    #[arg(long)]
    pub limit: Option<usize>,

    #[command(subcommand)]
    pub command: Option<BoardCommand>,
}

/// Subcommands for `captrain board`.
#[derive(Subcommand, Debug)]
pub enum BoardCommand {
    /// Re-render the board periodically until interrupted
    Watch(WatchArgs),
}

/// Arguments for `captrain board watch`.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Seconds between refreshes [default: board.refresh_interval_secs]
    #[arg(long)]
    pub interval: Option<u64>,
}

/// Subcommands for `captrain train`.
#[derive(Subcommand, Debug)]
pub enum TrainCommand {
    /// List live trains, earliest departure first
    List(TrainListArgs),
    /// Add a train (departure must be more than 48h away)
    Add(TrainAddArgs),
    /// Change fields of an existing train
    Update(TrainUpdateArgs),
    /// Remove a train
    Delete(TrainDeleteArgs),
}

/// Arguments for `captrain train list`.
#[derive(Parser, Debug)]
pub struct TrainListArgs {
    /// Only trains on this corridor
    #[arg(long)]
    pub corridor: Option<String>,
}

/// Arguments for `captrain train add`.
#[derive(Parser, Debug)]
pub struct TrainAddArgs {
    /// Corridor id
    #[arg(long)]
    pub corridor: String,

    /// Departure: RFC 3339, YYYY-MM-DDTHH:MM (UTC) or YYYY-MM-DD (noon UTC)
    #[arg(long)]
    pub departure: String,

    /// Capacity status [AVAILABLE, INQUIRY, FULL]
    #[arg(long, default_value = "AVAILABLE")]
    pub status: String,
}

/// Arguments for `captrain train update`.
#[derive(Parser, Debug)]
pub struct TrainUpdateArgs {
    /// Train id
    pub id: String,

    /// New corridor id
    #[arg(long)]
    pub corridor: Option<String>,

    /// New departure
    #[arg(long)]
    pub departure: Option<String>,

    /// New capacity status
    #[arg(long)]
    pub status: Option<String>,
}

/// Arguments for `captrain train delete`.
#[derive(Parser, Debug)]
pub struct TrainDeleteArgs {
    /// Train id
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Subcommands for `captrain data`.
#[derive(Subcommand, Debug)]
pub enum DataCommand {
    /// Write every live train to a JSON file
    Export(DataExportArgs),
    /// Replace the collection with the trains in a JSON file
    Import(DataImportArgs),
    /// Discard the collection and restore the seed data
    Reset(DataResetArgs),
}

/// Arguments for `captrain data export`.
#[derive(Parser, Debug)]
pub struct DataExportArgs {
    /// Output file [default: captrain-export-<date>.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `captrain data import`.
#[derive(Parser, Debug)]
pub struct DataImportArgs {
    /// JSON file holding an array of trains
    pub path: PathBuf,
}

/// Arguments for `captrain data reset`.
#[derive(Parser, Debug)]
pub struct DataResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Subcommands for `captrain config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for `captrain config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
