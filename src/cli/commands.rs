use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shiftgrid", about = concat!("shiftgrid v", env!("CARGO_PKG_VERSION"), " - hourly shift scheduling grid"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of searching for shiftgrid.toml
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with SHIFTGRID_LOG)
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter shiftgrid.toml
    Init(InitArgs),
    /// Show the roster seed and work item catalog
    Catalog(CatalogArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Where to write the config
    #[arg(default_value = "shiftgrid.toml")]
    pub path: PathBuf,
    /// Store name shown in the header
    #[arg(long)]
    pub store: Option<String>,
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
