mod init;
pub use init::cmd_init;

use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => crate::tui::run(cli.config.as_deref()),
        Some(Commands::Init(args)) => cmd_init(args),
        Some(Commands::Catalog(args)) => cmd_catalog(cli.config.as_deref(), args),
    }
}

pub fn cmd_catalog(config_path: Option<&Path>, args: CatalogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let (config, _) = config_io::load_config(config_path, &cwd)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog_json(&config))?);
    } else {
        println!("{}", format_catalog(&config));
    }
    Ok(())
}
