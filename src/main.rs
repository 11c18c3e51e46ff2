use clap::Parser;
use shiftgrid::cli::commands::Cli;
use shiftgrid::cli::handlers;
use shiftgrid::logging;

fn main() {
    let cli = Cli::parse();

    match (&cli.log_file, &cli.command) {
        (Some(path), _) => {
            if let Err(e) = logging::init_file_logging(path) {
                eprintln!("error: could not open log file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        // No subcommand → the grid owns the terminal, so no stderr logging
        (None, None) => {}
        (None, Some(_)) => logging::init_stderr_logging(),
    }

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
