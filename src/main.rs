//! RepoMesh CLI entry point
//!
//! Parses arguments, installs logging, runs the command, and turns its result
//! into the process exit status. Errors are printed as a single line on stderr.

use clap::Parser;
use repomesh_cli::cli::Cli;
use repomesh_cli::core::user_friendly_error;
use repomesh_cli::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    init_logging(cli.log_filter());

    match cli.execute().await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
