//! depgraph CLI entry point
//!
//! Parses the command line, runs the resolution pipeline and turns any
//! escaping error into a colored message on stderr with exit code 1.

use anyhow::Result;
use clap::Parser;
use depgraph_cli::cli;
use depgraph_cli::core::user_friendly_error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
