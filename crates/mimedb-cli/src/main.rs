use clap::Parser;
use mimedb_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logging is best-effort; lookups still work without it.
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("mimedb: logging disabled: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("mimedb error: {:#}", err);
        std::process::exit(1);
    }
}
