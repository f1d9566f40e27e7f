//! `radix_rebase` Binary Entry Point
//!
//! Converts a file of decimal digits into radix 2 to 62, emitting only the
//! digits the input precision supports.

use std::process;

use clap::Parser;
use frameworks_cli::{run, ConvertArgs};
use infrastructure_debugging::DebugUtils;

fn main() {
    let args = ConvertArgs::parse();

    if let Err(e) = DebugUtils::init(args.verbose) {
        eprintln!("Warning: {}", e);
    }

    match run(&args) {
        Ok(outcome) => {
            if let Some(path) = outcome.artifact {
                println!("{}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
