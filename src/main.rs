use clap::Parser;
use std::process;

mod controller;
mod platform;

use controller::{get_input_source, set_input_source};

#[derive(Parser, Debug)]
#[command(
    name = "imctl",
    version,
    about = "Query and switch the active keyboard input source",
    long_about = None
)]
struct Args {
    /// Input source identifier to switch to.
    /// If not provided, the current input source is printed.
    input_source: Option<String>,

    #[arg(short, long, help = "Enable verbose output for debugging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Platform modules pick the toggle up through the environment.
    if args.verbose {
        std::env::set_var("IMCTL_VERBOSE", "1");
    }

    let service = platform::SystemInputService::new();

    match args.input_source {
        None => match get_input_source(&service) {
            Ok(id) => {
                println!("{}", id);
            }
            Err(e) => {
                eprintln!("Error getting input source: {}", e);
                process::exit(1);
            }
        },
        Some(id) => match set_input_source(&service, &id) {
            Ok(true) => {
                // Switched (or already active); stay silent.
            }
            Ok(false) => {
                println!("failed to set input source");
            }
            Err(e) => {
                eprintln!("Error switching input source: {}", e);
                process::exit(1);
            }
        },
    }
}
