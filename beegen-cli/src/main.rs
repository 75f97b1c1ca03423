use beegen_cli::{Cli, execute};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
