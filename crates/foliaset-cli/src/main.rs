//! foliaset CLI main entry point

use clap::Parser;
use foliaset_cli::commands::{Cli, CommandExecutor};

fn main() {
    // Logs go to stderr so stdout stays clean for converted output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let executor = CommandExecutor::new();
    match executor.execute(cli.command) {
        Ok(result) => print!("{}", result.output),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}
