//! gradebook CLI — the interactive console front end.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod render;
mod session;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Console student grade tracker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive shell (the default when no subcommand is given)
    Shell {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Identity mode override: "name" or "id"
        #[arg(long)]
        identity: Option<String>,
    },

    /// Create a starter gradebook.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Shell { config, identity }) => commands::shell::execute(config, identity),
        Some(Commands::Init) => commands::init::execute(),
        None => commands::shell::execute(None, None),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
