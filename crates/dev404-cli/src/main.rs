//! CLI for dev404 — DEV 404 in your terminal.

mod commands;
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dev404")]
#[command(about = "dev404 — DEV 404 in your terminal")]
#[command(version = dev404_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the full terminal experience (boot sequence, tabs, signup form)
    Run {
        /// Backend base URL (default: $DEV404_BACKEND_URL, then http://localhost:5000)
        #[arg(long)]
        backend: Option<String>,

        /// Session state file gating the boot sequence
        #[arg(long)]
        state_file: Option<String>,

        /// Replay the boot sequence even if this session has seen it
        #[arg(long)]
        fresh: bool,
    },

    /// Print the current fanbase signup count
    Count {
        /// Backend base URL
        #[arg(long)]
        backend: Option<String>,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Join the fanbase from the command line
    Signup {
        /// Email address to register
        #[arg(long)]
        email: String,

        /// Display name (empty defaults to "Fan")
        #[arg(long, default_value = "")]
        name: String,

        /// Backend base URL
        #[arg(long)]
        backend: Option<String>,
    },

    /// List the music video catalog
    Videos {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            backend,
            state_file,
            fresh,
        } => commands::run::run(backend.as_deref(), state_file.as_deref(), fresh),
        Commands::Count { backend, json } => commands::count::run(backend.as_deref(), json),
        Commands::Signup {
            email,
            name,
            backend,
        } => commands::signup::run(&email, &name, backend.as_deref()),
        Commands::Videos { json } => commands::videos::run(json),
    }
}
