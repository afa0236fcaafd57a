//! CLI command definitions and dispatch for the `pchat` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod personas;

use clap::{Parser, Subcommand};

/// Persona-based AI chat service.
#[derive(Parser)]
#[command(name = "pchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "5001", env = "PERSONACHAT_PORT")]
        port: u16,

        /// Host address to bind.
        #[arg(long, default_value = "127.0.0.1", env = "PERSONACHAT_HOST")]
        host: String,
    },

    /// Show the persona catalog.
    Personas,
}
