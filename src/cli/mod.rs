//! CLI module for the roster API
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP API server

pub mod serve;

use clap::{Parser, Subcommand};

/// Roster API - team and membership management service
#[derive(Parser)]
#[command(name = "roster-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
