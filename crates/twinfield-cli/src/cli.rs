use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// twinfield: talk to the Twinfield web services from the command line.
#[derive(Parser, Debug)]
#[command(name = "twinfield", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug`, `twinfield_secure=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration (password masked).
    Config,
    /// Log on and print the assigned cluster.
    Logon,
    /// Send an XML document through ProcessXml and print the response.
    Process {
        /// File holding the request document.
        file: PathBuf,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
