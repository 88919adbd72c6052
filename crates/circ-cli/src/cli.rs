use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "circ",
    about = "Circulation Ledger — tamper-evident checkout records",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the ledger service
    Serve(ServeArgs),
    /// Build a local ledger, append sample checkouts, and audit the chain
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Number of sample checkouts to append
    #[arg(long, default_value = "3")]
    pub checkouts: usize,
}
