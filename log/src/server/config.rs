//! Configuration for the proglog HTTP server.

use std::net::SocketAddr;

use clap::Parser;

use crate::Config;

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "proglog")]
#[command(about = "In-memory append-only log served over HTTP")]
pub struct CliArgs {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080", env = "PROGLOG_ADDR")]
    pub addr: SocketAddr,

    /// Number of records to reserve space for at startup
    #[arg(long, default_value = "0", env = "PROGLOG_INITIAL_CAPACITY")]
    pub initial_capacity: usize,
}

impl CliArgs {
    /// Build the log configuration from the CLI arguments.
    pub fn to_log_config(&self) -> Config {
        Config {
            initial_capacity: self.initial_capacity,
        }
    }
}

/// Configuration for [`LogServer`](super::LogServer).
#[derive(Debug, Clone)]
pub struct LogServerConfig {
    pub addr: SocketAddr,
}

impl Default for LogServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

impl From<&CliArgs> for LogServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self { addr: args.addr }
    }
}
