use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ddt")]
#[command(about = "Schedule and inspect Datadog monitor downtimes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dump raw request and response payloads
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one downtime by ID
    Get {
        /// Downtime ID
        #[arg(long)]
        id: i64,
    },

    /// List all current downtimes
    #[command(alias = "ls")]
    List,

    /// Schedule a new downtime
    Create {
        /// Monitor scopes to suppress, comma-separated key:value tags
        /// (e.g. "env:prod,service:api")
        #[arg(long)]
        scope: String,

        /// How long the downtime lasts, from now (e.g. 30m, 1h30m)
        #[arg(long)]
        time: String,

        /// Message shown on suppressed monitors
        #[arg(long)]
        message: Option<String>,
    },

    /// Update a downtime; at least one of scope, time or message required
    Update {
        /// Downtime ID
        #[arg(long)]
        id: i64,

        /// New scopes, comma-separated key:value tags
        #[arg(long)]
        scope: Option<String>,

        /// New duration, measured from now (e.g. 30m, 1h30m)
        #[arg(long)]
        time: Option<String>,

        /// New message
        #[arg(long)]
        message: Option<String>,
    },

    /// Cancel a downtime by ID
    Delete {
        /// Downtime ID
        #[arg(long)]
        id: i64,
    },
}
