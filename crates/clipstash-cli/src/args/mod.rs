mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "clipstash")]
#[command(about = "Query and replay clipboard history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding the history and pinned documents
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Suppress warnings and error diagnostics on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
