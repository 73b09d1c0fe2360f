use clap::Subcommand;

use super::common::{FormatArgs, ResetArgs, SelectArgs};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List history entries")]
    List {
        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        reset: ResetArgs,

        /// Only entries pinned for retention
        #[arg(short, long)]
        pinned: bool,
    },

    #[command(about = "Print one history entry by index or id")]
    Get {
        /// Ordinal index or item id
        #[arg(allow_negative_numbers = true)]
        locator: String,

        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        reset: ResetArgs,

        /// Also make the entry the current clipboard content
        #[arg(long)]
        restore: bool,
    },

    #[command(about = "Print the current clipboard value")]
    Current {
        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        reset: ResetArgs,
    },
}
