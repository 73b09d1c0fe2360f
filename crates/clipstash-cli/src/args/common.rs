use clap::Args;

use clipstash_engine::{RecordOptions, ResetMode};
use clipstash_types::ContentType;

use super::enums::{ContentTypeArg, ResetModeArg};

/// Content-type selection directives.
///
/// Both may be given; "all" always wins at resolution time, which is when
/// the override warning is decided.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct SelectArgs {
    /// Restrict output to one content type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub content_type: Option<ContentTypeArg>,

    /// Do not filter by content type
    #[arg(short, long)]
    pub all: bool,
}

impl SelectArgs {
    /// The explicitly requested type, or the default sentinel.
    pub fn explicit(&self) -> ContentType {
        self.content_type
            .map(ContentType::from)
            .unwrap_or(ContentType::Default)
    }
}

/// Record layout flags.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct FormatArgs {
    /// Prefix each record with its ordinal index
    #[arg(short, long)]
    pub index: bool,

    /// Prefix each record with the item id
    #[arg(long)]
    pub id: bool,

    /// Prefix each record with the capture timestamp
    #[arg(short = 'T', long)]
    pub time: bool,

    /// Separate records with a null byte instead of a newline
    #[arg(short = '0', long = "null")]
    pub null_separator: bool,
}

impl FormatArgs {
    pub fn record_options(&self) -> RecordOptions {
        RecordOptions {
            null_separator: self.null_separator,
            show_index: self.index,
            show_id: self.id,
            show_timestamp: self.time,
        }
    }
}

/// Terminal-reset emission controls.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ResetArgs {
    /// Emit escape sequences regardless of terminal detection
    #[arg(long)]
    pub ansi: bool,

    /// When to append a terminal reset after each value
    #[arg(long, value_name = "MODE")]
    pub reset: Option<ResetModeArg>,
}

impl ResetArgs {
    /// The requested mode, falling back to the configured default.
    pub fn mode(&self, default: ResetMode) -> ResetMode {
        self.reset.map(ResetMode::from).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_type_resolves_to_the_default_sentinel() {
        let select = SelectArgs::default();
        assert_eq!(select.explicit(), ContentType::Default);
    }

    #[test]
    fn format_flags_map_onto_record_options() {
        let format = FormatArgs {
            index: true,
            id: false,
            time: true,
            null_separator: true,
        };
        let options = format.record_options();
        assert!(options.show_index);
        assert!(!options.show_id);
        assert!(options.show_timestamp);
        assert!(options.null_separator);
    }

    #[test]
    fn reset_mode_falls_back_to_the_given_default() {
        let args = ResetArgs::default();
        assert_eq!(args.mode(ResetMode::Off), ResetMode::Off);

        let args = ResetArgs {
            ansi: false,
            reset: Some(ResetModeArg::On),
        };
        assert_eq!(args.mode(ResetMode::Off), ResetMode::On);
    }
}
