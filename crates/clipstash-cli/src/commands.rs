use anyhow::Result;
use std::path::Path;

use clipstash_engine::{RecordFormatter, RecordOptions, ResetPolicy, Selection, resolve_selection};
use clipstash_providers::{FileHistoryStore, paths};

use crate::args::{Cli, Commands, ResetArgs};
use crate::config::{CONFIG_FILE, Config};
use crate::context::TerminalContext;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = paths::resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;
    let store = FileHistoryStore::new(&data_dir);
    let terminal = TerminalContext::detect();

    match command {
        Commands::List {
            select,
            format,
            reset,
            pinned,
        } => {
            let selection = resolve_selection(select.explicit(), select.all);
            warn_on_override(&selection, cli.quiet);

            let formatter = RecordFormatter::new(format.record_options());
            let policy = reset_policy(&reset, &config, terminal);
            let pinned_dir = pinned.then(|| paths::pinned_dir(&data_dir));

            handlers::list::handle(
                &store,
                pinned_dir.as_deref(),
                selection.content_type,
                &formatter,
                &policy,
                terminal.color_enabled(),
            )
        }

        Commands::Get {
            locator,
            select,
            format,
            reset,
            restore,
        } => {
            let selection = resolve_selection(select.explicit(), select.all);
            warn_on_override(&selection, cli.quiet);

            let formatter = RecordFormatter::new(format.record_options());
            let policy = reset_policy(&reset, &config, terminal);

            handlers::get::handle(
                &store,
                &locator,
                selection.content_type,
                &formatter,
                &policy,
                terminal.color_enabled(),
                restore,
            )
        }

        Commands::Current { select, reset } => {
            let selection = resolve_selection(select.explicit(), select.all);
            warn_on_override(&selection, cli.quiet);

            let formatter = RecordFormatter::new(RecordOptions::default());
            let policy = reset_policy(&reset, &config, terminal);

            handlers::current::handle(&store, selection.content_type, &formatter, &policy)
        }
    }
}

fn reset_policy(args: &ResetArgs, config: &Config, terminal: TerminalContext) -> ResetPolicy {
    ResetPolicy {
        mode: args.mode(config.reset_mode()),
        ansi_enabled: args.ansi,
        redirected: terminal.redirected,
        truecolor: terminal.truecolor,
    }
}

fn warn_on_override(selection: &Selection, quiet: bool) {
    if selection.overridden && !quiet {
        eprintln!("Warning: --type is ignored when --all is given");
    }
}

fn show_guidance(data_dir: &Path) {
    println!("clipstash - Clipboard history from the command line\n");
    println!("Quick commands:");
    println!("  clipstash list --index            # View history with ordinals");
    println!("  clipstash get <INDEX|ID>          # Print one entry");
    println!("  clipstash get <INDEX|ID> --restore # Put an entry back on the clipboard");
    println!("  clipstash current                 # Print the current clipboard value\n");
    println!("Data directory: {}", data_dir.display());
    println!("\nFor more commands:");
    println!("  clipstash --help");
}
