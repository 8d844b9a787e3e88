//! CLI frontend for the Indecision option picker.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "indecision",
    about = "Indecision: put your life in the hands of a computer",
    version,
    propagate_version = true
)]
struct Cli {
    /// Store file holding the saved options (default: user data dir)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Key the option list is saved under
    #[arg(short, long, global = true, default_value = indecision_core::config::DEFAULT_STORAGE_KEY)]
    key: String,

    /// RNG seed for reproducible picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an option to the list
    Add {
        /// Option text (surrounding whitespace is trimmed)
        text: String,
    },

    /// Remove an option from the list
    Remove {
        /// Exact option text
        text: String,
    },

    /// Remove all options
    Clear,

    /// Show all options
    List,

    /// Let the computer decide: pick one option at random
    Pick,

    /// Launch the interactive option picker
    Tui,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Context::new(cli.store, cli.key, cli.seed);

    let result = match cli.command {
        Commands::Add { text } => commands::add::run(&ctx, &text),
        Commands::Remove { text } => commands::remove::run(&ctx, &text),
        Commands::Clear => commands::clear::run(&ctx),
        Commands::List => commands::list::run(&ctx),
        Commands::Pick => commands::pick::run(&ctx),
        Commands::Tui => commands::tui::run(&ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
