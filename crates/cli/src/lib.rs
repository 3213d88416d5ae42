pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "reorder",
    about = "Re-order recommendations from order history",
    long_about = "Rank previously ordered menu items for quick re-ordering, browse the demo menu, and inspect configuration.",
    after_help = "Examples:\n  reorder recommend --history orders.json\n  reorder recommend --history orders.json --now 2024-03-31T12:00:00Z --limit 3\n  reorder menu --popular\n  reorder config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Rank menu items from an order history file")]
    Recommend {
        #[arg(long, help = "JSON order history (overrides history.path)")]
        history: Option<PathBuf>,
        #[arg(long, help = "Reference instant in RFC 3339 (defaults to the current time)")]
        now: Option<String>,
        #[arg(long, help = "How many suggestions to print (1-5)")]
        limit: Option<usize>,
    },
    #[command(about = "List the menu catalog")]
    Menu {
        #[arg(long, help = "Only items in this category")]
        category: Option<String>,
        #[arg(long, help = "Only popular items")]
        popular: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Recommend { history, now, limit } => {
            commands::recommend::run(commands::recommend::RecommendArgs { history, now, limit })
        }
        Command::Menu { category, popular } => commands::menu::run(category.as_deref(), popular),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
