//! CLI frontend for Daily Light Tarot.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::Context;

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Daily Light Tarot — a gentle three-card reading, the same all day",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the device id and cached daily draws
    #[arg(long, global = true, env = "TAROT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// JSON file with a replacement deck
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    /// Multiply presentation delays (0 turns them off)
    #[arg(long, global = true, default_value_t = 1.0)]
    pace: f64,

    /// Log engine internals to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's reading (drawn once per day, then remembered)
    Daily {
        /// Name to greet and to mix into the seed
        #[arg(short, long, default_value = "")]
        name: String,
    },

    /// A fresh one-off reading that does not replace today's
    Surprise {
        /// Name to greet and to mix into the seed
        #[arg(short, long, default_value = "")]
        name: String,
    },

    /// Print today's reading as plain text for sharing
    Share {
        /// Name used if today's reading has not been drawn yet
        #[arg(short, long, default_value = "")]
        name: String,
    },

    /// List the cards in the active deck
    Catalog {
        /// Print the deck as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the seed and first random values for a seed string
    Seed {
        /// Seed string, e.g. "daily|2024-01-01|alice|<device>"
        material: String,

        /// How many random values to print
        #[arg(short, long, default_value_t = 3)]
        count: usize,
    },

    /// Forget today's reading so the next `daily` draws again
    Forget,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = Context::new(cli.data_dir, cli.deck, cli.pace);

    let result = match cli.command {
        Commands::Daily { name } => commands::daily::run(&ctx, &name),
        Commands::Surprise { name } => commands::surprise::run(&ctx, &name),
        Commands::Share { name } => commands::share::run(&ctx, &name),
        Commands::Catalog { json } => commands::catalog::run(&ctx, json),
        Commands::Seed { material, count } => commands::seed::run(&material, count),
        Commands::Forget => commands::forget::run(&ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
