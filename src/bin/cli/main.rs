mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use artdeck::deck::DEFAULT_DECK_NAME;

#[derive(Parser)]
#[command(name = "artdeck", about = "Art image folder to Anki deck converter", version)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Build the deck package from a folder of art images
    Build {
        /// Folder of art images
        #[arg(default_value = "ART")]
        folder: PathBuf,

        /// Output package path
        #[arg(long, default_value = "art_history_deck.apkg")]
        output: PathBuf,

        /// Deck name shown in Anki
        #[arg(long, default_value = DEFAULT_DECK_NAME)]
        name: String,
    },

    /// Scan a folder and report what a build would make of it
    Preview {
        /// Folder of art images
        #[arg(default_value = "ART")]
        folder: PathBuf,
    },

    /// Run the filename heuristic on a single filename
    Parse {
        /// Filename to parse (e.g. "Claude-Monet-Water-Lilies.jpg")
        filename: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build { folder, output, name } => {
            commands::build::run(&folder, &output, &name, &cli.format)?;
        }
        Command::Preview { folder } => {
            commands::preview::run(&folder, &cli.format)?;
        }
        Command::Parse { filename } => {
            commands::parse::run(&filename, &cli.format)?;
        }
    }

    Ok(())
}
