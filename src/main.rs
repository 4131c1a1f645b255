use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// roulette - can't decide what to order? Spin for it.
#[derive(Parser)]
#[command(name = "roulette")]
#[command(about = "Random food recommendations from your Supabase menu", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shuffle the menu and settle on one dish (Ctrl+C cancels)
    Pick {
        /// Only pick from this category
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Print the menu as cards
    List {
        /// Only show this category
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Print the categories present in the menu
    Categories,
    /// Test the connection to the data service
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = roulette::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    roulette::observability::init_observability(&config.observability)?;

    match cli.command {
        Commands::Pick { category } => cli::pick(config, category).await,
        Commands::List { category } => cli::list(config, category).await,
        Commands::Categories => cli::categories(config).await,
        Commands::Check => cli::check(config).await,
    }
}
