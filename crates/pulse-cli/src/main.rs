mod analyze;
mod records;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pulse-cli")]
#[command(about = "Pulse feedback sentiment command line interface")]
struct Cli {
    /// Stopword list replacing the built-in English list
    #[arg(long, global = true, env = "PULSE_STOPWORDS_PATH")]
    stopwords: Option<PathBuf>,

    /// VADER-format lexicon replacing the built-in one
    #[arg(long, global = true, env = "PULSE_VADER_LEXICON_PATH")]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a piece of text offline and print the result as JSON
    Analyze {
        /// Text to analyze
        text: String,
    },
    /// Inspect language resources
    Resources {
        #[command(subcommand)]
        command: ResourcesCommands,
    },
    /// Database management
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Print aggregate counts of stored analyses
    Summary,
    /// Print the most recently stored analyses
    Recent {
        /// Maximum number of records to print
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
}

#[derive(Debug, Subcommand)]
enum ResourcesCommands {
    /// Load and validate stopwords and lexicon, then print their sizes
    Check,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Apply pending migrations
    Migrate,
    /// Check that the database is reachable
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stopwords = cli.stopwords.as_deref();
    let lexicon = cli.lexicon.as_deref();

    match cli.command {
        Some(Commands::Analyze { text }) => analyze::run_analyze(&text, stopwords, lexicon)?,
        Some(Commands::Resources {
            command: ResourcesCommands::Check,
        }) => analyze::run_resources_check(stopwords, lexicon)?,
        Some(Commands::Db { command }) => {
            let pool = connect().await?;
            match command {
                DbCommands::Migrate => {
                    let applied = pulse_db::run_migrations(&pool).await?;
                    println!("applied {applied} migration(s)");
                }
                DbCommands::Ping => {
                    pulse_db::health_check(&pool).await?;
                    println!("database ok");
                }
            }
        }
        Some(Commands::Summary) => records::run_summary(&connect().await?).await?,
        Some(Commands::Recent { limit }) => records::run_recent(&connect().await?, limit).await?,
        None => println!("pulse-cli: run with --help to list commands"),
    }

    Ok(())
}

async fn connect() -> anyhow::Result<sqlx::PgPool> {
    let config = pulse_core::load_app_config()?;
    tracing::debug!(env = %config.env, "connecting to database");
    let pool_config = pulse_db::PoolConfig::from_app_config(&config);
    let pool = pulse_db::connect_pool(&config.database_url, pool_config).await?;
    Ok(pool)
}
