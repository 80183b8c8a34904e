//! lightbnb CLI - query the LightBnB rental database from the shell
//!
//! Subcommands:
//! - `user` - look up users by email or id, add a user
//! - `reservations` - list a guest's reservations
//! - `search` - filtered property search (`--explain` prints the query plan)
//! - `property` - add a property listing from a JSON file
//!
//! Results are printed to stdout as pretty JSON.

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{Database, DbConfig};

mod commands;
mod tracing_setup;

use commands::Commands;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query the LightBnB rental database",
    long_about = "Look up users, list reservations, and search properties in a LightBnB \
                  PostgreSQL database. Every value is sent as a bound query parameter."
)]
struct Cli {
    /// Enable debug logging (stderr)
    #[arg(long, global = true)]
    debug: bool,

    /// Database URL (overrides DATABASE_URL / .env)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    cli.command.validate()?;

    if let Some(explained) = cli.command.explain()? {
        println!("{}", explained);
        return Ok(());
    }

    let config = DbConfig::from_env_with_url(cli.database_url).context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env",
    )?;

    let db = Database::connect(&config)
        .await
        .context("Failed to connect to database")?;

    let result = cli.command.run(&db).await;
    db.close().await;
    result
}
