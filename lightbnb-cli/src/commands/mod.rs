//! Command implementations for the lightbnb CLI

pub mod property;
pub mod reservations;
pub mod search;
pub mod user;

use anyhow::{Context, Result};
use clap::Subcommand;
use lightbnb_db::Database;
use serde::Serialize;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up or add users
    User(user::UserArgs),
    /// List a guest's reservations with property details
    Reservations(reservations::ReservationsArgs),
    /// Search properties by owner, city, nightly price, and rating
    Search(search::SearchArgs),
    /// Manage property listings
    Property(property::PropertyArgs),
}

impl Commands {
    /// Reject bad arguments before any connection is opened.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::User(args) => args.validate(),
            Self::Search(args) => args.validate(),
            Self::Property(_) | Self::Reservations(_) => Ok(()),
        }
    }

    /// Output for commands that answer without the database.
    pub fn explain(&self) -> Result<Option<String>> {
        match self {
            Self::Search(args) if args.explain => search::explain(args).map(Some),
            _ => Ok(None),
        }
    }

    pub async fn run(self, db: &Database) -> Result<()> {
        match self {
            Self::User(args) => user::run_user(args, db).await,
            Self::Reservations(args) => reservations::run_reservations(args, db).await,
            Self::Search(args) => search::run_search(args, db).await,
            Self::Property(args) => property::run_property(args, db).await,
        }
    }
}

/// Print a value to stdout as pretty JSON.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
